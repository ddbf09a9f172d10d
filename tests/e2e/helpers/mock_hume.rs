use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use futures::stream;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-hume-api-key";

/// What the mock endpoint sends back for one request
pub struct MockReply {
    pub status: StatusCode,
    /// Raw body frames, sent as separate writes
    pub frames: Vec<String>,
}

impl MockReply {
    /// One NDJSON line per audio fragment, all in a single frame
    pub fn audio(fragments: &[Vec<u8>]) -> Self {
        let body = fragments
            .iter()
            .enumerate()
            .map(|(index, data)| audio_line(index, data))
            .collect::<String>();
        Self {
            status: StatusCode::OK,
            frames: vec![body],
        }
    }

    pub fn frames(frames: Vec<String>) -> Self {
        Self {
            status: StatusCode::OK,
            frames,
        }
    }

    pub fn empty() -> Self {
        Self::frames(Vec::new())
    }

    pub fn error(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            frames: vec![json!({ "message": message }).to_string()],
        }
    }
}

pub fn audio_line(index: usize, data: &[u8]) -> String {
    format!(
        "{}\n",
        json!({
            "type": "audio",
            "audio": STANDARD.encode(data),
            "chunk_index": index,
            "is_last_chunk": false,
        })
    )
}

/// Marker audio for utterance `index`: a run of one distinct byte, longer for later utterances
pub fn marker(index: usize) -> Vec<u8> {
    vec![b'A' + index as u8; (index + 1) * 8]
}

type Responder = dyn Fn(&Value) -> MockReply + Send + Sync;

#[derive(Clone)]
struct MockState {
    responder: Arc<Responder>,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// Local stand-in for the Hume streaming JSON endpoint
pub struct MockHume {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockHume {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&Value) -> MockReply + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            responder: Arc::new(responder),
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/v0/tts/stream/json", post(stream_json))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// Replies with one marker fragment per utterance, in utterance order
    pub async fn echo_markers() -> Self {
        Self::start(|body| {
            let count = body["utterances"].as_array().map(Vec::len).unwrap_or(0);
            let fragments: Vec<Vec<u8>> = (0..count).map(marker).collect();
            MockReply::audio(&fragments)
        })
        .await
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn stream_json(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.requests.lock().unwrap().push(body.clone());

    let authorized = headers
        .get("x-hume-api-key")
        .and_then(|v| v.to_str().ok())
        .map(|key| key == TEST_API_KEY)
        .unwrap_or(false);
    if !authorized {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }

    let reply = (state.responder)(&body);
    let frames = reply
        .frames
        .into_iter()
        .map(Ok::<_, std::io::Error>);

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from_stream(stream::iter(frames)),
    )
        .into_response()
}
