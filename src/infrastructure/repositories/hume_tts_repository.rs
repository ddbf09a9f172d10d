use super::tts_repository::{TtsChunkStream, TtsRepository};
use crate::domain::synthesis::{SynthesisRequest, TtsChunk};
use async_trait::async_trait;
use futures::{Stream, StreamExt};

/// Streaming JSON endpoint, relative to the API base URL
const STREAM_JSON_PATH: &str = "/v0/tts/stream/json";

const API_KEY_HEADER: &str = "X-Hume-Api-Key";

/// Hume AI implementation of the TTS repository.
///
/// The client is built without a request timeout; a render lasts as long as the
/// provider keeps the stream open.
pub struct HumeTtsRepository {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl HumeTtsRepository {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, STREAM_JSON_PATH)
    }
}

#[async_trait]
impl TtsRepository for HumeTtsRepository {
    async fn synthesize_stream(&self, request: &SynthesisRequest) -> Result<TtsChunkStream, String> {
        tracing::info!(
            endpoint = %self.endpoint(),
            utterance_count = request.utterances.len(),
            format = %request.format,
            text_length = request.text_length(),
            "Calling Hume TTS streaming API"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    utterance_count = request.utterances.len(),
                    "Hume TTS request failed"
                );
                format!("Hume TTS request failed: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Hume TTS API rejected request");
            return Err(format!("Hume TTS API error {}: {}", status, body));
        }

        tracing::debug!(status = %response.status(), "Hume TTS stream opened");

        Ok(Box::pin(json_lines(response.bytes_stream())))
    }
}

/// Reassemble newline-delimited JSON chunks from arbitrarily split transport frames.
///
/// The stream ends after the first error.
pub fn json_lines<S, B, E>(frames: S) -> impl Stream<Item = Result<TtsChunk, String>> + Send + 'static
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    async_stream::stream! {
        let mut frames = Box::pin(frames);
        let mut lines = LineBuffer::default();

        while let Some(frame) = frames.next().await {
            let frame = match frame {
                Ok(frame) => frame,
                Err(e) => {
                    yield Err(format!("Hume TTS stream interrupted: {}", e));
                    return;
                }
            };

            for line in lines.push(frame.as_ref()) {
                let chunk = parse_line(&line);
                let failed = chunk.is_err();
                yield chunk;
                if failed {
                    return;
                }
            }
        }

        if let Some(line) = lines.finish() {
            yield parse_line(&line);
        }
    }
}

fn parse_line(line: &str) -> Result<TtsChunk, String> {
    serde_json::from_str(line).map_err(|e| {
        tracing::error!(error = %e, line_length = line.len(), "Unparseable stream chunk");
        format!("Malformed stream chunk: {}", e)
    })
}

/// Byte buffer that hands out complete, non-blank lines
#[derive(Debug, Default)]
struct LineBuffer {
    pending: Vec<u8>,
    /// Prefix of `pending` already known to hold no newline
    scanned: usize,
}

impl LineBuffer {
    fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(bytes);

        let mut lines = Vec::new();
        let mut start = 0;
        let mut from = self.scanned;
        while let Some(offset) = self.pending[from..].iter().position(|&b| b == b'\n') {
            let end = from + offset;
            if let Some(line) = Self::decode(&self.pending[start..end]) {
                lines.push(line);
            }
            start = end + 1;
            from = start;
        }

        self.pending.drain(..start);
        self.scanned = self.pending.len();
        lines
    }

    /// Trailing data without a final newline
    fn finish(self) -> Option<String> {
        Self::decode(&self.pending)
    }

    fn decode(bytes: &[u8]) -> Option<String> {
        let line = String::from_utf8_lossy(bytes);
        let line = line.trim();
        (!line.is_empty()).then(|| line.to_string())
    }
}
