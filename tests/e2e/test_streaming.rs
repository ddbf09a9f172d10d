use crate::e2e::helpers;

use helpers::mock_hume::audio_line;
use helpers::{MockHume, MockReply, TestContext};
use hume_emotions::domain::emotion::EmotionKey;
use hume_emotions::domain::synthesis::{AudioFormat, SynthesisError, SynthesisServiceApi};
use pretty_assertions::assert_eq;

fn neutral() -> EmotionKey {
    "neutral".parse().unwrap()
}

#[tokio::test]
async fn it_should_write_sum_of_decoded_chunk_sizes() {
    const CHUNK_COUNT: usize = 12;
    const CHUNK_SIZE: usize = 1024;

    let mock = MockHume::start(|_| {
        let fragments: Vec<Vec<u8>> = (0..CHUNK_COUNT).map(|i| vec![i as u8; CHUNK_SIZE]).collect();
        MockReply::audio(&fragments)
    })
    .await;
    let ctx = TestContext::new(mock);

    let outcome = ctx
        .service
        .synthesize_one("Counting.", &neutral(), &ctx.voice(), AudioFormat::Mp3)
        .await
        .unwrap();

    assert_eq!(outcome.chunks_received, CHUNK_COUNT);
    assert_eq!(outcome.bytes_written, (CHUNK_COUNT * CHUNK_SIZE) as u64);
    assert_eq!(
        std::fs::metadata(&outcome.path).unwrap().len(),
        (CHUNK_COUNT * CHUNK_SIZE) as u64
    );
}

#[tokio::test]
async fn it_should_report_empty_stream_as_soft_failure() {
    let ctx = TestContext::new(MockHume::start(|_| MockReply::empty()).await);

    let outcome = ctx
        .service
        .synthesize_one("Hello?", &neutral(), &ctx.voice(), AudioFormat::Mp3)
        .await
        .unwrap();

    assert!(outcome.is_empty());
    assert_eq!(outcome.chunks_received, 0);
    assert_eq!(outcome.path, ctx.out_dir().join("neutral.mp3"));
    assert!(outcome.path.exists());
    assert_eq!(std::fs::metadata(&outcome.path).unwrap().len(), 0);
}

#[tokio::test]
async fn it_should_treat_metadata_only_chunks_as_empty() {
    let mock = MockHume::start(|_| {
        MockReply::frames(vec![
            "{\"type\":\"timestamp\",\"chunk_index\":0}\n".to_string(),
            "{\"type\":\"audio\",\"audio\":\"\",\"is_last_chunk\":true}\n".to_string(),
        ])
    })
    .await;
    let ctx = TestContext::new(mock);

    let outcome = ctx
        .service
        .synthesize_one("Hello?", &neutral(), &ctx.voice(), AudioFormat::Mp3)
        .await
        .unwrap();

    assert!(outcome.is_empty());
    assert_eq!(outcome.chunks_received, 2);
}

#[tokio::test]
async fn it_should_reassemble_lines_split_across_frames() {
    let mock = MockHume::start(|_| {
        let first = audio_line(0, b"first-");
        let second = audio_line(1, b"second");
        let joined = format!("{first}{second}");
        let (a, rest) = joined.split_at(7);
        let (b, c) = rest.split_at(first.len());
        MockReply::frames(vec![a.to_string(), b.to_string(), c.to_string()])
    })
    .await;
    let ctx = TestContext::new(mock);

    let outcome = ctx
        .service
        .synthesize_one("Split.", &neutral(), &ctx.voice(), AudioFormat::Mp3)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&outcome.path).unwrap(), b"first-second");
}

#[tokio::test]
async fn it_should_fail_on_malformed_chunk() {
    let mock = MockHume::start(|_| {
        MockReply::frames(vec![
            audio_line(0, b"kept"),
            "{\"audio\": \"%%% not base64 %%%\"}\n".to_string(),
        ])
    })
    .await;
    let ctx = TestContext::new(mock);

    let result = ctx
        .service
        .synthesize_one("Broken.", &neutral(), &ctx.voice(), AudioFormat::Mp3)
        .await;

    assert!(matches!(result, Err(SynthesisError::MalformedChunk { index: 1, .. })));
    // partial output stays on disk
    assert_eq!(std::fs::read(ctx.out_dir().join("neutral.mp3")).unwrap(), b"kept");
}

#[tokio::test]
async fn it_should_fail_on_unparseable_line() {
    let mock = MockHume::start(|_| MockReply::frames(vec!["<html>gateway timeout</html>\n".to_string()])).await;
    let ctx = TestContext::new(mock);

    let result = ctx
        .service
        .synthesize_one("Broken.", &neutral(), &ctx.voice(), AudioFormat::Mp3)
        .await;

    assert!(matches!(result, Err(SynthesisError::Dependency(msg)) if msg.starts_with("Malformed stream chunk")));
}

#[tokio::test]
async fn it_should_fail_when_service_is_unreachable() {
    // Bind then drop a listener to get a port nobody is serving
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut mock = MockHume::echo_markers().await;
    mock.base_url = format!("http://{addr}");
    let ctx = TestContext::new(mock);

    let result = ctx
        .service
        .synthesize_one("Anyone?", &neutral(), &ctx.voice(), AudioFormat::Mp3)
        .await;

    assert!(matches!(result, Err(SynthesisError::Dependency(msg)) if msg.starts_with("Hume TTS request failed")));
    assert!(ctx.output_files().is_empty());
}
