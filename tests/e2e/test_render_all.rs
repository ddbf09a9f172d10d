use crate::e2e::helpers;

use axum::http::StatusCode;
use helpers::{MockHume, MockReply, TestContext};
use hume_emotions::controllers::render::RenderMode;
use hume_emotions::domain::emotion::EmotionCatalog;
use hume_emotions::domain::synthesis::AudioFormat;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn it_should_render_every_preset_to_its_own_file() {
    let ctx = TestContext::new(MockHume::echo_markers().await);
    let catalog = EmotionCatalog::builtin();

    let report = ctx
        .controller
        .run(RenderMode::All { text: None }, &ctx.voice(), AudioFormat::Mp3)
        .await
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.rendered.len(), catalog.len());

    let mut expected: Vec<String> = catalog.labels().iter().map(|l| format!("{l}.mp3")).collect();
    expected.sort();
    assert_eq!(ctx.output_files(), expected);
}

#[tokio::test]
async fn it_should_render_in_catalog_order_with_default_lines() {
    let ctx = TestContext::new(MockHume::echo_markers().await);
    let catalog = EmotionCatalog::builtin();

    ctx.controller
        .run(RenderMode::All { text: None }, &ctx.voice(), AudioFormat::Mp3)
        .await
        .unwrap();

    let requests = ctx.mock.requests();
    assert_eq!(requests.len(), catalog.len());
    for (request, preset) in requests.iter().zip(catalog.presets()) {
        let utterance = &request["utterances"][0];
        assert_eq!(utterance["description"], preset.description);
        assert_eq!(utterance["text"], catalog.default_line(&preset.key));
    }
}

#[tokio::test]
async fn it_should_use_override_text_for_every_preset() {
    let ctx = TestContext::new(MockHume::echo_markers().await);

    ctx.controller
        .run(
            RenderMode::All {
                text: Some("Same words, different feelings.".to_string()),
            },
            &ctx.voice(),
            AudioFormat::Wav,
        )
        .await
        .unwrap();

    let requests = ctx.mock.requests();
    assert!(!requests.is_empty());
    assert!(requests
        .iter()
        .all(|r| r["utterances"][0]["text"] == "Same words, different feelings."));
}

#[tokio::test]
async fn it_should_continue_past_a_failed_emotion() {
    let furious = EmotionCatalog::builtin().resolve("angry_3").unwrap().description;
    let mock = MockHume::start(move |body| {
        if body["utterances"][0]["description"] == furious {
            MockReply::error(StatusCode::UNPROCESSABLE_ENTITY, "description rejected")
        } else {
            MockReply::audio(&[b"ok".to_vec()])
        }
    })
    .await;
    let ctx = TestContext::new(mock);
    let catalog = EmotionCatalog::builtin();

    let report = ctx
        .controller
        .run(RenderMode::All { text: None }, &ctx.voice(), AudioFormat::Mp3)
        .await
        .unwrap();

    assert!(!report.is_success());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].label, "angry_3");
    assert!(report.failed[0].error.to_string().contains("422"));
    assert_eq!(report.rendered.len(), catalog.len() - 1);
    assert_eq!(ctx.mock.requests().len(), catalog.len());
    assert!(!ctx.out_dir().join("angry_3.mp3").exists());
}

#[tokio::test]
async fn it_should_report_empty_renders_without_failing() {
    let mock = MockHume::start(|body| {
        if body["utterances"][0]["text"] == "silent" {
            MockReply::empty()
        } else {
            MockReply::audio(&[vec![1, 2, 3]])
        }
    })
    .await;
    let ctx = TestContext::new(mock);

    let report = ctx
        .controller
        .run(
            RenderMode::All {
                text: Some("silent".to_string()),
            },
            &ctx.voice(),
            AudioFormat::Mp3,
        )
        .await
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.empty_renders().count(), report.rendered.len());
    for outcome in &report.rendered {
        assert_eq!(std::fs::metadata(&outcome.path).unwrap().len(), 0);
    }
}
