use serde_json::Value;

/// Check one posted utterance against the expected text, voice and preset parameters
pub fn assert_utterance(
    utterance: &Value,
    expected_text: &str,
    expected_voice: &str,
    expected_description: &str,
) {
    assert_eq!(utterance.get("text").and_then(|v| v.as_str()), Some(expected_text));
    assert_eq!(
        utterance
            .get("voice")
            .and_then(|v| v.get("name"))
            .and_then(|v| v.as_str()),
        Some(expected_voice)
    );
    assert_eq!(
        utterance.get("description").and_then(|v| v.as_str()),
        Some(expected_description)
    );
    assert!(
        utterance
            .get("speed")
            .and_then(|v| v.as_f64())
            .map(|speed| speed > 0.0)
            .unwrap_or(false),
        "utterance speed should be positive"
    );
}

/// Check the request envelope shared by every render
pub fn assert_stream_request(body: &Value, expected_format: &str) {
    assert_eq!(
        body.get("format").and_then(|f| f.get("type")).and_then(|v| v.as_str()),
        Some(expected_format)
    );
    assert_eq!(body.get("strip_headers").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(body.get("version").and_then(|v| v.as_str()), Some("1"));
}
