use super::error::SynthesisError;
use crate::domain::emotion::{BaseEmotion, EmotionKey, Intensity, Segment};

/// The built-in multi-segment script, in playback order
pub fn default_script() -> Vec<Segment> {
    vec![
        Segment::new(
            "Hello there, it's good to see you. ",
            EmotionKey::tiered(BaseEmotion::Happy, Intensity::Moderate),
        ),
        Segment::new(
            "But honestly, I'm starting to feel uncertain... ",
            EmotionKey::plain(BaseEmotion::Doubt),
        ),
        Segment::new(
            "And now I'm getting really frustrated!",
            EmotionKey::tiered(BaseEmotion::Angry, Intensity::Moderate),
        ),
    ]
}

/// Parse a script from JSON: `[{"text": "...", "emotion": "angry_2"}, ...]`
pub fn parse_script(json: &str) -> Result<Vec<Segment>, SynthesisError> {
    let segments: Vec<Segment> = serde_json::from_str(json)
        .map_err(|e| SynthesisError::Invalid(format!("script is not valid: {}", e)))?;

    if segments.is_empty() {
        return Err(SynthesisError::Invalid("script has no segments".to_string()));
    }

    Ok(segments)
}
