use crate::domain::emotion::EmotionPreset;
use serde::{Deserialize, Serialize};

/// Protocol version of the streaming endpoint
const STREAM_VERSION: &str = "1";

/// Voice library a voice name is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceProvider {
    /// Voices saved to the account
    #[serde(rename = "CUSTOM_VOICE")]
    CustomVoice,
    /// Hume's shared voice library
    #[serde(rename = "HUME_AI")]
    HumeAi,
}

/// Voice used for every utterance of a render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSelection {
    pub name: String,
    pub provider: VoiceProvider,
}

impl VoiceSelection {
    pub fn new(name: impl Into<String>, provider: VoiceProvider) -> Self {
        Self {
            name: name.into(),
            provider,
        }
    }
}

/// Container format of the rendered audio; also decides the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Wav,
}

impl AudioFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// One text unit with its voice and style parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub voice: VoiceSelection,
    pub description: String,
    pub speed: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_silence: Option<f32>,
}

impl Utterance {
    pub fn from_preset(text: impl Into<String>, preset: &EmotionPreset, voice: &VoiceSelection) -> Self {
        Self {
            text: text.into(),
            voice: voice.clone(),
            description: preset.description.to_string(),
            speed: preset.speed,
            trailing_silence: preset.trailing_silence,
        }
    }
}

/// Body of POST /v0/tts/stream/json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub utterances: Vec<Utterance>,
    pub format: AudioFormat,
    pub strip_headers: bool,
    pub version: String,
}

impl SynthesisRequest {
    pub fn new(utterances: Vec<Utterance>, format: AudioFormat) -> Self {
        Self {
            utterances,
            format,
            strip_headers: true,
            version: STREAM_VERSION.to_string(),
        }
    }

    pub fn text_length(&self) -> usize {
        self.utterances.iter().map(|u| u.text.len()).sum()
    }
}

/// One line of the streamed response. Every field is optional; only `audio` is consumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TtsChunk {
    /// Base64-encoded audio fragment
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub chunk_index: Option<u32>,
    #[serde(default)]
    pub utterance_index: Option<u32>,
    #[serde(default)]
    pub is_last_chunk: Option<bool>,
    #[serde(default)]
    pub generation_id: Option<String>,
}

impl TtsChunk {
    pub fn with_audio(audio: impl Into<String>) -> Self {
        Self {
            audio: Some(audio.into()),
            ..Default::default()
        }
    }
}
