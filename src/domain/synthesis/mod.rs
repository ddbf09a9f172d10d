pub mod dto;
pub mod error;
pub mod script;
pub mod service;

pub use dto::{AudioFormat, SynthesisRequest, TtsChunk, Utterance, VoiceProvider, VoiceSelection};
pub use error::SynthesisError;
pub use script::{default_script, parse_script};
pub use service::{BatchReport, RenderFailure, RenderOutcome, SynthesisService, SynthesisServiceApi};
