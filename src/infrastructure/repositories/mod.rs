pub mod hume_tts_repository;
pub mod tts_repository;

pub use hume_tts_repository::HumeTtsRepository;
pub use tts_repository::{TtsChunkStream, TtsRepository};
