use crate::domain::emotion::CatalogError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("unknown emotion: {0}")]
    UnknownEmotion(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("malformed audio in chunk {index}: {reason}")]
    MalformedChunk { index: usize, reason: String },
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CatalogError> for SynthesisError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownEmotion(label) => SynthesisError::UnknownEmotion(label),
        }
    }
}

impl From<SynthesisError> for AppError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::UnknownEmotion(label) => AppError::UnknownEmotion(label),
            SynthesisError::Invalid(msg) => AppError::BadRequest(msg),
            SynthesisError::Dependency(msg) => AppError::ExternalService(msg),
            err @ SynthesisError::MalformedChunk { .. } => AppError::ExternalService(err.to_string()),
            SynthesisError::Io(e) => AppError::Io(e),
        }
    }
}
