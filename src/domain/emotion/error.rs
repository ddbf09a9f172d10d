use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown emotion: {0}")]
    UnknownEmotion(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownEmotion(label) => AppError::UnknownEmotion(label),
        }
    }
}
