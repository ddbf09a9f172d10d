/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown emotion: {0}")]
    UnknownEmotion(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Errors raised before any network call is made
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::UnknownEmotion(_) | Self::BadRequest(_)
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        if self.is_usage_error() {
            2
        } else {
            1
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
