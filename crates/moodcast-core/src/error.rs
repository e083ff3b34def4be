use thiserror::Error;

/// Errors from the shared core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
