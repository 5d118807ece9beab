use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreedError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Catalog request to {url} failed with status {status}")]
    HttpStatusError {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Io,
    Configuration,
}

impl BreedError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BreedError::ApiError(_) | BreedError::HttpStatusError { .. } => ErrorCategory::Network,
            BreedError::SerializationError(_) => ErrorCategory::Data,
            BreedError::IoError(_) => ErrorCategory::Io,
            BreedError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }
}

pub type Result<T> = std::result::Result<T, BreedError>;
