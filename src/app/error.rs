use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NebulaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed request failed with status {0}")]
    Status(u16),

    #[error("Feed parsing error: {0}")]
    Parse(String),

    #[error("Feed JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification used when logging failed loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Input,
    Local,
}

impl NebulaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NebulaError::Http(_) | NebulaError::Status(_) => ErrorKind::Network,
            NebulaError::Parse(_) | NebulaError::Json(_) => ErrorKind::Parse,
            NebulaError::InvalidRange { .. } | NebulaError::InvalidUrl(_) => ErrorKind::Input,
            NebulaError::Io(_) => ErrorKind::Local,
        }
    }
}

pub type Result<T> = std::result::Result<T, NebulaError>;
