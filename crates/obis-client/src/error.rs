//! Error types for the OBIS client

use std::fmt;

/// Errors that can occur when interacting with the OBIS API
#[derive(Debug)]
pub enum ObisError {
    Http(reqwest::Error),
    Status(reqwest::StatusCode),
    Json(serde_json::Error),
}

impl fmt::Display for ObisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "OBIS HTTP error: {}", e),
            Self::Status(code) => write!(f, "OBIS returned status {}", code),
            Self::Json(e) => write!(f, "OBIS JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for ObisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Status(_) => None,
            Self::Json(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for ObisError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for ObisError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, ObisError>;
