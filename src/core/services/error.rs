//! Failure taxonomy for calls to the clients backend.

use thiserror::Error;

/// Every variant ends up as one "operation failed" alert at the call site.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("Invalid API response: {0}")]
    Decode(String),

    /// The selected spreadsheet could not be read by the browser.
    #[error("Could not read file: {0}")]
    File(String),
}

impl ApiError {
    /// Text the backend put in the `error` field, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
