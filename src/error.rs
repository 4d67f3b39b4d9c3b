//! Application Error Types
//!
//! Errors raised while talking to the API, decoding responses or touching
//! browser storage. The `Display` text is what the toast shows.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A response or stored record could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Browser storage refused a read or write
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// HTTP status of the failed request, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the session token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Wrap a JavaScript exception thrown by a storage call
    pub fn storage(err: JsValue) -> Self {
        AppError::Storage(
            err.as_string()
                .unwrap_or_else(|| format!("{:?}", err)),
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
