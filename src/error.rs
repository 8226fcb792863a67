//! Error handling for the Comercia Rust client

use std::fmt;
use thiserror::Error;

/// Unified error type for the Comercia Rust client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// IO errors from the session store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The backend rejected the bearer token; any held session is discarded
    #[error("unauthorized: token rejected by the backend")]
    Unauthorized,

    /// The requested resource does not exist
    #[error("resource not found")]
    NotFound,

    /// The backend reported a failure, either via HTTP status or via a
    /// `success: false` envelope
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Message reported by the backend
        message: String,
    },

    /// The response did not match the documented envelope
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// Create a new authentication error
    pub fn auth<T: fmt::Display>(msg: T) -> Self {
        Error::Auth(msg.to_string())
    }

    /// Create a new API error
    pub fn api<T: fmt::Display>(status: u16, msg: T) -> Self {
        Error::Api {
            status,
            message: msg.to_string(),
        }
    }

    /// Create a new unexpected-response error
    pub fn unexpected<T: fmt::Display>(msg: T) -> Self {
        Error::UnexpectedResponse(msg.to_string())
    }
}
