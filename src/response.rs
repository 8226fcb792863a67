//! The response envelope shared by every Comercia endpoint

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Generic response wrapper returned by the backend:
/// `{success, message, data, timestamp}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,

    /// Human-readable message from the backend
    #[serde(default)]
    pub message: String,

    /// The payload; absent on errors and on operations without a result
    pub data: Option<T>,

    /// Server-side timestamp of the response
    pub timestamp: Option<String>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Parse an envelope from raw JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
