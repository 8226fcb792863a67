//! Configuration options for the Comercia client

use std::path::PathBuf;
use std::time::Duration;

/// Configuration options for the Comercia client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Per-request timeout
    pub request_timeout: Option<Duration>,

    /// Where to persist the session between runs. `None` keeps the session
    /// in memory only.
    pub session_file: Option<PathBuf>,

    /// Whether a 401 response discards the held session
    pub clear_session_on_unauthorized: bool,

    /// Value sent as the `X-Client-Info` header
    pub client_info: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
            session_file: None,
            clear_session_on_unauthorized: true,
            client_info: format!("comercia-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    /// Set the per-request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Persist the session to the given file between runs
    pub fn with_session_file(mut self, value: impl Into<PathBuf>) -> Self {
        self.session_file = Some(value.into());
        self
    }

    /// Set whether a 401 response discards the held session
    pub fn with_clear_session_on_unauthorized(mut self, value: bool) -> Self {
        self.clear_session_on_unauthorized = value;
        self
    }

    /// Set the value sent as the `X-Client-Info` header
    pub fn with_client_info(mut self, value: &str) -> Self {
        self.client_info = value.to_string();
        self
    }
}
