//! Authentication and session management for the Comercia API

mod session;
mod store;
mod types;

use reqwest::Client;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

pub use session::Session;
pub(crate) use session::SessionHandle;
pub use store::SessionStore;
pub use types::*;

/// Client for authentication and user registration
pub struct Auth {
    /// The base URL of the backend, including the `/api` prefix
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// The shared session slot
    session: SessionHandle,

    /// Client options
    options: ClientOptions,
}

impl Auth {
    /// Create a new Auth client
    pub(crate) fn new(
        url: &str,
        client: Client,
        session: SessionHandle,
        options: ClientOptions,
    ) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
            options,
        }
    }

    fn get_auth_url(&self, path: &str) -> String {
        format!("{}/auth{}", self.url, path)
    }

    /// Log in with email and password. On success the returned session is
    /// held for subsequent requests and persisted when a session file is
    /// configured.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, Error> {
        let url = self.get_auth_url("/login");

        let response = Fetch::post(&self.client, &url)
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout)
            .json(credentials)?
            .execute_api::<AuthResponse>()
            .await?;

        self.session.set(Session::from_auth_response(&response));

        Ok(response)
    }

    /// Register a new user. The backend assigns the password and defaults an
    /// omitted role to EXTERNO; the account data is sent as provided.
    pub async fn register(&self, user: &User) -> Result<User, Error> {
        let url = self.get_auth_url("/register");

        Fetch::post(&self.client, &url)
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout)
            .json(user)?
            .execute_api::<User>()
            .await
    }

    /// Drop the current session, in memory and on disk. The backend exposes
    /// no logout endpoint; a token left behind simply expires server-side.
    pub fn logout(&self) -> Result<(), Error> {
        self.session.clear()
    }

    /// Get the current session
    pub fn current_session(&self) -> Option<Session> {
        self.session.get()
    }

    /// Replace the current session, e.g. with a token obtained elsewhere
    pub fn set_session(&self, session: Session) {
        self.session.set(session);
    }

    /// Rehydrate the session from the configured session file. Returns the
    /// restored session, with its expiry hint recomputed from the token's
    /// `exp` claim when the stored copy lacks one.
    pub fn restore_session(&self) -> Option<Session> {
        self.session.restore()
    }
}
