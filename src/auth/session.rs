//! Session state shared between the auth and service clients

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::store::SessionStore;
use super::types::AuthResponse;

/// Session data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The bearer token attached to authenticated requests
    pub access_token: String,

    /// The token scheme, always "Bearer"
    pub token_type: String,

    /// The role reported at login
    pub role: String,

    /// The email reported at login
    pub email: String,

    /// Expiry hint in unix seconds. Informational only; the backend remains
    /// the authority on token validity.
    pub expires_at: Option<i64>,
}

impl Session {
    /// Create a new session
    pub fn new(access_token: &str, role: &str, email: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            token_type: "Bearer".to_string(),
            role: role.to_string(),
            email: email.to_string(),
            expires_at: None,
        }
    }

    /// Build a session from a login response. The backend reports the token
    /// lifetime in milliseconds.
    pub fn from_auth_response(response: &AuthResponse) -> Self {
        let now = unix_now();
        Self {
            access_token: response.token.clone(),
            token_type: response.token_type.clone(),
            role: response.role.clone(),
            email: response.email.clone(),
            expires_at: Some(now + response.expires_in / 1000),
        }
    }

    /// Fill the expiry hint from the token's `exp` claim when it is missing
    pub fn with_expiry_hint(mut self) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = token_expiry_hint(&self.access_token);
        }
        self
    }

    /// Check whether the local expiry hint has passed
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => unix_now() >= expires_at,
            None => false,
        }
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_secs() as i64
}

#[derive(Debug, Deserialize)]
struct ExpiryClaims {
    exp: Option<i64>,
}

/// Read the `exp` claim of a JWT without verifying its signature. The token
/// was minted by the backend; the hint only drives local expiry display.
pub(crate) fn token_expiry_hint(token: &str) -> Option<i64> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<ExpiryClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()
        .and_then(|data| data.claims.exp)
}

/// Shared handle to the current session. Cloned into every service client so
/// that login, bearer attachment and 401 teardown all observe the same slot.
#[derive(Clone)]
pub(crate) struct SessionHandle {
    session: Arc<Mutex<Option<Session>>>,
    store: Option<SessionStore>,
    clear_on_unauthorized: bool,
}

impl SessionHandle {
    pub(crate) fn new(store: Option<SessionStore>, clear_on_unauthorized: bool) -> Self {
        Self {
            session: Arc::new(Mutex::new(None)),
            store,
            clear_on_unauthorized,
        }
    }

    pub(crate) fn get(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    pub(crate) fn bearer_token(&self) -> Option<String> {
        self.session
            .lock()
            .unwrap()
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    /// Replace the session, persisting it when a store is configured.
    /// Persistence failures are logged, never fatal: the in-memory session
    /// is already usable.
    pub(crate) fn set(&self, session: Session) {
        if let Some(store) = &self.store {
            if let Err(err) = store.save(&session) {
                warn!("failed to persist session: {}", err);
            }
        }
        *self.session.lock().unwrap() = Some(session);
    }

    /// Drop the in-memory session and the persisted copy
    pub(crate) fn clear(&self) -> Result<(), crate::error::Error> {
        *self.session.lock().unwrap() = None;
        if let Some(store) = &self.store {
            store.clear()?;
        }
        Ok(())
    }

    /// Reaction to a 401: discard the session so the caller has to log in
    /// again, mirroring the logout-and-redirect of the original client
    pub(crate) fn invalidate(&self) {
        if !self.clear_on_unauthorized {
            return;
        }
        *self.session.lock().unwrap() = None;
        if let Some(store) = &self.store {
            if let Err(err) = store.clear() {
                warn!("failed to clear persisted session: {}", err);
            }
        }
    }

    /// Rehydrate the session from the store, if any
    pub(crate) fn restore(&self) -> Option<Session> {
        let store = self.store.as_ref()?;
        let session = store.load()?.with_expiry_hint();
        *self.session.lock().unwrap() = Some(session.clone());
        Some(session)
    }
}
