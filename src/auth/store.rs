//! File-backed persistence for the session, the counterpart of the original
//! client's local key-value storage

use log::warn;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::session::Session;
use crate::error::Error;

/// Stores the session as a small JSON document on disk
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted session. A missing or unreadable file means no
    /// session; a corrupt file is logged and treated the same way.
    pub fn load(&self) -> Option<Session> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("could not read session file {}: {}", self.path.display(), err);
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(
                    "discarding corrupt session file {}: {}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    /// Persist the session
    pub fn save(&self, session: &Session) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Delete the persisted session, if any
    pub fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        let mut session = Session::new("jwt", "ADMIN", "admin@example.com");
        session.expires_at = Some(1_900_000_000);
        store.save(&session).unwrap();

        let restored = store.load().unwrap();
        assert_eq!(restored.access_token, "jwt");
        assert_eq!(restored.email, "admin@example.com");
        assert_eq!(restored.expires_at, Some(1_900_000_000));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("absent.json"));
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupt_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SessionStore::new(&path);
        assert!(store.load().is_none());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/session.json");

        let store = SessionStore::new(&path);
        store
            .save(&Session::new("jwt", "USER", "user@example.com"))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        store
            .save(&Session::new("jwt", "USER", "user@example.com"))
            .unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
    }
}
