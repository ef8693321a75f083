//! Session and navigation collaborators.
//!
//! The dashboard never reads the token or navigates through globals. It holds a
//! `SessionStore` and a `Navigator` that callers inject.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::errors::DashboardError;

/// Route the login screen is served from.
pub const LOGIN_ROUTE: &str = "/login";

/// Storage for the bearer token.
pub trait SessionStore: Send + Sync {
    /// The current token, if any.
    fn token(&self) -> Option<String>;

    /// Store a new token.
    fn set_token(&self, token: &str) -> Result<(), DashboardError>;

    /// Forget the current token.
    fn clear(&self);
}

/// Receiver of "go to login" requests.
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// Build the `Authorization` header value.
///
/// A missing token still yields a header, with an empty credential.
pub fn bearer_header(session: &dyn SessionStore) -> String {
    format!("Bearer {}", session.token().unwrap_or_default())
}

/// Token held in process memory.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RwLock<Option<String>>,
}

impl MemorySession {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }

    // A writer that panicked cannot leave a half-written Option, so the value
    // behind a poisoned lock is still usable.
    fn recover<G>(err: std::sync::PoisonError<G>) -> G {
        tracing::warn!("Session lock poisoned, recovering stored token");
        err.into_inner()
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(MemorySession::recover)
            .clone()
    }

    fn set_token(&self, token: &str) -> Result<(), DashboardError> {
        let mut slot = self.token.write().unwrap_or_else(MemorySession::recover);
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        let mut slot = self.token.write().unwrap_or_else(MemorySession::recover);
        *slot = None;
    }
}

/// Token persisted in a file, surviving restarts.
///
/// A missing or blank file means "no token".
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSession {
    fn token(&self) -> Option<String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) -> Result<(), DashboardError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove token file {:?}: {}", self.path, e),
        }
    }
}

/// Navigator that records a pending login redirect.
///
/// The web layer takes the flag after each action and turns it into an HTTP
/// redirect.
#[derive(Debug, Default)]
pub struct RedirectSlot {
    pending: AtomicBool,
}

impl RedirectSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending redirect, if one was requested.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}

impl Navigator for RedirectSlot {
    fn redirect_to_login(&self) {
        tracing::info!("Redirecting to {}", LOGIN_ROUTE);
        self.pending.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_bearer_header_with_token() {
        let session = MemorySession::new(Some("abc".to_string()));
        assert_eq!(bearer_header(&session), "Bearer abc");
    }

    #[test]
    fn test_bearer_header_without_token_is_empty_credential() {
        let session = MemorySession::default();
        assert_eq!(bearer_header(&session), "Bearer ");
    }

    #[test]
    fn test_memory_session_set_and_clear() {
        let session = MemorySession::default();
        assert!(session.token().is_none());

        session.set_token("t-1").unwrap();
        assert_eq!(session.token().as_deref(), Some("t-1"));

        session.clear();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_memory_session_survives_poisoned_lock() {
        let session = Arc::new(MemorySession::new(Some("kept".to_string())));

        let writer = session.clone();
        let result = std::thread::spawn(move || {
            let _guard = writer.token.write().unwrap();
            panic!("writer failed while holding the lock");
        })
        .join();
        assert!(result.is_err());
        assert!(session.token.is_poisoned());

        assert_eq!(session.token().as_deref(), Some("kept"));

        session.set_token("next").unwrap();
        assert_eq!(session.token().as_deref(), Some("next"));

        session.clear();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_file_session_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let session = FileSession::new(temp_dir.path().join("nested").join("token"));

        assert!(session.token().is_none());

        session.set_token("file-token").unwrap();
        assert_eq!(session.token().as_deref(), Some("file-token"));

        // A second handle on the same file sees the stored token
        let reopened = FileSession::new(session.path().to_path_buf());
        assert_eq!(reopened.token().as_deref(), Some("file-token"));

        session.clear();
        assert!(reopened.token().is_none());

        // Clearing twice is harmless
        session.clear();
    }

    #[test]
    fn test_redirect_slot_is_taken_once() {
        let slot = RedirectSlot::new();
        assert!(!slot.take());

        slot.redirect_to_login();
        assert!(slot.take());
        assert!(!slot.take());
    }
}
