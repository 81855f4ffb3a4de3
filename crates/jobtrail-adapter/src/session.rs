/*
[INPUT]:  Tokens issued by registration
[OUTPUT]: Persisted auth session readable by the rest of the application
[POS]:    Session layer - token lifecycle and durable storage
[UPDATE]: When adding token refresh or changing storage strategy
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::warn;

use crate::http::{ApiError, Result};

const SESSION_FILE: &str = "session.json";

/// Tokens issued on successful registration.
///
/// Serialized under the fixed keys `token` / `refreshToken`; other parts
/// of the application read the session file by those names. The refresh
/// token is only written when the backend issued one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    #[serde(rename = "token")]
    pub access_token: String,
    #[serde(rename = "refreshToken", default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// In-memory session with storage metadata
#[derive(Debug, Clone)]
pub struct SessionData {
    pub session: AuthSession,
    pub stored_at: DateTime<Utc>,
}

/// Thread-safe session store backed by a JSON file.
///
/// Written once per flow (on registration success) and read by every
/// authenticated call after it; the file outlives the signup flow.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    data: Arc<RwLock<Option<SessionData>>>,
}

impl SessionStore {
    /// Create a store using the default session directory.
    ///
    /// Default: `./.jobtrail-config` relative to current working directory.
    pub fn new() -> Self {
        Self::new_in_dir(default_session_dir())
    }

    /// Create a store rooted at an explicit directory, loading any session
    /// already persisted there.
    pub fn new_in_dir(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(SESSION_FILE);
        let data = load_session(&path).map(|session| SessionData {
            session,
            stored_at: Utc::now(),
        });
        Self {
            path,
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Persist a freshly issued session, replacing any previous one.
    ///
    /// The in-memory session is updated before the file write, so calls in
    /// the same flow keep working even when the disk write fails.
    pub fn persist(&self, session: AuthSession) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            *guard = Some(SessionData {
                session: session.clone(),
                stored_at: Utc::now(),
            });
        }

        let dir = self
            .path
            .parent()
            .ok_or_else(|| ApiError::Session("session path has no parent directory".to_string()))?;
        fs::create_dir_all(dir)
            .map_err(|e| ApiError::Session(format!("create {}: {e}", dir.display())))?;

        let json = serde_json::to_string_pretty(&session)?;
        fs::write(&self.path, json)
            .map_err(|e| ApiError::Session(format!("write {}: {e}", self.path.display())))?;
        Ok(())
    }

    /// Get the current access token if a session exists
    pub fn access_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|data| data.session.access_token.clone())
    }

    /// Get the current session if available
    pub fn session(&self) -> Option<AuthSession> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|data| data.session.clone())
    }

    /// Get session data with storage metadata
    pub fn session_data(&self) -> Option<SessionData> {
        let guard = self.data.read().unwrap();
        guard.clone()
    }

    /// Drop the stored session and remove the file
    pub fn clear(&self) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        *guard = None;
        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| ApiError::Session(format!("remove {}: {e}", self.path.display())))?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn default_session_dir() -> PathBuf {
    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    base_dir.join(".jobtrail-config")
}

fn load_session(path: &Path) -> Option<AuthSession> {
    if !path.exists() {
        return None;
    }
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(session) => Some(session),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unreadable session file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("jobtrail-test-{}", Uuid::new_v4()));
        path
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = SessionStore::new_in_dir(temp_dir());
        assert!(store.access_token().is_none());
        assert!(store.session().is_none());
    }

    #[test]
    fn test_persist_and_reload() {
        let dir = temp_dir();
        let store = SessionStore::new_in_dir(&dir);
        store
            .persist(AuthSession {
                access_token: "T1".to_string(),
                refresh_token: Some("R1".to_string()),
            })
            .unwrap();

        assert_eq!(store.access_token(), Some("T1".to_string()));

        // A second store over the same directory sees the persisted session.
        let reloaded = SessionStore::new_in_dir(&dir);
        let session = reloaded.session().expect("session should reload");
        assert_eq!(session.access_token, "T1");
        assert_eq!(session.refresh_token.as_deref(), Some("R1"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_session_file_uses_fixed_keys() {
        let dir = temp_dir();
        let store = SessionStore::new_in_dir(&dir);
        store
            .persist(AuthSession {
                access_token: "T1".to_string(),
                refresh_token: None,
            })
            .unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["token"], "T1");
        // No refresh token issued means no refreshToken key at all.
        assert!(json.get("refreshToken").is_none());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = temp_dir();
        let store = SessionStore::new_in_dir(&dir);
        store
            .persist(AuthSession {
                access_token: "T1".to_string(),
                refresh_token: None,
            })
            .unwrap();

        store.clear().unwrap();
        assert!(store.access_token().is_none());
        assert!(!store.path().exists());

        fs::remove_dir_all(dir).unwrap();
    }
}
