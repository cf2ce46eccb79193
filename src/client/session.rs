//! Explicit session context and its persistence.
//!
//! The signed-in user and bearer token are a plain value owned by the caller
//! and handed to whatever needs them; there is no process-wide current user.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::models::{AuthResponse, User};

use super::error::ClientResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    pub fn from_auth(auth: AuthResponse) -> Self {
        Self {
            user: Some(auth.user),
            token: Some(auth.token),
        }
    }

    /// Replace whatever was signed in with a fresh login or signup
    pub fn begin(&mut self, auth: AuthResponse) {
        *self = Self::from_auth(auth);
    }

    /// Keep the token, swap in the user record returned by a profile update
    pub fn update_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().and_then(|u| u.id)
    }
}

/// Where the single session record lives between runs
pub trait SessionStore {
    /// The stored session, or an empty one when nothing is stored
    fn load(&self) -> ClientResult<Session>;
    fn save(&self, session: &Session) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> ClientResult<Session> {
        let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}

/// Session persisted as a JSON file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> ClientResult<Session> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Session::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(session)?)?;
        tracing::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
