use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSession {
    token: Option<String>,
    user: Option<Value>,
}

/// Auth token and user record persisted between runs.
#[derive(Debug)]
pub struct TokenStore {
    path: PathBuf,
    session: StoredSession,
}

impl TokenStore {
    /// Open the store at `path`. A missing file means logged out.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let session = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => StoredSession::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, session })
    }

    pub fn save(&mut self, token: &str, user: Option<Value>) -> Result<()> {
        self.session = StoredSession {
            token: Some(token.to_string()),
            user,
        };
        fs::write(&self.path, serde_json::to_string_pretty(&self.session)?)?;
        debug!(path = %self.path.display(), "saved auth token");
        Ok(())
    }

    /// Forget the token and user, removing the file.
    pub fn clear(&mut self) -> Result<()> {
        self.session = StoredSession::default();
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        debug!(path = %self.path.display(), "cleared auth token");
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn current_user(&self) -> Option<&Value> {
        self.session.user.as_ref()
    }

    /// The stored user's `id`, whether it was sent as a string or a number.
    pub fn user_id(&self) -> Option<String> {
        match self.current_user()?.get("id")? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}
