use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{Session, User};

/// Client-persisted session blob. Authorized operations read the bearer token
/// back from disk on every call, so a login in one process is visible to the
/// next without restarting the store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.session_path)
    }

    pub fn load(&self) -> ClientResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| ClientError::Session(e.to_string()))?;
        let session = serde_json::from_str(&raw)
            .map_err(|e| ClientError::Session(format!("corrupt session file: {}", e)))?;

        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ClientError::Session(e.to_string()))?;
            }
        }

        let raw = serde_json::to_string(session)
            .map_err(|e| ClientError::Session(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| ClientError::Session(e.to_string()))?;

        Ok(())
    }

    pub fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| ClientError::Session(e.to_string()))?;
        }
        Ok(())
    }

    /// Bearer token for authorized calls. Absent session means the caller is
    /// not authenticated.
    pub fn bearer_token(&self) -> ClientResult<String> {
        self.load()?
            .map(|s| s.token)
            .ok_or(ClientError::Unauthorized)
    }

    pub fn current_user(&self) -> ClientResult<Option<User>> {
        Ok(self.load()?.map(|s| s.user))
    }
}
