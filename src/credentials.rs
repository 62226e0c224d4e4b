// ABOUTME: Session token storage passed explicitly into the API client
// ABOUTME: File-backed JSON store for the CLI and an in-memory store for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroTracker Contributors

//! Credential storage
//!
//! The API client never reads global state for its bearer token. It is handed
//! a [`CredentialStore`] at construction time and asks it for the current
//! session before every authenticated call.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::User;

/// A persisted login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Bearer token
    pub token: String,
    /// Id of the user the token belongs to
    pub user_id: String,
    /// Username, for display
    pub username: String,
    /// When the token was stored
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    /// Session for a freshly authenticated user
    #[must_use]
    pub fn new(token: String, user: &User) -> Self {
        Self {
            token,
            user_id: user.id.clone(),
            username: user.username.clone(),
            saved_at: Utc::now(),
        }
    }
}

/// Storage for the current session
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Current session, `None` when logged out
    async fn load(&self) -> AppResult<Option<StoredSession>>;

    /// Replace the stored session
    async fn save(&self, session: &StoredSession) -> AppResult<()>;

    /// Forget the stored session
    async fn clear(&self) -> AppResult<()>;
}

/// Session kept in memory only
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    session: RwLock<Option<StoredSession>>,
}

impl MemoryCredentialStore {
    /// Store pre-loaded with a token
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            session: RwLock::new(Some(StoredSession {
                token: token.into(),
                user_id: String::new(),
                username: String::new(),
                saved_at: Utc::now(),
            })),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> AppResult<Option<StoredSession>> {
        Ok(self.session.read().await.clone())
    }

    async fn save(&self, session: &StoredSession) -> AppResult<()> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.session.write().await = None;
        Ok(())
    }
}

/// Session persisted as a JSON file readable only by the current user
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store backed by `path`; the file is created on first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the credential file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> AppResult<Option<StoredSession>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            AppError::storage(format!(
                "Credential file {} is corrupt, log in again: {e}",
                self.path.display()
            ))
        })
    }

    async fn save(&self, session: &StoredSession) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AppError::storage(format!("Failed to encode session: {e}")))?;
        tokio::fs::write(&self.path, json).await?;
        restrict_permissions(&self.path).await?;
        debug!(path = %self.path.display(), "Session stored");
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> AppResult<()> {
    use std::os::unix::fs::PermissionsExt;
    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> AppResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn user() -> User {
        User {
            id: "u1".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            selected_goal_id: None,
        }
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryCredentialStore::default();
        assert!(store.load().await.unwrap().is_none());

        store
            .save(&StoredSession::new("tok".into(), &user()))
            .await
            .unwrap();
        assert_eq!(store.load().await.unwrap().unwrap().token, "tok");

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_persists_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("credentials.json");
        let store = FileCredentialStore::new(&path);

        assert!(store.load().await.unwrap().is_none());
        store
            .save(&StoredSession::new("secret".into(), &user()))
            .await
            .unwrap();

        let reopened = FileCredentialStore::new(&path);
        let session = reopened.load().await.unwrap().unwrap();
        assert_eq!(session.token, "secret");
        assert_eq!(session.username, "ada");

        reopened.clear().await.unwrap();
        reopened.clear().await.unwrap();
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_store_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let store = FileCredentialStore::new(&path);
        store
            .save(&StoredSession::new("secret".into(), &user()))
            .await
            .unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, "{not json").unwrap();

        let error = FileCredentialStore::new(&path).load().await.unwrap_err();
        assert_eq!(error.code, ErrorCode::StorageError);
    }
}
