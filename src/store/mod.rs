use crate::config::StoreConfig;
use crate::error::{ AuthError, StoreError };
use crate::models::account::{ Account, Users };
use log::{ debug, info, warn };
use std::path::{ Path, PathBuf };
use tokio::sync::Mutex;

/// Whole-document JSON store for accounts and their conversations.
///
/// Every mutation is a full load, change and save of the file. Writers inside
/// one process are serialized through `update`; separate processes sharing the
/// same file are not coordinated.
pub struct UserStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl UserStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.path.clone(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document. `Ok(None)` means the file does not exist yet.
    pub async fn read(&self) -> Result<Option<Users>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(None);
            }
            Err(e) => {
                return Err(StoreError::Io(e));
            }
        };
        let users = serde_json::from_str(&raw).map_err(StoreError::Corrupt)?;
        Ok(Some(users))
    }

    /// Like `read`, but any failure falls back to an empty mapping.
    pub async fn load(&self) -> Users {
        match self.read().await {
            Ok(Some(users)) => users,
            Ok(None) => {
                debug!("User file {} not found, starting empty", self.path.display());
                Users::new()
            }
            Err(e) => {
                warn!("Ignoring unreadable user file {}: {}", self.path.display(), e);
                Users::new()
            }
        }
    }

    pub async fn save(&self, users: &Users) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(users).map_err(StoreError::Serialize)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Runs `f` against a freshly loaded document and saves the result if `f`
    /// succeeds. Nothing is written when `f` returns an error.
    pub async fn update<T, E, F>(&self, f: F) -> Result<T, E>
        where F: FnOnce(&mut Users) -> Result<T, E>, E: From<StoreError>
    {
        let _guard = self.write_lock.lock().await;
        let mut users = self.load().await;
        let out = f(&mut users)?;
        self.save(&users).await?;
        Ok(out)
    }

    pub async fn account(&self, username: &str) -> Option<Account> {
        self.load().await.remove(username)
    }

    pub async fn contains_user(&self, username: &str) -> bool {
        self.load().await.contains_key(username)
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput);
        }

        self.update(|users| {
            if users.contains_key(username) {
                return Err(AuthError::AlreadyExists);
            }
            users.insert(username.to_string(), Account::new(password));
            Ok(())
        }).await?;

        info!("Registered user '{}'", username);
        Ok(())
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let username = username.trim();
        let password = password.trim();
        match self.load().await.get(username) {
            Some(account) if account.password == password => Ok(()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn temp_store() -> (tempfile::TempDir, UserStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(&StoreConfig { path: dir.path().join("users.json") });
        (dir, store)
    }

    #[tokio::test]
    async fn register_then_login() {
        let (_dir, store) = temp_store();
        store.register("alice", "secret").await.unwrap();

        assert!(store.authenticate("alice", "secret").await.is_ok());
        assert!(matches!(
            store.register("alice", "other").await,
            Err(AuthError::AlreadyExists)
        ));
    }

    #[tokio::test]
    async fn register_trims_and_rejects_blank_fields() {
        let (_dir, store) = temp_store();

        assert!(matches!(store.register("  ", "pw").await, Err(AuthError::InvalidInput)));
        assert!(matches!(store.register("bob", " \t").await, Err(AuthError::InvalidInput)));

        store.register("  bob ", " pw ").await.unwrap();
        assert!(store.authenticate("bob", "pw").await.is_ok());
        assert!(store.contains_user("bob").await);
    }

    #[tokio::test]
    async fn bad_credentials_are_rejected() {
        let (_dir, store) = temp_store();
        store.register("alice", "secret").await.unwrap();

        assert!(matches!(
            store.authenticate("alice", "wrong").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            store.authenticate("nobody", "secret").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let (_dir, store) = temp_store();

        assert!(store.read().await.unwrap().is_none());
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty_but_read_reports_it() {
        let (_dir, store) = temp_store();
        tokio::fs::write(store.path(), "{ not json").await.unwrap();

        assert!(matches!(store.read().await, Err(StoreError::Corrupt(_))));
        assert!(store.load().await.is_empty());

        // Registration recovers by overwriting the corrupt document.
        store.register("alice", "pw").await.unwrap();
        assert!(store.read().await.unwrap().unwrap().contains_key("alice"));
    }

    #[tokio::test]
    async fn save_writes_indented_utf8() {
        let (_dir, store) = temp_store();
        store.register("小明", "密码").await.unwrap();

        let raw = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert!(raw.contains("\"小明\""));
        assert!(raw.contains("\"密码\""));
        assert!(raw.contains("\n  \"小明\": {"));
    }

    #[tokio::test]
    async fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(&StoreConfig { path: dir.path().join("data/nested/users.json") });
        store.register("alice", "pw").await.unwrap();

        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn failed_update_writes_nothing() {
        let (_dir, store) = temp_store();
        let result: Result<(), AuthError> = store
            .update(|users| {
                users.insert("ghost".into(), Account::new("pw"));
                Err(AuthError::InvalidInput)
            }).await;

        assert!(result.is_err());
        assert!(store.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_registrations_are_not_lost() {
        let (_dir, store) = temp_store();
        let store = Arc::new(store);

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.register(&format!("user{}", i), "pw").await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.load().await.len(), 16);
    }
}
