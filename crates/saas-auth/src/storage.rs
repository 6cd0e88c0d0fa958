//! Token storage for persisting credentials between process runs.
//!
//! [`FileTokenStorage`] keeps one JSON file per key. Writers take an
//! exclusive advisory lock on a sidecar `.lock` file and replace the token
//! file atomically, so concurrent refreshes from separate processes never
//! interleave and readers never see a half-written file.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fs2::FileExt;
use tracing::debug;

use crate::credentials::{optional_env, CachedCredentials};
use crate::error::{Error, ErrorKind, Result};
use crate::manager::TOKEN_DIR_ENV;

/// Trait for token storage implementations.
pub trait TokenStorage: Send + Sync {
    /// Replace the stored credentials for `key`.
    fn save(&self, key: &str, credentials: &CachedCredentials) -> Result<()>;

    /// Load the stored credentials for `key`, if any.
    fn load(&self, key: &str) -> Result<Option<CachedCredentials>>;

    /// Delete the stored credentials for `key`.
    fn delete(&self, key: &str) -> Result<()>;

    /// Check whether credentials are stored for `key`.
    fn exists(&self, key: &str) -> Result<bool>;

    /// List all stored keys.
    fn list(&self) -> Result<Vec<String>>;
}

/// File-based token storage.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    base_path: PathBuf,
}

impl FileTokenStorage {
    /// Create a new file token storage with the default path.
    ///
    /// Default path: `~/.busbar/tokens/`
    pub fn new() -> Result<Self> {
        let base_path = default_token_dir()?;
        Ok(Self { base_path })
    }

    /// Storage rooted at `BUSBAR_TOKEN_DIR`, or at the default path when
    /// that is unset.
    pub fn from_env() -> Result<Self> {
        match optional_env(TOKEN_DIR_ENV) {
            Some(dir) => Ok(Self::with_path(dir)),
            None => Self::new(),
        }
    }

    /// Create a new file token storage with a custom path.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            base_path: path.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the token files.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the token file path for a key.
    pub fn token_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", sanitize_key(key)))
    }

    fn lock_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.lock", sanitize_key(key)))
    }

    /// Ensure the base directory exists.
    fn ensure_dir(&self) -> Result<()> {
        if !self.base_path.exists() {
            std::fs::create_dir_all(&self.base_path)?;
        }
        Ok(())
    }

    /// Take the writer lock for `key`. Released when the guard drops.
    fn lock(&self, key: &str) -> Result<LockGuard> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path(key))?;

        FileExt::lock_exclusive(&file).map_err(|e| {
            Error::with_source(
                ErrorKind::Storage(format!("could not lock token cache '{key}'")),
                e,
            )
        })?;

        Ok(LockGuard { file })
    }
}

impl TokenStorage for FileTokenStorage {
    fn save(&self, key: &str, credentials: &CachedCredentials) -> Result<()> {
        self.ensure_dir()?;
        let _guard = self.lock(key)?;

        let path = self.token_path(key);
        let json = serde_json::to_string_pretty(credentials)?;

        // Stage next to the target so the final rename stays on one filesystem
        let mut staged = tempfile::NamedTempFile::new_in(&self.base_path)?;
        staged.write_all(json.as_bytes())?;
        staged.as_file().sync_all()?;

        // Set restrictive permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(staged.path(), perms)?;
        }

        staged.persist(&path)?;
        debug!(key, path = %path.display(), "token cache written");

        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<CachedCredentials>> {
        let path = self.token_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&path)?;
        let credentials: CachedCredentials = serde_json::from_str(&json)?;

        Ok(Some(credentials))
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.token_path(key);

        if path.exists() {
            let _guard = self.lock(key)?;
            std::fs::remove_file(&path)?;
        }

        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.token_path(key).exists())
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().map(|e| e == "json").unwrap_or(false) {
                if let Some(stem) = path.file_stem() {
                    keys.push(stem.to_string_lossy().to_string());
                }
            }
        }

        keys.sort();
        Ok(keys)
    }
}

/// Holds the advisory lock on a sidecar lock file.
struct LockGuard {
    file: File,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// In-memory token storage, for tests and embedding callers that keep
/// credentials elsewhere.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    tokens: Mutex<HashMap<String, CachedCredentials>>,
}

impl MemoryTokenStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn tokens(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, CachedCredentials>>> {
        self.tokens
            .lock()
            .map_err(|_| Error::new(ErrorKind::Storage("token store poisoned".to_string())))
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn save(&self, key: &str, credentials: &CachedCredentials) -> Result<()> {
        self.tokens()?.insert(key.to_string(), credentials.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<CachedCredentials>> {
        Ok(self.tokens()?.get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.tokens()?.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.tokens()?.contains_key(key))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.tokens()?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

/// Map a key onto a safe file stem.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Get the default token storage directory.
pub fn default_token_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        Error::new(ErrorKind::Config(
            "Could not find home directory".to_string(),
        ))
    })?;

    Ok(home.join(".busbar").join("tokens"))
}
