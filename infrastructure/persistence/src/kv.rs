use std::path::PathBuf;

use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.read_error")]
    ReadError,
    #[error("storage.write_error")]
    WriteError,
}

/// Configuration for the file-backed key-value store
pub struct StorageConfig {
    pub root: PathBuf,
}

impl StorageConfig {
    /// Creates a configuration rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Durable key-value store keeping one file per key.
///
/// Values are opaque strings; callers own the encoding. A missing key reads
/// as `None`, everything else is an adapter error.
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: config.root.clone(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Reads the value stored under `key`, `None` when nothing was stored yet.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::error!("Failed to read key '{}': {}", key, e);
                Err(StorageError::ReadError)
            }
        }
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|_| StorageError::WriteError)?;

        fs::write(self.path_for(key), value).await.map_err(|e| {
            tracing::error!("Failed to write key '{}': {}", key, e);
            StorageError::WriteError
        })
    }
}
