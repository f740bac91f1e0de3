use crate::storage::{KeyValueStore, StorageError, StorageResult, validate_key};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Stores each key as its own file under a directory.
///
/// Writes go through a temp file that is synced and then renamed over the
/// target, so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[track_caller]
    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored value for '{key}' at {path:?}");
                Ok(None)
            }
            Err(e) => Err(StorageError::file_read(path, e)),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::dir_creation(self.dir.clone(), e))?;

        // Unique per write: concurrent writers to one key must not share a temp file.
        let temp_path = self.dir.join(format!("{key}.tmp.{}", Uuid::new_v4()));

        // Write to temp file with explicit sync
        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::atomic_rename(temp_path, final_path, e));
        }

        info!("Stored '{key}' at {final_path:?}");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                info!("Removed '{key}' from {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_remove(path, e)),
        }
    }
}
