use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde_json::Value;
use tokio::{fs, sync::Mutex};
use tracing::{debug, info};

use super::{BackendKind, DocumentStore};
use crate::errors::ServiceError;

/// File-backed document store.
///
/// Keeps the whole document pretty-printed in one JSON file. Every read
/// parses the file; every write replaces it through a sibling temp file and
/// a rename, so readers never observe a half-written document.
pub struct FileDocumentStore {
    file_path: PathBuf,
    // serialises writers so they cannot interleave on the temp file
    write_lock: Mutex<()>,
}

impl FileDocumentStore {
    /// Open the store, creating the file with the default document if missing.
    /// An existing file is left untouched.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        match fs::metadata(&file_path).await {
            Ok(_) => debug!(path = %file_path.display(), "using existing data file"),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                write_replace(&file_path, &models::default_document()).await?;
                info!(path = %file_path.display(), "data file created with default document");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Self { file_path, write_lock: Mutex::new(()) })
    }

    /// File removed behind our back: recreate it like a first start. A save
    /// may win the lock first, so look again before writing the default.
    async fn reseed(&self) -> Result<Value, ServiceError> {
        let _guard = self.write_lock.lock().await;
        match fs::read(&self.file_path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let doc = models::default_document();
                write_replace(&self.file_path, &doc).await?;
                info!(path = %self.file_path.display(), "data file missing, re-seeded default document");
                Ok(doc)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn load(&self) -> Result<Value, ServiceError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => self.reseed().await,
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, doc: Value) -> Result<(), ServiceError> {
        let _guard = self.write_lock.lock().await;
        write_replace(&self.file_path, &doc).await
    }

    fn backend(&self) -> BackendKind {
        BackendKind::File
    }
}

async fn write_replace(path: &Path, doc: &Value) -> Result<(), ServiceError> {
    let data = serde_json::to_vec_pretty(doc)?;
    let tmp = temp_path(path);
    fs::write(&tmp, data).await?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "data.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
