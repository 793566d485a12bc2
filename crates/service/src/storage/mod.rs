//! Storage abstractions for the schedule document
//!
//! One JSON document, three interchangeable backends behind `DocumentStore`.
//! The backend is picked once by [`select_store`]; handlers only ever see the
//! trait object.

pub mod db_store;
pub mod file_store;
pub mod read_only;

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use configs::{AppConfig, FallbackMode};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::errors::ServiceError;

pub use db_store::DbDocumentStore;
pub use file_store::FileDocumentStore;
pub use read_only::ReadOnlyStore;

/// Read/replace contract for the single shared document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Current document; the default when nothing has been stored yet.
    async fn load(&self) -> Result<Value, ServiceError>;
    /// Replace the stored document in full.
    async fn save(&self, doc: Value) -> Result<(), ServiceError>;
    fn backend(&self) -> BackendKind;
}

pub type SharedStore = Arc<dyn DocumentStore>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Relational,
    File,
    ReadOnly,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relational => "relational",
            Self::File => "file",
            Self::ReadOnly => "read_only",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the store for this process. Never fails: a file backend that cannot
/// be initialised degrades to [`ReadOnlyStore`] so reads keep working. The
/// relational backend is kept even when the database is down at startup; it
/// bootstraps on the first request that reaches it.
pub async fn select_store(cfg: &AppConfig) -> SharedStore {
    if cfg.database.is_configured() {
        info!(event = "storage_select", backend = "relational", "DATABASE_URL detected, using PostgreSQL");
        let store = match DbDocumentStore::connect(&cfg.database).await {
            Ok(store) => store,
            Err(e) => {
                error!(event = "storage_init_failed", backend = "relational", error = %e, "database pool could not be created; serving defaults read-only");
                return Arc::new(ReadOnlyStore::new(format!("database unavailable: {e}")));
            }
        };
        if let Err(e) = store.bootstrap().await {
            warn!(event = "db_bootstrap_deferred", error = %e, "database not ready at startup; retrying on next request");
        }
        return Arc::new(store);
    }

    match cfg.storage.fallback {
        FallbackMode::File => {
            let path = &cfg.storage.data_file;
            info!(event = "storage_select", backend = "file", path = %path.display(), "no DATABASE_URL, using local file");
            match FileDocumentStore::open(path).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    error!(event = "storage_init_failed", backend = "file", error = %e, "data file initialisation failed; serving defaults read-only");
                    Arc::new(ReadOnlyStore::new(format!("data file unavailable: {e}")))
                }
            }
        }
        FallbackMode::ReadOnly => {
            warn!(event = "storage_select", backend = "read_only", "no DATABASE_URL, writes are disabled");
            Arc::new(ReadOnlyStore::new("DATABASE_URL is not configured"))
        }
    }
}
