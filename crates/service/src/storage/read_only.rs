use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use super::{BackendKind, DocumentStore};
use crate::errors::ServiceError;

/// Degraded backend: reads fall back to the default document, writes fail.
#[derive(Debug, Clone)]
pub struct ReadOnlyStore {
    reason: String,
}

impl ReadOnlyStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait]
impl DocumentStore for ReadOnlyStore {
    async fn load(&self) -> Result<Value, ServiceError> {
        Ok(models::default_document())
    }

    async fn save(&self, _doc: Value) -> Result<(), ServiceError> {
        warn!(event = "save_rejected", reason = %self.reason, "write attempted without a storage backend");
        Err(ServiceError::unavailable(self.reason.clone()))
    }

    fn backend(&self) -> BackendKind {
        BackendKind::ReadOnly
    }
}
