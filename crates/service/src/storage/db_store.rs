use async_trait::async_trait;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::app_data::{self, DOCUMENT_ID};
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::{BackendKind, DocumentStore};
use crate::errors::ServiceError;

/// PostgreSQL-backed document store: one JSONB row in `app_data`.
///
/// The pool is lazy and [`bootstrap`](Self::bootstrap) only counts once it
/// succeeds, so an outage at startup or mid-run costs individual requests,
/// never the backend.
pub struct DbDocumentStore {
    db: DatabaseConnection,
    ready: OnceCell<()>,
}

impl DbDocumentStore {
    /// Build the pool without touching the network. Fails only on options the
    /// driver rejects outright, such as a malformed URL.
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self, ServiceError> {
        let db = models::db::connect_with_config(cfg).await?;
        Ok(Self::new(db))
    }

    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, ready: OnceCell::new() }
    }

    /// Create the table and the default row when absent. Safe on every start;
    /// a failed attempt is retried by the next request.
    pub async fn bootstrap(&self) -> Result<(), ServiceError> {
        self.ready
            .get_or_try_init(|| async {
                migration::Migrator::up(&self.db, None).await?;
                if self.seed_default().await? {
                    info!(event = "db_bootstrap", "database initialised with default document");
                } else {
                    info!(event = "db_bootstrap", "database connected, document row already present");
                }
                Ok::<(), ServiceError>(())
            })
            .await?;
        Ok(())
    }

    /// Insert the default row unless one exists; true when it was inserted.
    async fn seed_default(&self) -> Result<bool, ServiceError> {
        let row = app_data::ActiveModel { id: Set(DOCUMENT_ID), data: Set(models::default_document()) };
        let inserted = app_data::Entity::insert(row)
            .on_conflict(OnConflict::column(app_data::Column::Id).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await?;
        Ok(inserted > 0)
    }

    async fn find(&self) -> Result<Option<Value>, ServiceError> {
        let row = app_data::Entity::find_by_id(DOCUMENT_ID).one(&self.db).await?;
        Ok(row.map(|m| m.data))
    }

    async fn load_stored(&self) -> Result<Value, ServiceError> {
        self.bootstrap().await?;
        if let Some(doc) = self.find().await? {
            return Ok(doc);
        }
        self.seed_default().await?;
        Ok(self.find().await?.unwrap_or_else(models::default_document))
    }
}

#[async_trait]
impl DocumentStore for DbDocumentStore {
    async fn load(&self) -> Result<Value, ServiceError> {
        match self.load_stored().await {
            Err(e) if e.is_unavailable() => {
                warn!(event = "load_fallback", error = %e, "database unreachable, serving default document");
                Ok(models::default_document())
            }
            other => other,
        }
    }

    async fn save(&self, doc: Value) -> Result<(), ServiceError> {
        self.bootstrap().await?;
        // single-statement upsert: the row exists afterwards, last write wins
        let row = app_data::ActiveModel { id: Set(DOCUMENT_ID), data: Set(doc) };
        app_data::Entity::insert(row)
            .on_conflict(
                OnConflict::column(app_data::Column::Id)
                    .update_column(app_data::Column::Data)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    fn backend(&self) -> BackendKind {
        BackendKind::Relational
    }
}
