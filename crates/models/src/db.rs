use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::debug;

use crate::errors::ModelError;

/// Create the connection pool once at startup; it lives for the whole process.
/// The pool is lazy: connections are opened on first use, so a database that
/// comes up after the service is picked up without a restart.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging)
        .connect_lazy(true);

    debug!(
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "connecting database pool"
    );
    Database::connect(opts)
        .await
        .map_err(|e| ModelError::Connect(e.to_string()))
}
