use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Backend not configured, or it cannot be reached right now.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        Self::StorageUnavailable(e.to_string())
    }
}

/// Failing to get a connection means the database is unreachable, not that
/// the statement was wrong.
impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                Self::StorageUnavailable(format!("database unreachable: {e}"))
            }
            other => Self::Db(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl ServiceError {
    pub fn unavailable(reason: impl Into<String>) -> Self { Self::StorageUnavailable(reason.into()) }

    pub fn is_unavailable(&self) -> bool { matches!(self, Self::StorageUnavailable(_)) }
}
