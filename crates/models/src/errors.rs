use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Pool could not be created from the configured options (bad URL etc).
    #[error("connection error: {0}")]
    Connect(String),
}
