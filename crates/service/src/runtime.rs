//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate can prepare the
//! filesystem from the storage config it already holds.

use configs::{AppConfig, FallbackMode};

/// Warn when static assets are missing. The data directory is only created
/// when the file backend is the one that will be selected.
pub async fn ensure_env(cfg: &AppConfig) -> anyhow::Result<()> {
    let data_file = uses_data_file(cfg).then_some(cfg.storage.data_file.as_path());
    common::env::ensure_env(&cfg.server.static_dir, data_file).await
}

fn uses_data_file(cfg: &AppConfig) -> bool {
    !cfg.database.is_configured() && cfg.storage.fallback == FallbackMode::File
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn config_in(root: &std::path::Path) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.server.static_dir = root.join("public");
        cfg.storage.data_file = root.join("data").join("data.json");
        cfg
    }

    #[tokio::test]
    async fn data_dir_only_for_file_backend() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("runtime_env_{}", Uuid::new_v4()));

        let mut cfg = config_in(&root);
        cfg.database.url = "postgres://localhost/app".into();
        ensure_env(&cfg).await?;
        assert!(tokio::fs::metadata(root.join("data")).await.is_err());

        let mut cfg = config_in(&root);
        cfg.storage.fallback = FallbackMode::ReadOnly;
        ensure_env(&cfg).await?;
        assert!(tokio::fs::metadata(root.join("data")).await.is_err());

        ensure_env(&config_in(&root)).await?;
        assert!(tokio::fs::metadata(root.join("data")).await?.is_dir());

        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }
}
