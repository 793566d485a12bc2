use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Bind by name so `localhost` and bare IPv6 hosts such as `::` both work.
pub async fn bind_listener(cfg: &AppConfig) -> anyhow::Result<TcpListener> {
    let host = cfg.server.host.as_str();
    let listener = TcpListener::bind((host, cfg.server.port))
        .await
        .map_err(|e| anyhow::anyhow!("cannot bind {host}:{}: {e}", cfg.server.port))?;
    Ok(listener)
}

/// Wire the storage backend into the router. Backend problems are logged and
/// degrade the service; they never abort startup.
pub async fn build_app(cfg: &AppConfig) -> Router {
    if let Err(e) = service::runtime::ensure_env(cfg).await {
        warn!(event = "env_check_failed", error = %e, "runtime directory check failed");
    }
    let store = service::select_store(cfg).await;
    info!(event = "storage_ready", backend = %store.backend(), "storage backend selected");
    routes::build_router(AppState::new(store), build_cors(), &cfg.server.static_dir)
}

/// Public entry: build the app and run the HTTP server until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await;

    let listener = bind_listener(&cfg).await?;
    info!(addr = %listener.local_addr()?, "server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
