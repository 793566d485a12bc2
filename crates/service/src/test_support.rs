#![cfg(test)]
use sea_orm::DatabaseConnection;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// The document row is shared; database tests hold this while they run.
pub static DB_LOCK: Mutex<()> = Mutex::const_new(());

pub fn database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok().filter(|u| !u.trim().is_empty())
}

/// Fresh connection for the current test's runtime, or `None` when no
/// `DATABASE_URL` is available (database tests then skip themselves).
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    let Some(url) = database_url() else { return Ok(None) };
    let mut cfg = configs::DatabaseConfig::default();
    cfg.url = url;
    cfg.min_connections = 1;
    cfg.acquire_timeout_secs = 10;
    let db = models::db::connect_with_config(&cfg).await?;
    Ok(Some(db))
}

/// A local port nothing listens on (yet).
pub async fn free_local_port() -> Result<u16, anyhow::Error> {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
    Ok(listener.local_addr()?.port())
}

/// Point `url` at `127.0.0.1:local_port`. Returns the original `host:port`
/// and the rewritten URL, or `None` for URLs this helper cannot handle.
pub fn retarget(url: &str, local_port: u16) -> Option<(String, String)> {
    let scheme_end = url.find("://")? + 3;
    let rest = &url[scheme_end..];
    let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    let host_start = authority.rfind('@').map(|i| i + 1).unwrap_or(0);
    let host_port = &authority[host_start..];
    if host_port.is_empty() || host_port.contains(',') {
        return None;
    }
    let has_port = host_port
        .rsplit_once(':')
        .is_some_and(|(_, p)| p.parse::<u16>().is_ok());
    let target = if has_port { host_port.to_string() } else { format!("{host_port}:5432") };
    let rewritten = format!(
        "{}{}127.0.0.1:{}{}",
        &url[..scheme_end],
        &authority[..host_start],
        local_port,
        &rest[authority_end..]
    );
    Some((target, rewritten))
}

/// Start forwarding `127.0.0.1:port` to `target`, i.e. "the database comes up".
pub async fn spawn_relay(port: u16, target: String) -> Result<JoinHandle<()>, anyhow::Error> {
    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    Ok(tokio::spawn(async move {
        while let Ok((mut inbound, _)) = listener.accept().await {
            let target = target.clone();
            tokio::spawn(async move {
                if let Ok(mut outbound) = TcpStream::connect(target).await {
                    let _ = tokio::io::copy_bidirectional(&mut inbound, &mut outbound).await;
                }
            });
        }
    }))
}

#[test]
fn retarget_rewrites_authority_only() {
    let (target, url) = retarget("postgres://u:p@db.internal:6543/app?sslmode=disable", 7000).unwrap();
    assert_eq!(target, "db.internal:6543");
    assert_eq!(url, "postgres://u:p@127.0.0.1:7000/app?sslmode=disable");

    let (target, url) = retarget("postgresql://localhost/app", 7001).unwrap();
    assert_eq!(target, "localhost:5432");
    assert_eq!(url, "postgresql://127.0.0.1:7001/app");
}
