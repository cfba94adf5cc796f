//! Tracing setup for the client binary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber.
///
/// Events go to stderr, filtered by `RUST_LOG` (default `info`). With
/// `log_to_file` they are also written to `<cache>/logs/<session>/client.log`;
/// the returned guard must be held until exit so the file is flushed.
pub fn setup_logging(session_id: Option<&str>, log_to_file: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard, log_path) = if log_to_file {
        let session_id = session_id.map_or_else(default_session_id, str::to_owned);
        let session_log_dir = log_dir().join(&session_id);
        std::fs::create_dir_all(&session_log_dir).with_context(|| {
            format!("Failed to create log directory {}", session_log_dir.display())
        })?;

        let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);

        (
            Some(layer),
            Some(guard),
            Some(session_log_dir.join("client.log")),
        )
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if let Some(path) = log_path {
        tracing::info!("Log file: {}", path.display());
    }

    Ok(guard)
}

/// Platform cache directory for client logs.
///
/// - macOS: `~/Library/Caches/bridgeworld/logs`
/// - Linux: `~/.cache/bridgeworld/logs` (or `$XDG_CACHE_HOME/bridgeworld/logs`)
/// - Windows: `%LOCALAPPDATA%\bridgeworld\cache\logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "bridgeworld")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("bridgeworld"))
        .join("logs")
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}
