//! # Server Setup
//!
//! Static hosting for the single-page app. Every path that is not a file in
//! the dist directory gets `index.html`, so client-side routes survive a reload.

// region: --- Imports
use axum::Router;
use lib_utils::envs::{get_env_or, get_env_parse_or};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
// endregion: --- Imports

// region: --- Server Configuration
/// Server configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080")
    pub bind_address: SocketAddr,
    /// Directory holding the trunk build output
    pub dist_dir: PathBuf,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            dist_dir: PathBuf::from("wallet-web/dist"),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `PAGE_BIND_ADDRESS`, `PAGE_DIST_DIR` and `LOG_LEVEL`.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            bind_address: get_env_parse_or("PAGE_BIND_ADDRESS", defaults.bind_address)?,
            dist_dir: PathBuf::from(get_env_or(
                "PAGE_DIST_DIR",
                &defaults.dist_dir.to_string_lossy(),
            )?),
            log_level: get_env_or("LOG_LEVEL", &defaults.log_level)?.to_lowercase(),
        })
    }
}
// endregion: --- Server Configuration

// region: --- Router
/// Files from `dist_dir`, `index.html` for everything else.
pub fn app(dist_dir: &Path) -> Router {
    let index = dist_dir.join("index.html");
    let files = ServeDir::new(dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}
// endregion: --- Router

// region: --- Server Setup
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Initialize and start the HTTP server
///
/// # Errors
///
/// Fails if the bind address is taken or the server stops with an I/O error.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config.log_level);

    info!("Tea transfer page server starting");
    info!("Log level: {}", config.log_level);

    if !config.dist_dir.join("index.html").is_file() {
        warn!(
            "No index.html in {}, build the page with trunk first",
            config.dist_dir.display()
        );
    }

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Serving {} at http://{}", config.dist_dir.display(), config.bind_address);

    axum::serve(listener, app(&config.dist_dir)).await?;
    Ok(())
}
// endregion: --- Server Setup

// endregion: --- Tests
