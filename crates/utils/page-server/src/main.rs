//! # Page Server
//!
//! Serves the built wallet page (`wallet-web/dist`) over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! trunk build --release wallet-web/index.html
//! cargo run --package page-server --bin page_server
//! ```
//!
//! Settings come from the environment (a `.env` file is honoured):
//! `PAGE_BIND_ADDRESS`, `PAGE_DIST_DIR`, `LOG_LEVEL`.

mod server;

use server::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    start_server(config).await
}
