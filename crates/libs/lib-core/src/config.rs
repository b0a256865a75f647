//! # Network Configuration
//!
//! This module holds the chain the page targets and the confirmation wait policy.
//! Defaults describe Tea Sepolia; a build can override a few values through
//! compile-time environment variables because the page has no runtime environment.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! assert!(config.explorer_tx_url("0xabc").ends_with("/tx/0xabc"));
//! ```
//!
//! Call [`init_config()`] once at startup to validate and pin a configuration.
//! Without it, [`core_config()`] falls back to [`Config::from_build_env()`].
//!
//! ## Build Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `TEA_CHAIN_ID` | `chain_id` |
//! | `TEA_RPC_URL` | `rpc_url` |
//! | `TEA_EXPLORER_URL` | `explorer_url` |
//! | `TEA_CONFIRMATION_TIMEOUT_MS` | `confirmation_timeout_ms` |

use crate::error::{AppError, Result};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

pub const TEA_SEPOLIA_CHAIN_ID: u64 = 10218;
pub const TEA_SEPOLIA_RPC_URL: &str = "https://tea-sepolia.g.alchemy.com/public";
pub const TEA_SEPOLIA_EXPLORER_URL: &str = "https://sepolia.tea.xyz";

/// Decimals of the chain's native asset.
pub const NATIVE_DECIMALS: u8 = 18;

/// Chain and wait-policy configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Required chain id; any other chain is rejected at connect time
    pub chain_id: u64,

    /// Human readable chain name used in prompts
    pub chain_name: String,

    /// Ticker of the native asset
    pub native_symbol: String,

    /// Public RPC endpoint. Logged at startup, never called by the page.
    pub rpc_url: String,

    /// Block explorer base URL (no trailing slash)
    pub explorer_url: String,

    /// Amount pre-filled in the form
    pub default_amount: String,

    /// Delay between `eth_getTransactionReceipt` polls
    pub receipt_poll_interval_ms: u32,

    /// Upper bound on the confirmation wait
    pub confirmation_timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::tea_sepolia()
    }
}

impl Config {
    /// Tea Sepolia testnet.
    pub fn tea_sepolia() -> Self {
        Self {
            chain_id: TEA_SEPOLIA_CHAIN_ID,
            chain_name: "Tea Sepolia".to_string(),
            native_symbol: "TEA".to_string(),
            rpc_url: TEA_SEPOLIA_RPC_URL.to_string(),
            explorer_url: TEA_SEPOLIA_EXPLORER_URL.to_string(),
            default_amount: "0.001".to_string(),
            receipt_poll_interval_ms: 1_500,
            confirmation_timeout_ms: 120_000,
        }
    }

    /// Defaults with the compile-time overrides applied.
    pub fn from_build_env() -> Self {
        Self::tea_sepolia().with_overrides(|name| match name {
            "TEA_CHAIN_ID" => option_env!("TEA_CHAIN_ID"),
            "TEA_RPC_URL" => option_env!("TEA_RPC_URL"),
            "TEA_EXPLORER_URL" => option_env!("TEA_EXPLORER_URL"),
            "TEA_CONFIRMATION_TIMEOUT_MS" => option_env!("TEA_CONFIRMATION_TIMEOUT_MS"),
            _ => None,
        })
    }

    /// Apply overrides from `lookup`. Unparseable numbers keep the current value.
    pub fn with_overrides<'a>(mut self, lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        if let Some(chain_id) = parse_override(&lookup, "TEA_CHAIN_ID") {
            self.chain_id = chain_id;
        }
        if let Some(rpc_url) = lookup("TEA_RPC_URL") {
            self.rpc_url = rpc_url.to_string();
        }
        if let Some(explorer_url) = lookup("TEA_EXPLORER_URL") {
            self.explorer_url = explorer_url.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = parse_override(&lookup, "TEA_CONFIRMATION_TIMEOUT_MS") {
            self.confirmation_timeout_ms = timeout;
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.chain_id == 0 {
            return Err(AppError::Config("chain_id must be non-zero".to_string()));
        }

        if self.rpc_url.is_empty() || self.explorer_url.is_empty() {
            return Err(AppError::Config("rpc_url and explorer_url must be set".to_string()));
        }

        if self.receipt_poll_interval_ms == 0 {
            return Err(AppError::Config("receipt_poll_interval_ms must be non-zero".to_string()));
        }

        if self.confirmation_timeout_ms < self.receipt_poll_interval_ms {
            return Err(AppError::Config(
                "confirmation_timeout_ms must cover at least one poll interval".to_string(),
            ));
        }

        Ok(())
    }

    /// Explorer page for a transaction hash.
    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url, tx_hash)
    }

    /// Number of receipt polls that fit in the confirmation timeout.
    pub fn max_receipt_polls(&self) -> u32 {
        let interval = self.receipt_poll_interval_ms.max(1);
        self.confirmation_timeout_ms.div_ceil(interval).max(1)
    }
}

fn parse_override<'a, T: FromStr>(lookup: &impl Fn(&str) -> Option<&'a str>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a number", name, raw);
            None
        }
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Validate `config` and install it as the global configuration.
///
/// # Errors
///
/// Returns an error if validation fails or a config was already installed.
pub fn init_config(config: Config) -> Result<()> {
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration.
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(Config::from_build_env)
}
