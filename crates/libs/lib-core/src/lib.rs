//! # Core Library
//!
//! Wallet connection, transfer submission, and page state for the Tea Sepolia
//! transfer page. Nothing here touches the browser: the wallet is reached
//! through the [`provider::Eip1193`] trait and waiting goes through
//! [`provider::Sleeper`], so the whole flow runs natively in unit tests.

pub mod config;
pub mod connector;
pub mod error;
pub mod provider;
pub mod session;
pub mod state;
pub mod transfer;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::{core_config, init_config, Config};
pub use error::{AppError, ProviderError, Result, TransferError, WalletError};
pub use session::{Signer, WalletSession};
pub use state::{update, AppState, Effect, Msg};
