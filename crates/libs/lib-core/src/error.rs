//! # Centralized Error Handling
//!
//! Error types for every failure the page can surface. All of them follow the
//! `thiserror` pattern so their `Display` output is what ends up in an alert
//! or on the error banner.
//!
//! ## Error Categories
//!
//! 1. **Startup** - [`AppError`]
//!    - [`Config`](AppError::Config) → configuration rejected by [`crate::config::Config::validate`]
//!
//! 2. **Connection** - [`WalletError`], raised by [`crate::connector::connect`]
//!    - [`ProviderMissing`](WalletError::ProviderMissing) → no injected wallet
//!    - [`UserRejected`](WalletError::UserRejected) → the user declined access
//!    - [`WrongNetwork`](WalletError::WrongNetwork) → chain id mismatch
//!
//! 3. **Transfer** - [`TransferError`], raised by [`crate::transfer::submit`]
//!    - pre-flight: [`MissingInput`](TransferError::MissingInput),
//!      [`InvalidAddress`](TransferError::InvalidAddress),
//!      [`InvalidAmount`](TransferError::InvalidAmount)
//!    - in-flight: [`Provider`](TransferError::Provider) (message verbatim),
//!      [`Reverted`](TransferError::Reverted),
//!      [`ConfirmationTimeout`](TransferError::ConfirmationTimeout)
//!
//! Pre-flight failures become a blocking alert, everything else an on-page banner
//! (see [`TransferError::is_preflight`]).
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{TransferError, ProviderError};
//!
//! let err = TransferError::Provider(ProviderError::new(-32000, "insufficient funds for gas * price + value"));
//! assert_eq!(err.to_string(), "insufficient funds for gas * price + value");
//! assert!(!err.is_preflight());
//! ```

use alloy_primitives::TxHash;
use shared::dto::rpc::{RpcError, DISCONNECTED, INTERNAL_ERROR, USER_REJECTED_REQUEST};
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Startup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Configuration error during startup.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error reported by the wallet provider for a single `request` call.
///
/// `Display` is the provider's message, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The provider answered, but not with the shape the method promises.
    pub fn malformed(method: &str, detail: impl std::fmt::Display) -> Self {
        Self::new(
            INTERNAL_ERROR,
            format!("Unexpected response to {}: {}", method, detail),
        )
    }

    /// EIP-1193 code 4001.
    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED_REQUEST
    }

    /// EIP-1193 code 4900: no wallet to talk to.
    pub fn is_disconnected(&self) -> bool {
        self.code == DISCONNECTED
    }
}

impl From<RpcError> for ProviderError {
    fn from(err: RpcError) -> Self {
        Self::new(err.code, err.message)
    }
}

/// Wallet connection failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No wallet extension injected into the page.
    #[error("Wallet not detected. Please install MetaMask.")]
    ProviderMissing,

    /// The user declined the account access prompt.
    #[error("Wallet connection rejected: {0}")]
    UserRejected(String),

    /// Provider is on another chain. Switching is left to the user.
    #[error("Please switch to {chain_name} (Chain ID: {expected}). Your wallet is on chain {actual}.")]
    WrongNetwork {
        expected: u64,
        actual: u64,
        chain_name: String,
    },

    /// Access granted but the account list was empty.
    #[error("Wallet did not return any accounts")]
    NoAccounts,

    /// Any other provider failure while connecting.
    #[error("Wallet connection failed: {0}")]
    Provider(ProviderError),
}

impl From<ProviderError> for WalletError {
    fn from(err: ProviderError) -> Self {
        if err.is_user_rejection() {
            WalletError::UserRejected(err.message)
        } else {
            WalletError::Provider(err)
        }
    }
}

/// Transfer submission failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// A required input (session, recipient or amount) is absent.
    #[error("{0}")]
    MissingInput(&'static str),

    #[error("Invalid recipient address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The wallet extension disappeared between connect and submit.
    #[error("Wallet provider is no longer available. Please reload the page.")]
    ProviderUnavailable,

    /// Rejection, insufficient funds, RPC failure. Carries the provider's message verbatim.
    #[error("{0}")]
    Provider(ProviderError),

    /// Mined with receipt status 0.
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),

    /// No receipt within the configured wait.
    #[error("Transaction {hash} was not confirmed within {seconds}s")]
    ConfirmationTimeout { hash: TxHash, seconds: u32 },
}

impl TransferError {
    /// Checks that fail before the wallet is contacted.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            TransferError::MissingInput(_)
                | TransferError::InvalidAddress(_)
                | TransferError::InvalidAmount(_)
        )
    }
}

impl From<ProviderError> for TransferError {
    fn from(err: ProviderError) -> Self {
        if err.is_disconnected() {
            TransferError::ProviderUnavailable
        } else {
            TransferError::Provider(err)
        }
    }
}
