//! # Transfer Submitter
//!
//! Turns the two form fields into a native-token transfer and waits for it to be mined.
//!
//! ## Flow
//!
//! 1. [`TransferRequest::validate`]: presence, recipient format, amount format.
//!    Nothing reaches the wallet if this fails.
//! 2. `eth_sendTransaction` through the session's [`Signer`].
//! 3. Poll `eth_getTransactionReceipt` until a receipt appears (one confirmation)
//!    or [`Config::max_receipt_polls`] is exhausted.
//!
//! Provider failures are returned as [`TransferError::Provider`] and never retried.

use crate::config::{Config, NATIVE_DECIMALS};
use crate::error::TransferError;
use crate::provider::{Eip1193, Sleeper};
use crate::session::Signer;
use alloy_primitives::utils::parse_ether;
use alloy_primitives::{Address, TxHash, U256};
use std::str::FromStr;
use tracing::{debug, info, warn};

pub const MISSING_FIELDS: &str = "Please enter recipient address and amount.";
pub const NOT_CONNECTED: &str = "Please connect wallet first.";

/// Raw form input captured at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransferRequest {
    pub recipient: String,
    pub amount: String,
}

/// A request whose fields parsed cleanly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedTransfer {
    pub to: Address,
    /// Wei
    pub value: U256,
}

impl TransferRequest {
    pub fn new(recipient: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            amount: amount.into(),
        }
    }

    /// Both fields present after trimming.
    pub fn ensure_present(&self) -> Result<(), TransferError> {
        if self.recipient.trim().is_empty() || self.amount.trim().is_empty() {
            return Err(TransferError::MissingInput(MISSING_FIELDS));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<ValidatedTransfer, TransferError> {
        self.ensure_present()?;
        Ok(ValidatedTransfer {
            to: parse_recipient(&self.recipient)?,
            value: parse_amount(&self.amount)?,
        })
    }
}

/// Parse a `0x` address. Mixed-case input must carry a valid EIP-55 checksum;
/// all-lowercase and all-uppercase input is accepted as is.
pub fn parse_recipient(input: &str) -> Result<Address, TransferError> {
    let input = input.trim();
    let digits = input
        .strip_prefix("0x")
        .ok_or_else(|| TransferError::InvalidAddress("address must start with 0x".to_string()))?;

    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TransferError::InvalidAddress(
            "expected 40 hexadecimal characters after 0x".to_string(),
        ));
    }

    let mixed_case = digits.chars().any(|c| c.is_ascii_lowercase())
        && digits.chars().any(|c| c.is_ascii_uppercase());
    if mixed_case {
        Address::parse_checksummed(input, None)
            .map_err(|_| TransferError::InvalidAddress("checksum mismatch".to_string()))
    } else {
        Address::from_str(input).map_err(|e| TransferError::InvalidAddress(e.to_string()))
    }
}

/// Parse a decimal TEA amount into wei.
///
/// Accepts `"1"`, `"0.001"`, `".5"`, `"2."`; rejects signs, exponents, more than
/// 18 fractional digits and zero.
pub fn parse_amount(input: &str) -> Result<U256, TransferError> {
    let amount = input.trim();
    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));

    let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !digits_only(whole) || !digits_only(fraction) {
        return Err(TransferError::InvalidAmount(
            "amount must be a positive decimal number".to_string(),
        ));
    }

    if fraction.len() > NATIVE_DECIMALS as usize {
        return Err(TransferError::InvalidAmount(format!(
            "at most {} decimal places are supported",
            NATIVE_DECIMALS
        )));
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let normalized = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    };

    let value = parse_ether(&normalized).map_err(|e| TransferError::InvalidAmount(e.to_string()))?;

    if value.is_zero() {
        return Err(TransferError::InvalidAmount("amount must be greater than zero".to_string()));
    }
    Ok(value)
}

/// Submit `request` from `signer` and wait for one confirmation.
pub async fn submit<P, S>(
    signer: &Signer<'_, P>,
    request: &TransferRequest,
    config: &Config,
    sleeper: &S,
) -> Result<TxHash, TransferError>
where
    P: Eip1193 + ?Sized,
    S: Sleeper + ?Sized,
{
    let transfer = request.validate()?;
    info!(to = %transfer.to, value = %transfer.value, "Submitting transfer");

    let hash = signer.send_value(transfer.to, transfer.value).await.map_err(|e| {
        warn!(code = e.code, "Transfer rejected: {}", e);
        TransferError::from(e)
    })?;
    info!(%hash, "Transfer broadcast, waiting for confirmation");

    wait_for_confirmation(signer, hash, config, sleeper).await?;
    info!(%hash, "Transfer confirmed");
    Ok(hash)
}

async fn wait_for_confirmation<P, S>(
    signer: &Signer<'_, P>,
    hash: TxHash,
    config: &Config,
    sleeper: &S,
) -> Result<(), TransferError>
where
    P: Eip1193 + ?Sized,
    S: Sleeper + ?Sized,
{
    let max_polls = config.max_receipt_polls();
    for poll in 1..=max_polls {
        if let Some(receipt) = signer.receipt(hash).await? {
            if !receipt.succeeded() {
                warn!(%hash, "Transfer reverted");
                return Err(TransferError::Reverted(hash));
            }
            return Ok(());
        }
        debug!(%hash, poll, max_polls, "Receipt pending");
        if poll < max_polls {
            sleeper.sleep(config.receipt_poll_interval_ms).await;
        }
    }

    warn!(%hash, "Gave up waiting for confirmation");
    Err(TransferError::ConfirmationTimeout {
        hash,
        seconds: config.confirmation_timeout_ms / 1_000,
    })
}
