//! # Wallet Provider Boundary
//!
//! The page talks to the wallet through exactly one call, EIP-1193's
//! `request({ method, params })`. [`Eip1193`] models that call; anything that
//! implements it (the injected `window.ethereum`, a test double) can drive the
//! connector and the submitter.
//!
//! The typed helpers below wrap the handful of methods the page uses and turn
//! malformed answers into [`ProviderError::malformed`].

use crate::error::ProviderError;
use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;
use serde_json::{json, Value};
use shared::dto::rpc::{
    parse_quantity, TransactionReceipt, TransactionRequest, ETH_CHAIN_ID,
    ETH_GET_TRANSACTION_RECEIPT, ETH_REQUEST_ACCOUNTS, ETH_SEND_TRANSACTION,
};
use std::str::FromStr;

/// An EIP-1193 provider.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait Eip1193 {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;
}

/// Cooperative delay between receipt polls.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, millis: u32);
}

/// `eth_requestAccounts`, prompting the user if the page is not yet authorized.
pub async fn request_accounts<P: Eip1193 + ?Sized>(provider: &P) -> Result<Vec<String>, ProviderError> {
    let value = provider.request(ETH_REQUEST_ACCOUNTS, json!([])).await?;
    serde_json::from_value(value).map_err(|e| ProviderError::malformed(ETH_REQUEST_ACCOUNTS, e))
}

/// `eth_chainId`, decoded from its hex quantity.
pub async fn chain_id<P: Eip1193 + ?Sized>(provider: &P) -> Result<u64, ProviderError> {
    let value = provider.request(ETH_CHAIN_ID, json!([])).await?;
    value
        .as_str()
        .and_then(parse_quantity)
        .ok_or_else(|| ProviderError::malformed(ETH_CHAIN_ID, &value))
}

/// `eth_sendTransaction`; resolves once the wallet has signed and broadcast.
pub async fn send_transaction<P: Eip1193 + ?Sized>(
    provider: &P,
    tx: &TransactionRequest,
) -> Result<TxHash, ProviderError> {
    let value = provider.request(ETH_SEND_TRANSACTION, json!([tx])).await?;
    value
        .as_str()
        .and_then(|hash| TxHash::from_str(hash).ok())
        .ok_or_else(|| ProviderError::malformed(ETH_SEND_TRANSACTION, &value))
}

/// `eth_getTransactionReceipt`; `None` while the transaction is pending.
pub async fn transaction_receipt<P: Eip1193 + ?Sized>(
    provider: &P,
    hash: TxHash,
) -> Result<Option<TransactionReceipt>, ProviderError> {
    let value = provider
        .request(ETH_GET_TRANSACTION_RECEIPT, json!([hash.to_string()]))
        .await?;
    serde_json::from_value(value).map_err(|e| ProviderError::malformed(ETH_GET_TRANSACTION_RECEIPT, e))
}

/// Parse an account string returned by the provider.
pub fn parse_account(account: &str) -> Result<Address, ProviderError> {
    Address::from_str(account).map_err(|e| ProviderError::malformed(ETH_REQUEST_ACCOUNTS, e))
}
