//! # Wallet Provider JSON-RPC Objects
//!
//! Method names, request/response shapes and the error object defined by
//! EIP-1193 and the Ethereum JSON-RPC API.

use serde::{Deserialize, Serialize};

/// Ask the wallet to authorize the page; resolves to the account list.
pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
/// Active chain id as a hex quantity.
pub const ETH_CHAIN_ID: &str = "eth_chainId";
/// Sign and broadcast a transaction; resolves to its hash.
pub const ETH_SEND_TRANSACTION: &str = "eth_sendTransaction";
/// Receipt for a mined transaction, `null` while pending.
pub const ETH_GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";

/// EIP-1193: the user rejected the request.
pub const USER_REJECTED_REQUEST: i64 = 4001;
/// EIP-1193: the provider is disconnected from all chains.
pub const DISCONNECTED: i64 = 4900;
/// JSON-RPC: internal error. Used when the provider threw something without a code.
pub const INTERNAL_ERROR: i64 = -32603;

/// Value transfer passed as the single parameter of `eth_sendTransaction`.
///
/// Gas, nonce and fee fields are left to the wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    /// Wei as a hex quantity (`"0x..."`)
    pub value: String,
}

/// The subset of a transaction receipt the page cares about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<String>,
    /// `"0x1"` success, `"0x0"` reverted. Absent on pre-Byzantium chains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TransactionReceipt {
    /// `true` unless the receipt explicitly reports a revert.
    pub fn succeeded(&self) -> bool {
        !matches!(self.status.as_deref().and_then(parse_quantity), Some(0))
    }
}

/// Error object thrown by `window.ethereum.request`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Parse a JSON-RPC hex quantity (`"0x27ea"`) into an integer.
///
/// # Examples
///
/// ```rust
/// use shared::dto::rpc::parse_quantity;
///
/// assert_eq!(parse_quantity("0x27ea"), Some(10218));
/// assert_eq!(parse_quantity("0x0"), Some(0));
/// assert_eq!(parse_quantity("10218"), None);
/// ```
pub fn parse_quantity(value: &str) -> Option<u64> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))?;
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}
