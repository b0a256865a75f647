//! # Shared Wire Types Library
//!
//! This library defines the contract between the page and the injected wallet
//! provider. Everything that crosses the EIP-1193 `request({ method, params })`
//! boundary is described here as a `serde` type.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the wallet provider boundary
//!   - **[`dto::rpc`]**: JSON-RPC method names, transaction and receipt shapes, provider errors
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! Ethereum JSON-RPC uses **camelCase** field names and hex-encoded quantities
//! (`"0x27ea"`), so every DTO here carries `#[serde(rename_all = "camelCase")]`
//! and quantities travel as strings.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::rpc::{TransactionRequest, ETH_SEND_TRANSACTION};
//!
//! let tx = TransactionRequest {
//!     from: "0x1111111111111111111111111111111111111111".to_string(),
//!     to: "0x2222222222222222222222222222222222222222".to_string(),
//!     value: "0x38d7ea4c68000".to_string(),
//! };
//! let params = serde_json::json!([tx]);
//! assert_eq!(ETH_SEND_TRANSACTION, "eth_sendTransaction");
//! assert_eq!(params[0]["value"], "0x38d7ea4c68000");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
