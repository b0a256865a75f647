//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the injected wallet provider.
//!
//! ## Module Organization
//!
//! - [`rpc`] - EIP-1193 method names, transaction request, receipt and error shapes
//!
//! ## Example JSON Communication
//!
//! ```text
//! window.ethereum.request({
//!   "method": "eth_sendTransaction",
//!   "params": [{
//!     "from": "0x1111111111111111111111111111111111111111",
//!     "to": "0x2222222222222222222222222222222222222222",
//!     "value": "0x38d7ea4c68000"
//!   }]
//! })
//! ```
//!
//! ```text
//! "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060"
//! ```

pub mod rpc;

pub use rpc::*;
