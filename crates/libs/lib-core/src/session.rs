//! Wallet session and its signing handle.

use crate::error::ProviderError;
use crate::provider::{self, Eip1193};
use alloy_primitives::{Address, TxHash, U256};
use shared::dto::rpc::{TransactionReceipt, TransactionRequest};
use shared::utils::truncate_address;

/// An authorized account on the expected chain.
///
/// Lives only in page state; a reload or a disconnect drops it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletSession {
    pub address: Address,
    pub chain_id: u64,
}

impl WalletSession {
    pub fn new(address: Address, chain_id: u64) -> Self {
        Self { address, chain_id }
    }

    /// Bind this session to a provider, producing the handle transfers are sent through.
    pub fn signer<'a, P: Eip1193 + ?Sized>(&self, provider: &'a P) -> Signer<'a, P> {
        Signer {
            provider,
            from: self.address,
        }
    }

    /// EIP-55 checksummed address.
    pub fn display_address(&self) -> String {
        self.address.to_checksum(None)
    }

    pub fn short_address(&self) -> String {
        truncate_address(&self.display_address())
    }
}

/// Sends transactions from the session's account.
pub struct Signer<'a, P: ?Sized> {
    provider: &'a P,
    from: Address,
}

impl<P: Eip1193 + ?Sized> Signer<'_, P> {
    pub fn address(&self) -> Address {
        self.from
    }

    /// Plain value transfer; gas and nonce are filled in by the wallet.
    pub async fn send_value(&self, to: Address, value: U256) -> Result<TxHash, ProviderError> {
        let tx = TransactionRequest {
            from: self.from.to_checksum(None),
            to: to.to_checksum(None),
            value: format!("0x{:x}", value),
        };
        provider::send_transaction(self.provider, &tx).await
    }

    pub async fn receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>, ProviderError> {
        provider::transaction_receipt(self.provider, hash).await
    }
}
