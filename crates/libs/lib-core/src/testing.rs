//! In-memory [`Eip1193`] double used by the unit tests.

use crate::error::ProviderError;
use crate::provider::{Eip1193, Sleeper};
use async_trait::async_trait;
use serde_json::{json, Value};
use shared::dto::rpc::{
    ETH_CHAIN_ID, ETH_GET_TRANSACTION_RECEIPT, ETH_REQUEST_ACCOUNTS, ETH_SEND_TRANSACTION,
};
use std::cell::{Cell, RefCell};

pub(crate) struct MockProvider {
    accounts: Result<Value, ProviderError>,
    chain_id: String,
    send_result: Result<Value, ProviderError>,
    pending_polls: Cell<u32>,
    receipt_status: &'static str,
    calls: RefCell<Vec<(String, Value)>>,
}

impl MockProvider {
    pub const ACCOUNT: &'static str = "0x52908400098527886e0f7030069857d2e4169ee7";
    pub const RECIPIENT: &'static str = "0xde709f2102306220921060314715629080e2fb77";
    pub const TX_HASH: &'static str =
        "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";

    /// Authorizes [`Self::ACCOUNT`] on `chain_id` and mines every transaction on the first poll.
    pub fn connected(chain_id: &str) -> Self {
        Self {
            accounts: Ok(json!([Self::ACCOUNT])),
            chain_id: chain_id.to_string(),
            send_result: Ok(json!(Self::TX_HASH)),
            pending_polls: Cell::new(0),
            receipt_status: "0x1",
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_accounts(mut self, accounts: &[&str]) -> Self {
        self.accounts = Ok(json!(accounts));
        self
    }

    pub fn rejecting_accounts(mut self, code: i64, message: &str) -> Self {
        self.accounts = Err(ProviderError::new(code, message));
        self
    }

    pub fn rejecting_send(mut self, code: i64, message: &str) -> Self {
        self.send_result = Err(ProviderError::new(code, message));
        self
    }

    pub fn with_pending_polls(self, polls: u32) -> Self {
        self.pending_polls.set(polls);
        self
    }

    pub fn reverting(mut self) -> Self {
        self.receipt_status = "0x0";
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(method, _)| method.clone()).collect()
    }
}

#[async_trait(?Send)]
impl Eip1193 for MockProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.calls.borrow_mut().push((method.to_string(), params.clone()));

        match method {
            ETH_REQUEST_ACCOUNTS => self.accounts.clone(),
            ETH_CHAIN_ID => Ok(json!(self.chain_id)),
            ETH_SEND_TRANSACTION => self.send_result.clone(),
            ETH_GET_TRANSACTION_RECEIPT => {
                let pending = self.pending_polls.get();
                if pending > 0 {
                    self.pending_polls.set(pending - 1);
                    return Ok(Value::Null);
                }
                Ok(json!({
                    "transactionHash": params[0],
                    "blockNumber": "0x1b4",
                    "status": self.receipt_status,
                }))
            }
            other => Err(ProviderError::new(4200, format!("Unsupported method {}", other))),
        }
    }
}

/// Returns immediately, counting how often it was asked to wait.
#[derive(Default)]
pub(crate) struct InstantSleeper {
    pub slept: Cell<u32>,
}

#[async_trait(?Send)]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, _millis: u32) {
        self.slept.set(self.slept.get() + 1);
    }
}
