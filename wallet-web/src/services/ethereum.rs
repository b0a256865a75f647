//! Injected EVM wallet (`window.ethereum`) via wasm-bindgen
//!
//! The provider is looked up on every call, so a wallet that is installed or
//! removed while the page is open is picked up without a reload.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use lib_core::error::ProviderError;
use lib_core::provider::{Eip1193, Sleeper};
use serde::Serialize;
use serde_json::Value;
use shared::dto::rpc::{RpcError, DISCONNECTED, INTERNAL_ERROR};
use wasm_bindgen::prelude::*;

// ============================================================================
// JAVASCRIPT INTEROP
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasEthereumProvider() {
    return typeof window !== 'undefined'
        && !!window.ethereum
        && typeof window.ethereum.request === 'function';
}

export function ethereumProviderName() {
    const eth = window.ethereum;
    if (!eth) {
        return null;
    }
    if (eth.isMetaMask) {
        return 'MetaMask';
    }
    if (eth.isCoinbaseWallet) {
        return 'Coinbase Wallet';
    }
    return 'Injected wallet';
}

export async function ethereumRequest(method, params) {
    try {
        return await window.ethereum.request({ method, params });
    } catch (err) {
        // Wallets throw anything from Error objects to plain strings
        const code = err && Number.isInteger(err.code) ? err.code : -32603;
        const message = (err && (err.message || (err.error && err.error.message)))
            || String(err);
        throw { code, message };
    }
}
")]
extern "C" {
    /// `window.ethereum` exists and exposes `request`
    fn hasEthereumProvider() -> bool;

    fn ethereumProviderName() -> Option<String>;

    #[wasm_bindgen(catch)]
    async fn ethereumRequest(method: &str, params: JsValue) -> Result<JsValue, JsValue>;
}

// ============================================================================
// PROVIDER
// ============================================================================

/// Handle on the page's injected wallet.
#[derive(Clone, Copy, Debug)]
pub struct InjectedProvider;

impl InjectedProvider {
    /// `Some` when a wallet is injected right now.
    pub fn detect() -> Option<Self> {
        hasEthereumProvider().then_some(InjectedProvider)
    }

    /// Best-effort wallet brand for logging.
    pub fn name() -> Option<String> {
        ethereumProviderName()
    }
}

#[async_trait(?Send)]
impl Eip1193 for InjectedProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        // Removed or disabled since detection
        if !hasEthereumProvider() {
            return Err(ProviderError::new(DISCONNECTED, "Wallet not detected"));
        }

        // Plain objects, not JS Maps, for the wallet
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let params = params
            .serialize(&serializer)
            .map_err(|e| ProviderError::new(INTERNAL_ERROR, format!("Invalid params for {}: {}", method, e)))?;

        match ethereumRequest(method, params).await {
            Ok(result) => serde_wasm_bindgen::from_value(result)
                .map_err(|e| ProviderError::malformed(method, e)),
            Err(err) => Err(to_provider_error(method, err)),
        }
    }
}

fn to_provider_error(method: &str, err: JsValue) -> ProviderError {
    match serde_wasm_bindgen::from_value::<RpcError>(err) {
        Ok(rpc) => {
            log::warn!("{} failed ({}): {}", method, rpc.code, rpc.message);
            rpc.into()
        }
        Err(_) => ProviderError::new(INTERNAL_ERROR, format!("{} failed", method)),
    }
}

// ============================================================================
// TIMERS
// ============================================================================

/// Waits on the browser's `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSleeper;

#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
