//! Page state context
//!
//! Holds the single [`AppState`] in a signal and runs the effects that
//! [`update`] hands back.

use alloy_primitives::TxHash;
use leptos::prelude::*;
use lib_core::connector::connect;
use lib_core::error::TransferError;
use lib_core::state::{update, AppState, Effect, Msg};
use lib_core::transfer::{submit, TransferRequest};
use lib_core::{core_config, WalletSession};

use crate::services::{BrowserSleeper, InjectedProvider};

/// Global page context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub state: RwSignal<AppState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AppState::new(core_config())),
        }
    }

    /// Apply `msg` and run whatever effect it produces.
    pub fn dispatch(&self, msg: Msg) {
        let mut effect = None;
        self.state.update(|state| {
            let (next, out) = update(std::mem::take(state), msg);
            *state = next;
            effect = out;
        });

        if let Some(effect) = effect {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        let ctx = *self;
        match effect {
            Effect::Alert(message) => alert(&message),
            Effect::Connect => leptos::task::spawn_local(async move {
                let provider = InjectedProvider::detect();
                let msg = match connect(provider.as_ref(), core_config()).await {
                    Ok(session) => Msg::Connected(session),
                    Err(err) => Msg::ConnectFailed(err),
                };
                ctx.dispatch(msg);
            }),
            Effect::Send {
                ticket,
                session,
                request,
            } => leptos::task::spawn_local(async move {
                let result = send(&session, &request).await;
                ctx.dispatch(Msg::SendFinished { ticket, result });
            }),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(|state| state.is_connected())
    }

    pub fn short_address(&self) -> Option<String> {
        self.state.with(|state| state.session().map(WalletSession::short_address))
    }
}

async fn send(session: &WalletSession, request: &TransferRequest) -> Result<TxHash, TransferError> {
    let provider = InjectedProvider::detect().ok_or(TransferError::ProviderUnavailable)?;
    let signer = session.signer(&provider);
    submit(&signer, request, core_config(), &BrowserSleeper).await
}

fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::error!("Alert failed: {}", message);
            }
        }
        None => log::error!("No window for alert: {}", message),
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
