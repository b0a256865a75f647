//! Transfer Page - connect a wallet and send native TEA

use leptos::prelude::*;
use lib_core::core_config;
use lib_core::state::Msg;

use crate::components::{FailureBanner, SuccessBanner};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn TransferPage() -> impl IntoView {
    let ctx = use_wallet_context();
    let config = core_config();

    view! {
        <div class="page">
            <div class="card">
                <Show
                    when=move || ctx.is_connected()
                    fallback=move || view! { <ConnectButton/> }
                >
                    <div class="card-header">
                        <h2 class="card-title">{format!("Send {}", config.native_symbol)}</h2>
                        <span class="address">{move || ctx.short_address()}</span>
                        <button class="btn-link" on:click=move |_| ctx.dispatch(Msg::Disconnect)>
                            "Disconnect"
                        </button>
                    </div>
                    <TransferForm/>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ConnectButton() -> impl IntoView {
    let ctx = use_wallet_context();
    let connecting = move || ctx.state.with(|state| state.is_connecting());

    view! {
        <button
            class="btn btn-connect"
            disabled=connecting
            on:click=move |_| ctx.dispatch(Msg::ConnectClicked)
        >
            {move || if connecting() { "Connecting..." } else { "Connect Wallet" }}
        </button>
    }
}

#[component]
fn TransferForm() -> impl IntoView {
    let ctx = use_wallet_context();
    let config = core_config();
    let sending = move || ctx.state.with(|state| state.is_sending());

    view! {
        <label class="field-label">{format!("Amount ({})", config.native_symbol)}</label>
        <input
            type="text"
            class="field"
            inputmode="decimal"
            prop:value=move || ctx.state.with(|state| state.form.amount.clone())
            on:input=move |ev| ctx.dispatch(Msg::AmountChanged(event_target_value(&ev)))
        />

        <label class="field-label">"Recipient Address"</label>
        <input
            type="text"
            class="field"
            placeholder="0x..."
            spellcheck="false"
            disabled=sending
            prop:value=move || ctx.state.with(|state| state.form.recipient.clone())
            on:input=move |ev| ctx.dispatch(Msg::RecipientChanged(event_target_value(&ev)))
        />

        <button
            class="btn btn-send"
            disabled=sending
            on:click=move |_| ctx.dispatch(Msg::SendClicked)
        >
            {move || {
                if sending() {
                    "Sending...".to_string()
                } else {
                    format!("Send {}", config.native_symbol)
                }
            }}
        </button>

        {move || {
            ctx.state
                .with(|state| state.success_hash())
                .map(|hash| {
                    let href = config.explorer_tx_url(&hash.to_string());
                    view! { <SuccessBanner href=href/> }
                })
        }}
        {move || {
            ctx.state
                .with(|state| state.failure_message().map(str::to_string))
                .map(|message| view! { <FailureBanner message=message/> })
        }}
    }
}
