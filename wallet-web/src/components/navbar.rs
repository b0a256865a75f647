//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::core_config;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_wallet_context();
    let config = core_config();

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">{format!("{} Transfer", config.native_symbol)}</span>
                </A>
                <span class="network-badge" class:online=move || ctx.is_connected()>
                    {format!("{} ({})", config.chain_name, config.chain_id)}
                </span>
            </div>
        </nav>
    }
}
