//! Tea Transfer Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Footer, Navbar};
use crate::pages::{NotFoundPage, TransferPage};
use crate::services::InjectedProvider;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context();

    // Report once the app is mounted; the wallet may inject after page load
    Effect::new(move || match InjectedProvider::detect() {
        Some(_) => log::info!(
            "Wallet provider detected: {}",
            InjectedProvider::name().unwrap_or_else(|| "unknown".to_string())
        ),
        None => log::warn!("No wallet provider detected (window.ethereum missing)"),
    });

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=path!("/") view=TransferPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
