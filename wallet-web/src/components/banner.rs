//! Result banners shown under the transfer form

use leptos::prelude::*;

/// Confirmed transfer with a link to the explorer.
#[component]
pub fn SuccessBanner(href: String) -> impl IntoView {
    view! {
        <div class="banner banner-success">
            "✅ Transaction Successful!"
            <br/>
            <a href=href target="_blank" rel="noopener noreferrer">"View Transaction"</a>
        </div>
    }
}

#[component]
pub fn FailureBanner(message: String) -> impl IntoView {
    view! {
        <div class="banner banner-failure">
            "❌ Transaction Failed"
            <br/>
            {message}
        </div>
    }
}
