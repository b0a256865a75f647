//! Page footer

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"© 2025 TanLe. All rights reserved."</p>
        </footer>
    }
}
