//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::hooks::use_current_chain;

#[component]
pub fn Navbar() -> impl IntoView {
    let chain = use_current_chain();

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <div style="display: flex; gap: 24px; align-items: center;">
                    <A href="/" attr:class="nav-link-clean">
                        <span class="nav-title">"Fuel Wallet"</span>
                    </A>
                    <A href="/blocks" attr:class="nav-link-clean">"Blocks"</A>
                </div>
                <span class="chain-badge">
                    {move || chain.get().map(|c| c.name).unwrap_or_else(|| "no network".to_string())}
                </span>
            </div>
        </nav>
    }
}
