//! Connect Wallet Page - connect/disconnect the injected Fuel wallet

use leptos::prelude::*;
use lib_core::ConnectionStatus;
use lib_utils::truncate_address;

use crate::hooks::{use_account, use_chains, use_wallet};

#[component]
pub fn ConnectPage() -> impl IntoView {
    let wallet = use_wallet();
    let account = use_account();
    let chains = use_chains();

    let status = move || wallet.state.with(|state| state.status);
    let busy = move || status().is_transient();

    view! {
        <div class="container">
            <div class="card">
                <h1 style="color: #ffffff; font-size: 32px; margin-bottom: 12px; font-weight: 700;">
                    "Fuel Wallet"
                </h1>
                <p class="subtitle">{move || format!("Status: {}", status())}</p>

                {move || (!wallet.ready.get()).then(|| view! {
                    <div class="info">
                        <p style="text-align: center;">
                            "Waiting for the Fuel Wallet extension. Install or unlock it to continue."
                        </p>
                    </div>
                })}

                {move || wallet.last_error.get().map(|err| view! {
                    <div class="error">
                        <p style="text-align: center;">{err.to_string()}</p>
                    </div>
                })}

                {move || account.get().map(|address| view! {
                    <div class="wallet-address" title=address.clone()>
                        {truncate_address(&address)}
                    </div>
                })}

                <div style="margin: 16px 0;">
                    <p style="font-weight: 600; margin-bottom: 8px;">"Networks"</p>
                    <ul>
                        {move || {
                            let listing = chains.get();
                            let current = listing.current_chain.map(|c| c.name);
                            listing.chains
                                .into_iter()
                                .map(|chain| {
                                    let marker = if current.as_deref() == Some(chain.name.as_str()) {
                                        " (current)"
                                    } else {
                                        ""
                                    };
                                    view! { <li>{format!("{}{} - {}", chain.name, marker, chain.url)}</li> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>

                {move || match status() {
                    ConnectionStatus::Connected | ConnectionStatus::Disconnecting => view! {
                        <button
                            class="btn"
                            disabled=busy
                            on:click=move |_| wallet.disconnect()
                        >
                            "Disconnect"
                        </button>
                    }.into_any(),
                    ConnectionStatus::Disconnected | ConnectionStatus::Connecting => view! {
                        <button
                            class="btn"
                            disabled=move || busy() || !wallet.ready.get()
                            on:click=move |_| wallet.connect()
                        >
                            {move || if busy() { "Connecting..." } else { "Connect Wallet" }}
                        </button>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
