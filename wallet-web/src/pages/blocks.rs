//! Block lookup page - find a block by id or height on the current chain

use leptos::prelude::*;
use lib_fuel::queries::QueryState;
use lib_utils::truncate_address;

use crate::hooks::{use_block, use_block_with_transactions, use_current_chain};

#[component]
pub fn BlockPage() -> impl IntoView {
    let chain = use_current_chain();

    let (input, set_input) = signal(String::new());
    let (submitted, set_submitted) = signal(None::<String>);
    let (with_transactions, set_with_transactions) = signal(false);

    // Only one of the two queries is enabled at a time.
    let block_id = Signal::derive(move || submitted.get().filter(|_| !with_transactions.get()));
    let full_block_id = Signal::derive(move || submitted.get().filter(|_| with_transactions.get()));

    let block = use_block(block_id);
    let full_block = use_block_with_transactions(full_block_id);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_submitted.set(Some(input.get()));
    };

    view! {
        <div class="container">
            <div class="card">
                <h1 style="color: #ffffff; font-size: 32px; margin-bottom: 12px; font-weight: 700;">
                    "Block Lookup"
                </h1>
                <p class="subtitle">
                    {move || match chain.get() {
                        Some(chain) => format!("Querying {} ({})", chain.name, chain.url),
                        None => "Querying the default chain".to_string(),
                    }}
                </p>

                <form on:submit=on_submit style="display: flex; flex-direction: column; gap: 12px;">
                    <input
                        type="text"
                        placeholder="Block id or height"
                        prop:value=input
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                    />
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=with_transactions
                            on:change=move |ev| set_with_transactions.set(event_target_checked(&ev))
                        />
                        " Include transactions"
                    </label>
                    <button class="btn" type="submit">"Search"</button>
                </form>

                <div style="margin-top: 16px;">
                    {move || if with_transactions.get() {
                        render_full_block(full_block.get())
                    } else {
                        render_block(block.get())
                    }}
                </div>
            </div>
        </div>
    }
}

fn render_status<T>(state: &QueryState<T>) -> Option<AnyView> {
    match state {
        QueryState::Idle => Some(view! { <p class="info">"Enter a block id or height."</p> }.into_any()),
        QueryState::Loading => Some(view! { <p class="info">"Loading..."</p> }.into_any()),
        QueryState::Error(err) => {
            Some(view! { <p class="error">{err.to_string()}</p> }.into_any())
        }
        QueryState::Success(_) => None,
    }
}

fn render_block(state: QueryState<lib_fuel::Block>) -> AnyView {
    if let Some(status) = render_status(&state) {
        return status;
    }
    let Some(block) = state.data().cloned() else {
        return ().into_any();
    };

    view! {
        <div class="success">
            <p>{format!("Height: {}", block.height)}</p>
            <p title=block.id.clone()>{format!("Id: {}", truncate_address(&block.id))}</p>
            <p>{format!("Time: {}", block.time)}</p>
            <p>{format!("Transactions: {}", block.transaction_ids.len())}</p>
            <ul>
                {block.transaction_ids.into_iter().map(|id| view! { <li>{id}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
    .into_any()
}

fn render_full_block(state: QueryState<lib_fuel::BlockWithTransactions>) -> AnyView {
    if let Some(status) = render_status(&state) {
        return status;
    }
    let Some(block) = state.data().cloned() else {
        return ().into_any();
    };

    view! {
        <div class="success">
            <p>{format!("Height: {}", block.height)}</p>
            <p title=block.id.clone()>{format!("Id: {}", truncate_address(&block.id))}</p>
            <p>{format!("Time: {}", block.time)}</p>
            <ul>
                {block
                    .transactions
                    .into_iter()
                    .map(|tx| {
                        let size = tx.raw_payload.as_ref().map(|raw| raw.len()).unwrap_or(0);
                        view! { <li>{format!("{} ({} payload chars)", tx.id, size)}</li> }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
    .into_any()
}
