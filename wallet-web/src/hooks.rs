//! Reactive hooks over the wallet context.
//!
//! Block hooks are disabled (`QueryState::Idle`) while the id is empty, refetch when
//! the id or the current chain changes, and drop responses for an outdated id.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::{Chain, Result};
use lib_fuel::queries::{
    chains_view, fetch_block, fetch_block_with_transactions, ChainsView, LatestRequest,
    QueryState,
};
use lib_fuel::{Block, BlockWithTransactions, Client};
use std::future::Future;

use crate::state::wallet::{use_wallet_context, WalletContext};

pub fn use_wallet() -> WalletContext {
    use_wallet_context()
}

pub fn use_account() -> Signal<Option<String>> {
    let ctx = use_wallet_context();
    Signal::derive(move || ctx.address())
}

pub fn use_current_chain() -> Signal<Option<Chain>> {
    let ctx = use_wallet_context();
    Signal::derive(move || ctx.current_chain())
}

pub fn use_is_connected() -> Signal<bool> {
    let ctx = use_wallet_context();
    Signal::derive(move || ctx.is_connected())
}

/// Configured chains and the one the wallet is on.
pub fn use_chains() -> Signal<ChainsView> {
    let ctx = use_wallet_context();
    Signal::derive(move || {
        ctx.state.track();
        chains_view(&ctx.client(), &ctx.store())
    })
}

pub fn use_block(id: Signal<Option<String>>) -> ReadSignal<QueryState<Block>> {
    use_block_query(id, |client, id| async move {
        fetch_block(&client, Some(&id)).await
    })
}

pub fn use_block_with_transactions(
    id: Signal<Option<String>>,
) -> ReadSignal<QueryState<BlockWithTransactions>> {
    use_block_query(id, |client, id| async move {
        fetch_block_with_transactions(&client, Some(&id)).await
    })
}

fn use_block_query<T, F, Fut>(id: Signal<Option<String>>, fetch: F) -> ReadSignal<QueryState<T>>
where
    T: Send + Sync + 'static,
    F: Fn(Client, String) -> Fut + 'static,
    Fut: Future<Output = Result<T>> + 'static,
{
    let ctx = use_wallet_context();
    let (query, set_query) = signal(QueryState::Idle);
    let chain = Memo::new(move |_| ctx.current_chain());
    let latest = LatestRequest::new();

    Effect::new(move |_| {
        chain.track();

        let Some(id) = id.get().filter(|id| !id.trim().is_empty()) else {
            latest.cancel();
            set_query.set(QueryState::Idle);
            return;
        };

        let ticket = latest.start();
        set_query.set(QueryState::Loading);

        let pending = fetch(ctx.client(), id.clone());
        spawn_local(async move {
            let result = pending.await;
            if !ticket.is_current() {
                log::debug!("Dropping stale block response for {}", id);
                return;
            }
            set_query.try_set(QueryState::from(result));
        });
    });

    query
}
