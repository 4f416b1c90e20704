//! Fetch-on-key hook shared by the pages

use dioxus::prelude::*;
use gamerev_common::{FinishOutcome, ViewLoader, ViewState};
use std::future::Future;
use tracing::debug;

/// Run `fetch` for `key` and again whenever `key` changes.
///
/// Each run resets the view to `Loading`. A response that arrives after a
/// newer run has started is dropped, so a slow old request can't overwrite
/// the page for the current key.
pub fn use_view_loader<K, T, F, Fut>(key: K, fetch: F) -> Signal<ViewLoader<T>>
where
    K: Clone + PartialEq + std::fmt::Debug + 'static,
    T: 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = ViewState<T>> + 'static,
{
    let mut loader = use_signal(ViewLoader::<T>::new);

    use_effect(use_reactive((&key,), move |(key,)| {
        let ticket = loader.write().begin();
        debug!("Fetching view data for {key:?}");
        let request = fetch(key.clone());
        spawn(async move {
            let state = request.await;
            if loader.write().finish(ticket, state) == FinishOutcome::Stale {
                debug!("Dropped stale response for {key:?}");
            }
        });
    }));

    loader
}
