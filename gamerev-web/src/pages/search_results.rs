use crate::api::{self, GameSourceHandle};
use crate::hooks::use_view_loader;
use crate::Route;
use gamerev_ui::SearchResultsPageView;
use dioxus::prelude::*;

#[component]
pub fn SearchResults(q: String) -> Element {
    let handle: GameSourceHandle = use_context();

    let loader = use_view_loader(q.clone(), move |keyword: String| {
        let source = handle.source();
        async move { api::load_search_results(source.as_ref(), &keyword).await }
    });
    let state = loader.read().state().clone();

    rsx! {
        SearchResultsPageView {
            keyword: q,
            state,
            on_result_click: move |game_id: String| {
                navigator().push(Route::GameDetail { game_id });
            },
        }
    }
}
