//! Search results view components

use super::result_tile::SearchResultTile;
use crate::components::{ErrorDisplay, LoadingSpinner, PageContainer};
use crate::display_types::SearchResultItem;
use dioxus::prelude::*;
use gamerev_common::ViewState;

/// Search results page (pure, props-based)
#[component]
pub fn SearchResultsPageView(
    keyword: String,
    state: ViewState<Vec<SearchResultItem>>,
    /// Called with the game id of the clicked tile
    on_result_click: EventHandler<String>,
) -> Element {
    match state {
        ViewState::Loading => rsx! {
            LoadingSpinner {}
        },
        ViewState::Error(message) => rsx! {
            PageContainer {
                ErrorDisplay { message }
            }
        },
        ViewState::Loaded(results) => rsx! {
            SearchResultsView { keyword, results, on_result_click }
        },
    }
}

/// Grid of result tiles, or an empty notice
#[component]
pub fn SearchResultsView(
    keyword: String,
    results: Vec<SearchResultItem>,
    on_result_click: EventHandler<String>,
) -> Element {
    if results.is_empty() {
        return rsx! {
            PageContainer {
                div { class: "text-gray-400 py-12 text-center", "data-testid": "no-results",
                    "No results found for \"{keyword}\""
                }
            }
        };
    }

    rsx! {
        PageContainer {
            div { class: "search-results-page",
                h2 { class: "text-2xl font-bold text-white mb-6", "Search Results for \"{keyword}\"" }
                div { class: "search-results grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-4",
                    for item in results {
                        SearchResultTile { key: "{item.id}", item: item.clone(), on_click: on_result_click }
                    }
                }
            }
        }
    }
}
