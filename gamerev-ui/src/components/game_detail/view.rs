//! Game detail view components

use super::game_banner::GameBanner;
use super::game_info::GameInfo;
use super::rating_summary::RatingSummaryView;
use super::review_list::ReviewList;
use crate::components::{ErrorDisplay, LoadingSpinner, PageContainer};
use crate::display_types::Game;
use chrono::Locale;
use dioxus::prelude::*;
use gamerev_common::ViewState;

/// Game detail page (pure, props-based)
///
/// Renders whichever branch the view state is in. Fetching is done by the caller.
#[component]
pub fn GameDetailPageView(state: ViewState<Game>, locale: Locale) -> Element {
    match state {
        ViewState::Loading => rsx! {
            LoadingSpinner {}
        },
        ViewState::Error(message) => rsx! {
            PageContainer {
                ErrorDisplay { message }
            }
        },
        ViewState::Loaded(game) => rsx! {
            GameDetailView { game, locale }
        },
    }
}

/// Loaded game layout: banner, info, rating summary and reviews
#[component]
pub fn GameDetailView(game: Game, locale: Locale) -> Element {
    let summary = game.rating_summary();

    rsx! {
        PageContainer {
            div { class: "game-detail flex flex-col gap-8", "data-testid": "game-detail",
                div { class: "game-data flex flex-col gap-6",
                    GameBanner { title: game.title.clone(), thumb_url: game.thumb_url.clone() }
                    div { class: "flex flex-col md:flex-row gap-8",
                        GameInfo {
                            title: game.title.clone(),
                            release_date: game.release_date.clone(),
                            publisher: game.publisher.clone(),
                            description: game.description.clone(),
                            locale,
                        }
                        RatingSummaryView { summary }
                    }
                }
                ReviewList { reviews: game.reviews }
            }
        }
    }
}
