pub mod api;
pub mod config;
pub mod hooks;
pub mod pages;

use api::{GameApi, GameSourceHandle};
use config::AppConfig;
use dioxus::prelude::*;
use gamerev_ui::{ErrorDisplay, PageContainer};
use pages::{AppLayout, GameDetail, Home, SearchResults};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/game/:game_id")]
    GameDetail { game_id: String },
    #[route("/search?:q")]
    SearchResults { q: String },
}

/// Root component. Expects an [`AppConfig`] in context (see `main`).
#[component]
pub fn App() -> Element {
    let config: AppConfig = use_context();
    let source = use_hook(|| {
        GameApi::new(config.api.clone())
            .map(GameSourceHandle::new)
            .map_err(|e| e.to_string())
    });

    match source {
        Ok(handle) => {
            use_context_provider(|| handle);
            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                div { class: "min-h-screen", Router::<Route> {} }
            }
        }
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {e}");
            rsx! {
                PageContainer {
                    ErrorDisplay { message: "Failed to start the app.".to_string() }
                }
            }
        }
    }
}
