use crate::api::{self, GameSourceHandle};
use crate::config::AppConfig;
use crate::hooks::use_view_loader;
use gamerev_ui::GameDetailPageView;
use dioxus::prelude::*;

#[component]
pub fn GameDetail(game_id: String) -> Element {
    let config: AppConfig = use_context();
    let handle: GameSourceHandle = use_context();

    let loader = use_view_loader(game_id, move |id: String| {
        let source = handle.source();
        async move { api::load_game_detail(source.as_ref(), &id).await }
    });
    let state = loader.read().state().clone();

    rsx! {
        GameDetailPageView { state, locale: config.locale }
    }
}
