//! Search result tile - pure view with click callback

use crate::components::icons::ImageIcon;
use crate::display_types::SearchResultItem;
use dioxus::prelude::*;

/// Clickable tile showing a game's thumbnail and title.
/// Navigation is handled via on_click callback, not direct router calls.
#[component]
pub fn SearchResultTile(item: SearchResultItem, on_click: EventHandler<String>) -> Element {
    let game_id = item.id.clone();

    rsx! {
        div {
            class: "search-result-item bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow cursor-pointer",
            "data-testid": "search-result",
            "data-game-id": "{item.id}",
            onclick: move |_| on_click.call(game_id.clone()),
            div { class: "aspect-square bg-gray-700 flex items-center justify-center",
                if let Some(url) = &item.thumb_url {
                    img {
                        src: "{url}",
                        alt: "{item.title}",
                        class: "search-result-image w-full h-full object-cover",
                    }
                } else {
                    ImageIcon { class: "w-12 h-12 text-gray-500" }
                }
            }
            div {
                class: "search-result-title p-3 font-bold text-white truncate",
                title: "{item.title}",
                "{item.title}"
            }
        }
    }
}
