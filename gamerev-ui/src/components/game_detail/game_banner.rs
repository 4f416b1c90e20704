//! Game banner (cover image) component

use crate::components::icons::ImageIcon;
use dioxus::prelude::*;

#[component]
pub fn GameBanner(title: String, thumb_url: Option<String>) -> Element {
    rsx! {
        div { class: "game-banner w-full max-h-96 overflow-hidden rounded-lg bg-gray-800 flex items-center justify-center",
            if let Some(url) = &thumb_url {
                img {
                    src: "{url}",
                    alt: "Cover of {title}",
                    class: "w-full h-full object-cover",
                }
            } else {
                ImageIcon { class: "w-16 h-16 text-gray-500 my-16" }
            }
        }
    }
}
