//! Game title, release line and description

use crate::components::utils::format_release_date;
use chrono::Locale;
use dioxus::prelude::*;

#[component]
pub fn GameInfo(
    title: String,
    release_date: String,
    publisher: String,
    description: String,
    locale: Locale,
) -> Element {
    let release = format_release_date(&release_date, locale);

    rsx! {
        div { class: "game-info flex-1",
            h1 { class: "text-3xl font-bold text-white mb-2", "{title}" }
            h4 { class: "text-gray-400 mb-4", "Release date: {release} | {publisher}" }
            p { class: "text-gray-300 whitespace-pre-line", "{description}" }
        }
    }
}
