use gamerev_ui::PageContainer;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        PageContainer {
            div { class: "flex flex-col items-center justify-center py-24 text-center",
                h1 { class: "text-3xl font-bold text-white mb-4", "Game Reviews" }
                p { class: "text-gray-400", "Search for a game to see what players think of it." }
            }
        }
    }
}
