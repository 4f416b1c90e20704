//! Nav bar view component
//!
//! Pure, props-based component with the home link and the game search box.

use crate::components::icons::SearchIcon;
use dioxus::prelude::*;

/// Nav bar view (pure, props-based)
/// Renders the visual structure with callbacks for all interactions.
#[component]
pub fn NavBarView(
    /// Current text in the search box
    search_value: String,
    on_search_change: EventHandler<String>,
    /// Called with the trimmed keyword when the search form is submitted
    on_search_submit: EventHandler<String>,
    on_home_click: EventHandler<()>,
) -> Element {
    rsx! {
        nav {
            class: "shrink-0 h-14 bg-gray-800 flex items-center justify-between px-4 border-b border-gray-700",
            "data-testid": "nav-bar",
            button {
                class: "text-lg font-bold text-white hover:text-blue-300 transition-colors",
                onclick: move |_| on_home_click.call(()),
                "Game Reviews"
            }
            form {
                class: "flex items-center gap-2 bg-gray-700 rounded px-3 py-1",
                onsubmit: {
                    let search_value = search_value.clone();
                    move |evt: FormEvent| {
                        evt.prevent_default();
                        on_search_submit.call(search_value.trim().to_string());
                    }
                },
                SearchIcon { class: "w-4 h-4 text-gray-400" }
                input {
                    class: "bg-transparent text-white placeholder-gray-400 outline-none w-64",
                    r#type: "search",
                    placeholder: "Search games",
                    value: "{search_value}",
                    oninput: move |evt| on_search_change.call(evt.value()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(search_value: String) -> Element {
        rsx! {
            NavBarView {
                search_value,
                on_search_change: |_| {},
                on_search_submit: |_| {},
                on_home_click: |_| {},
            }
        }
    }

    #[test]
    fn search_box_shows_current_value() {
        let props = HarnessProps {
            search_value: "zelda".to_string(),
        };
        let mut dom = VirtualDom::new_with_props(Harness, props);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Game Reviews"));
        assert!(html.contains("value=\"zelda\""), "{html}");
    }
}
