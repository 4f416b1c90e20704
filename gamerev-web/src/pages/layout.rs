use crate::Route;
use gamerev_ui::{AppLayoutView, NavBarView};
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let mut search_query = use_signal(String::new);

    rsx! {
        AppLayoutView {
            nav_bar: rsx! {
                NavBarView {
                    search_value: search_query(),
                    on_search_change: move |value: String| {
                        search_query.set(value);
                    },
                    on_search_submit: move |q: String| {
                        if !q.is_empty() {
                            navigator().push(Route::SearchResults { q });
                        }
                    },
                    on_home_click: move |_| {
                        navigator().push(Route::Home {});
                    },
                }
            },
            Outlet::<Route> {}
        }
    }
}
