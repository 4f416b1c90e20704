//! App layout view component
//!
//! Provides the overall page structure with slots for the nav bar and main content.

use dioxus::prelude::*;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    /// Optional nav bar at the top
    #[props(default)]
    nav_bar: Option<Element>,
) -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col bg-gray-900 text-white",
            if let Some(nb) = nav_bar {
                {nb}
            }
            main { class: "flex-1 overflow-y-auto", {children} }
        }
    }
}
