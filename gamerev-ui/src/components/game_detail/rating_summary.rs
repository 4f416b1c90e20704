//! Average rating line plus histogram

use super::rating_histogram::RatingHistogram;
use gamerev_common::{star_glyphs, RatingSummary};
use dioxus::prelude::*;

#[component]
pub fn RatingSummaryView(summary: RatingSummary) -> Element {
    let average = summary.average_display();
    let stars = star_glyphs(i32::from(summary.average_stars()));

    rsx! {
        div { class: "game-rating w-64 shrink-0",
            div { class: "total-rating text-lg text-white mb-6",
                "Average rating: {average} "
                span { class: "text-yellow-400", "{stars}" }
            }
            RatingHistogram { buckets: summary.buckets() }
        }
    }
}
