//! Histogram of review counts per star value

use gamerev_common::RatingBucket;
use dioxus::prelude::*;

/// One bar per star value that has reviews. Heights are relative to the
/// busiest star value; an empty bucket list renders an empty container.
#[component]
pub fn RatingHistogram(buckets: Vec<RatingBucket>) -> Element {
    rsx! {
        div {
            class: "rating-bar-container flex items-end gap-2 h-40",
            "data-testid": "rating-histogram",
            for bucket in buckets {
                div {
                    key: "{bucket.stars}",
                    class: "rating-bar flex-1 bg-blue-500 rounded-t relative",
                    style: "height: {bucket.height_percent}%",
                    span { class: "rating-text absolute -top-5 left-0 right-0 text-center text-xs text-gray-300",
                        "{bucket.stars} Star ({bucket.count})"
                    }
                }
            }
        }
    }
}
