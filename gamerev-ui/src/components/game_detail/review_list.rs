//! Review list component

use crate::display_types::Review;
use gamerev_common::star_glyphs;
use dioxus::prelude::*;

/// Reviews in the order given, or a placeholder when there are none
#[component]
pub fn ReviewList(reviews: Vec<Review>) -> Element {
    if reviews.is_empty() {
        return rsx! {
            div { class: "game-reviews text-gray-400 py-6", "No reviews yet." }
        };
    }

    rsx! {
        div { class: "game-reviews flex flex-col gap-4",
            for (index , review) in reviews.into_iter().enumerate() {
                ReviewItem { key: "{index}", review }
            }
        }
    }
}

#[component]
fn ReviewItem(review: Review) -> Element {
    let stars = star_glyphs(review.star_point);

    rsx! {
        div {
            class: "review-item bg-gray-800 rounded-lg p-4",
            "data-testid": "review-item",
            h3 { class: "font-bold text-white mb-1", "{review.username}" }
            p { class: "text-gray-300 mb-2", "{review.content}" }
            p { class: "text-yellow-400", "Rating: {stars}" }
        }
    }
}
