//! Game detail view components

mod game_banner;
mod game_info;
mod rating_histogram;
mod rating_summary;
mod review_list;
mod view;

pub use game_banner::GameBanner;
pub use game_info::GameInfo;
pub use rating_histogram::RatingHistogram;
pub use rating_summary::RatingSummaryView;
pub use review_list::ReviewList;
pub use view::{GameDetailPageView, GameDetailView};
