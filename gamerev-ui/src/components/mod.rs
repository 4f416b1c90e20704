//! Shared UI components

pub mod app_layout;
pub mod game_detail;
pub mod helpers;
pub mod icons;
pub mod nav_bar;
pub mod search_results;
pub mod utils;

pub use app_layout::AppLayoutView;
pub use game_detail::{
    GameBanner, GameDetailPageView, GameDetailView, GameInfo, RatingHistogram, RatingSummaryView,
    ReviewList,
};
pub use helpers::{ErrorDisplay, LoadingSpinner, PageContainer};
pub use icons::{ImageIcon, SearchIcon};
pub use nav_bar::NavBarView;
pub use search_results::{SearchResultTile, SearchResultsPageView, SearchResultsView};
pub use utils::{format_release_date, parse_release_date};
