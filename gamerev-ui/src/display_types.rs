//! Display types for UI components
//!
//! These types hold only the fields the views need. They are built from the
//! backend's wire format by the web crate, or from fixtures in tests.

use gamerev_common::RatingSummary;

/// Full game info for the detail view
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub thumb_url: Option<String>,
    /// Release date as sent by the backend (ISO 8601)
    pub release_date: String,
    pub publisher: String,
    pub description: String,
    /// Reviews in backend order
    pub reviews: Vec<Review>,
}

impl Game {
    pub fn rating_summary(&self) -> RatingSummary {
        RatingSummary::from_star_points(self.reviews.iter().map(|r| r.star_point))
    }
}

/// A single user review
#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    pub username: String,
    pub content: String,
    /// Expected 1-5
    pub star_point: i32,
}

/// Tile info for the search results grid
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub thumb_url: Option<String>,
}
