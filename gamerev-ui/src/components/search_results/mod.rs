//! Search results view components

mod result_tile;
mod view;

pub use result_tile::SearchResultTile;
pub use view::{SearchResultsPageView, SearchResultsView};
