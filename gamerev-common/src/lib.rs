//! gamerev-common - Pure view logic shared by the UI and web crates
//!
//! No I/O and no framework types: rating aggregation, star glyphs and the
//! loading/error/loaded state container.

mod rating;
mod view_state;

pub use rating::{star_glyphs, RatingBucket, RatingSummary, MAX_STARS};
pub use view_state::{FetchTicket, FinishOutcome, ViewLoader, ViewState};
