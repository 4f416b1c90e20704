mod game_detail;
mod home;
mod layout;
mod search_results;

pub use game_detail::GameDetail;
pub use home::Home;
pub use layout::AppLayout;
pub use search_results::SearchResults;
