//! gamerev-ui - Display types and pure view components for the game review app
//!
//! Every component here is props-based: data comes in, callbacks go out.
//! Fetching and routing live in gamerev-web.

pub mod components;
pub mod display_types;

pub use components::*;
pub use display_types::*;
