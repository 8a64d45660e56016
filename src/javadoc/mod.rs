//! Javadoc side of a build: find the index pages, then read symbols out of them.

pub mod extract;
pub mod kinds;
pub mod locate;

pub use extract::{find_search_index_values, DuplicatePolicy};
pub use locate::find_index_files;
