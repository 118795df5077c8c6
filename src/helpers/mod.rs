//! Shared helper functions for URLs and date formatting

mod date;
mod url;

pub use date::*;
pub use url::*;
