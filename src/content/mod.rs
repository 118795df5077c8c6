//! Content handling: front-matter parsing, markdown rendering, blog tree store

mod frontmatter;
mod markdown;
mod post;
pub mod store;

pub use frontmatter::FrontMatter;
pub use markdown::{count_words, MarkdownRenderer};
pub use post::{FolderInfo, Listing, Post};
pub use store::BlogStore;
