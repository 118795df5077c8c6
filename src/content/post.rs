//! Post and folder models

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A blog post, parsed fresh from a markdown file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Category (front-matter, or the folder the post lives in)
    pub category: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Raw markdown body (after front-matter)
    pub raw: String,

    /// Rendered HTML content
    pub content: String,

    /// Whitespace-separated word count of the raw body
    pub word_count: usize,

    /// Tree path relative to the blog root, without extension
    /// (e.g. "rust/ownership/3")
    pub path: String,

    /// Full source file path
    pub source: PathBuf,
}

impl Post {
    /// Numeric index derived from the file stem, if the stem is a number.
    /// Posts inside a folder are named by index ("1.md", "2.md", ...).
    pub fn index(&self) -> Option<u64> {
        self.path.rsplit('/').next().and_then(|s| s.parse().ok())
    }
}

/// A folder in the blog tree. Derived on every read, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderInfo {
    /// Directory name
    pub name: String,

    /// Tree path relative to the blog root
    pub path: String,

    /// Direct child folders
    pub folder_count: usize,

    /// Direct child posts
    pub post_count: usize,

    /// Folders in the whole subtree
    pub total_folder_count: usize,

    /// Posts in the whole subtree
    pub total_post_count: usize,

    /// Filesystem modification time of the directory
    pub date: DateTime<Local>,
}

/// Direct children of a blog tree node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    pub folders: Vec<FolderInfo>,
    pub posts: Vec<Post>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.posts.is_empty()
    }
}
