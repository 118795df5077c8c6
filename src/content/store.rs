//! Blog store - reads the markdown folder tree under the blog root

use anyhow::Result;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{count_words, FolderInfo, FrontMatter, Listing, MarkdownRenderer, Post};
use crate::config::SiteConfig;

/// Filesystem-backed store over a tree of markdown posts.
///
/// Posts live in nested folders under the blog root. Every read hits the
/// filesystem; nothing is cached, content is authored by editing files.
pub struct BlogStore {
    root: PathBuf,
    renderer: MarkdownRenderer,
    default_title: String,
    default_category: String,
}

impl BlogStore {
    /// Create a store rooted at the blog directory
    pub fn new<P: Into<PathBuf>>(root: P, config: &SiteConfig) -> Self {
        Self {
            root: root.into(),
            renderer: MarkdownRenderer::from_config(&config.highlight),
            default_title: config.default_title.clone(),
            default_category: config.default_category.clone(),
        }
    }

    /// Blog root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the direct children of a tree node.
    ///
    /// Folders are sorted by name, posts by the numeric value of their file
    /// stem. A missing path yields an empty listing, not an error.
    pub fn items(&self, rel_path: &str) -> Result<Listing> {
        let rel_path = rel_path.trim_matches('/');
        let Some(dir) = self.resolve_dir(rel_path) else {
            return Ok(Listing::default());
        };
        if !dir.is_dir() {
            return Ok(Listing::default());
        }

        let mut listing = Listing::default();

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            let path = entry.path();

            if path.is_dir() {
                listing.folders.push(self.folder_info(&path, rel_path, &name));
            } else if is_markdown_file(&path) {
                match self.load_post(&path, rel_path) {
                    Ok(post) => listing.posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        listing.folders.sort_by(|a, b| a.name.cmp(&b.name));
        listing.posts.sort_by(|a, b| {
            let key = |p: &Post| (p.index().unwrap_or(u64::MAX), p.path.clone());
            key(a).cmp(&key(b))
        });

        Ok(listing)
    }

    /// Load a single post by its tree path (e.g. "rust/ownership/3").
    /// Returns `None` when the backing file does not exist.
    pub fn post(&self, tree_path: &str) -> Result<Option<Post>> {
        let rel_dir = match tree_path.rsplit_once('/') {
            Some((dir, _)) => dir,
            None => "",
        };
        let Some(dir) = self.resolve_dir(rel_dir) else {
            return Ok(None);
        };
        let file_name = tree_path.rsplit('/').next().unwrap_or(tree_path);
        if file_name.is_empty() {
            return Ok(None);
        }
        let file = dir.join(format!("{}.md", file_name));
        if !file.is_file() {
            return Ok(None);
        }

        self.load_post(&file, rel_dir).map(Some)
    }

    /// All posts in the tree, newest first
    pub fn all_posts(&self, limit: Option<usize>) -> Result<Vec<Post>> {
        self.all_posts_under("", limit)
    }

    /// All posts below a tree node, newest first
    pub fn all_posts_under(&self, rel_path: &str, limit: Option<usize>) -> Result<Vec<Post>> {
        let rel_path = rel_path.trim_matches('/');
        let Some(dir) = self.resolve_dir(rel_path) else {
            return Ok(Vec::new());
        };
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let parent = path.parent().unwrap_or(&dir);
            let rel_dir = self.tree_path_of(parent);
            match self.load_post(path, &rel_dir) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        // Newest first
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = limit {
            posts.truncate(limit);
        }

        Ok(posts)
    }

    /// Count direct child folders and posts of a directory
    pub fn direct_counts(dir: &Path) -> (usize, usize) {
        let Ok(entries) = fs::read_dir(dir) else {
            return (0, 0);
        };

        let mut folders = 0;
        let mut posts = 0;
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_dir() {
                folders += 1;
            } else if is_markdown_file(&path) {
                posts += 1;
            }
        }
        (folders, posts)
    }

    /// Count every folder in a subtree
    pub fn count_all_folders(dir: &Path) -> usize {
        WalkDir::new(dir)
            .min_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .count()
    }

    /// Count every post in a subtree
    pub fn count_all_posts(dir: &Path) -> usize {
        WalkDir::new(dir)
            .min_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_markdown_file(e.path()))
            .count()
    }

    /// Build folder metadata for a directory entry
    fn folder_info(&self, dir: &Path, rel_path: &str, name: &str) -> FolderInfo {
        let (folder_count, post_count) = Self::direct_counts(dir);

        FolderInfo {
            name: name.to_string(),
            path: join_tree_path(rel_path, name),
            folder_count,
            post_count,
            total_folder_count: Self::count_all_folders(dir),
            total_post_count: Self::count_all_posts(dir),
            date: modified_date(dir),
        }
    }

    /// Parse a single markdown file into a Post
    fn load_post(&self, path: &Path, rel_dir: &str) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let date = fm.parse_date().unwrap_or_else(|| modified_date(path));

        let title = fm.title.unwrap_or_else(|| self.default_title.clone());

        let category = fm.category.unwrap_or_else(|| {
            if rel_dir.is_empty() {
                self.default_category.clone()
            } else {
                rel_dir.to_string()
            }
        });

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");

        let word_count = count_words(body);
        let content_html = self.renderer.render(body)?;

        Ok(Post {
            title,
            date,
            category,
            tags: fm.tags,
            raw: body.to_string(),
            content: content_html,
            word_count,
            path: join_tree_path(rel_dir, stem),
            source: path.to_path_buf(),
        })
    }

    /// Resolve a tree path to a directory under the blog root.
    /// Rejects paths that step outside the tree.
    fn resolve_dir(&self, rel_path: &str) -> Option<PathBuf> {
        let mut dir = self.root.clone();
        for segment in rel_path.split('/').filter(|s| !s.is_empty()) {
            if segment == ".." || segment == "." {
                return None;
            }
            dir.push(segment);
        }
        Some(dir)
    }

    /// Tree path of a directory below the blog root
    fn tree_path_of(&self, dir: &Path) -> String {
        dir.strip_prefix(&self.root)
            .unwrap_or(dir)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Join a tree path and a child name with '/'
fn join_tree_path(rel_path: &str, name: &str) -> String {
    if rel_path.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", rel_path, name)
    }
}

/// Filesystem modification time as a local DateTime, falling back to now
fn modified_date(path: &Path) -> DateTime<Local> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map(DateTime::<Local>::from)
        .unwrap_or_else(|_| Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, title: &str, date: &str) {
        let body = format!(
            "---\ntitle: {}\ndate: {}\ntags:\n  - test\n---\n\nSome body text here.\n",
            title, date
        );
        fs::write(dir.join(name), body).unwrap();
    }

    /// Builds:
    ///   1.md
    ///   rust/{1.md, 2.md, 10.md}
    ///   rust/ownership/1.md
    ///   notes/1.md            (no front-matter)
    fn fixture() -> (TempDir, BlogStore) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();

        write_post(root, "1.md", "Welcome", "2024-01-01");

        let rust = root.join("rust");
        fs::create_dir(&rust).unwrap();
        write_post(&rust, "1.md", "Ownership Intro", "2024-02-01");
        write_post(&rust, "2.md", "Borrowing", "2024-03-01");
        write_post(&rust, "10.md", "Lifetimes", "2024-04-01");

        let ownership = rust.join("ownership");
        fs::create_dir(&ownership).unwrap();
        write_post(&ownership, "1.md", "Move Semantics", "2024-05-01");

        let notes = root.join("notes");
        fs::create_dir(&notes).unwrap();
        fs::write(notes.join("1.md"), "Plain note, no front-matter.\n").unwrap();

        let store = BlogStore::new(root, &SiteConfig::default());
        (tmp, store)
    }

    #[test]
    fn test_items_root() {
        let (_tmp, store) = fixture();
        let listing = store.items("").unwrap();

        let names: Vec<_> = listing.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["notes", "rust"]);

        assert_eq!(listing.posts.len(), 1);
        assert_eq!(listing.posts[0].title, "Welcome");
        assert_eq!(listing.posts[0].path, "1");
    }

    #[test]
    fn test_items_missing_path_is_empty() {
        let (_tmp, store) = fixture();
        let listing = store.items("does/not/exist").unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn test_items_rejects_parent_traversal() {
        let (_tmp, store) = fixture();
        let listing = store.items("../rust").unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn test_posts_sorted_by_numeric_index() {
        let (_tmp, store) = fixture();
        let listing = store.items("rust").unwrap();

        let paths: Vec<_> = listing.posts.iter().map(|p| p.path.as_str()).collect();
        // 10 sorts after 2, not between 1 and 2
        assert_eq!(paths, vec!["rust/1", "rust/2", "rust/10"]);
    }

    #[test]
    fn test_folder_counts() {
        let (_tmp, store) = fixture();
        let listing = store.items("").unwrap();

        let rust = listing.folders.iter().find(|f| f.name == "rust").unwrap();
        assert_eq!(rust.folder_count, 1);
        assert_eq!(rust.post_count, 3);
        assert_eq!(rust.total_folder_count, 1);
        assert_eq!(rust.total_post_count, 4);
        assert_eq!(rust.path, "rust");

        let notes = listing.folders.iter().find(|f| f.name == "notes").unwrap();
        assert_eq!(notes.folder_count, 0);
        assert_eq!(notes.post_count, 1);
        assert_eq!(notes.total_folder_count, 0);
        assert_eq!(notes.total_post_count, 1);
    }

    #[test]
    fn test_post_lookup() {
        let (_tmp, store) = fixture();

        let post = store.post("rust/ownership/1").unwrap().unwrap();
        assert_eq!(post.title, "Move Semantics");
        assert_eq!(post.category, "rust/ownership");
        assert_eq!(post.path, "rust/ownership/1");
        assert!(post.content.contains("<p>"));
        assert_eq!(post.word_count, 4);

        assert!(store.post("rust/ownership/99").unwrap().is_none());
        assert!(store.post("").unwrap().is_none());
    }

    #[test]
    fn test_post_defaults_without_frontmatter() {
        let (_tmp, store) = fixture();

        let post = store.post("notes/1").unwrap().unwrap();
        assert_eq!(post.title, "Untitled");
        assert_eq!(post.category, "notes");
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_root_post_default_category() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("1.md"), "No front-matter.\n").unwrap();
        let store = BlogStore::new(tmp.path(), &SiteConfig::default());

        let post = store.post("1").unwrap().unwrap();
        assert_eq!(post.category, "Uncategorized");
    }

    #[test]
    fn test_all_posts_newest_first() {
        let (_tmp, store) = fixture();
        let posts = store.all_posts(None).unwrap();

        assert_eq!(posts.len(), 6);
        // notes/1 has no front-matter date, so it carries its mtime (now)
        // and sorts first; the dated posts follow newest-first
        assert_eq!(posts[0].title, "Untitled");
        assert_eq!(posts[1].title, "Move Semantics");
        for pair in posts.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_all_posts_limit() {
        let (_tmp, store) = fixture();
        let posts = store.all_posts(Some(2)).unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn test_all_posts_under_subtree() {
        let (_tmp, store) = fixture();
        let posts = store.all_posts_under("rust", None).unwrap();

        assert_eq!(posts.len(), 4);
        assert!(posts.iter().all(|p| p.path.starts_with("rust/")));
    }

    #[test]
    fn test_malformed_post_is_skipped() {
        let (tmp, store) = fixture();
        // Invalid UTF-8 makes the read fail; the rest of the folder survives
        fs::write(tmp.path().join("rust").join("3.md"), [0xff, 0xfe, 0x00]).unwrap();

        let listing = store.items("rust").unwrap();
        assert_eq!(listing.posts.len(), 3);
    }

    #[test]
    fn test_word_count_from_raw_body() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("1.md"),
            "---\ntitle: T\n---\n\n# Heading\n\none two three\n",
        )
        .unwrap();
        let store = BlogStore::new(tmp.path(), &SiteConfig::default());

        let post = store.post("1").unwrap().unwrap();
        // counts markdown tokens, "# Heading" is two
        assert_eq!(post.word_count, 5);
    }
}
