//! Blog route view models
//!
//! Shapes store output into the data the blog pages consume: the index
//! (root folders plus every post), and a node page which is either a
//! folder listing or a single post depending on the final path segment.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{BlogStore, FolderInfo, Post};
use crate::helpers::{format_date, url_for};

lazy_static! {
    /// A path segment that is all digits addresses a post, not a folder
    static ref POST_SEGMENT: Regex = Regex::new(r"^\d+$").unwrap();
}

/// One breadcrumb link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    pub path: String,
}

/// Folder entry as shown in listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderSummary {
    pub name: String,
    pub path: String,
    pub folder_count: usize,
    pub post_count: usize,
    pub total_folder_count: usize,
    pub total_post_count: usize,
    pub date: String,
}

/// Post entry as shown in listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub title: String,
    pub path: String,
    pub category: String,
    pub date: String,
    pub word_count: usize,
}

/// View model for the blog index page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPage {
    pub folders: Vec<FolderSummary>,
    pub all_posts: Vec<PostSummary>,
}

/// View model for a folder (category) page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderPage {
    pub path: String,
    pub segments: Vec<String>,
    pub breadcrumb: Vec<Crumb>,
    pub is_post: bool,
    pub folders: Vec<FolderSummary>,
    pub posts: Vec<PostSummary>,
    pub all_posts: Vec<PostSummary>,
}

/// View model for a single post page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    pub path: String,
    pub segments: Vec<String>,
    pub breadcrumb: Vec<Crumb>,
    pub is_post: bool,
    pub title: String,
    pub date: String,
    pub category: String,
    pub content: String,
    pub word_count: usize,
    pub tags: Vec<String>,
}

/// A blog node is either a folder listing or a single post
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BlogPage {
    Post(PostPage),
    Folder(FolderPage),
}

/// Whether a trailing path segment addresses a post
pub fn is_post_segment(segment: &str) -> bool {
    POST_SEGMENT.is_match(segment)
}

/// Build the blog index view model
pub fn index(store: &BlogStore, config: &SiteConfig) -> Result<IndexPage> {
    let listing = store.items("")?;
    let all_posts = store.all_posts(None)?;

    Ok(IndexPage {
        folders: listing
            .folders
            .iter()
            .map(|f| folder_summary(f, config))
            .collect(),
        all_posts: all_posts.iter().map(|p| post_summary(p, config)).collect(),
    })
}

/// Build the view model for a blog node at `path`
pub fn node(store: &BlogStore, config: &SiteConfig, path: &str) -> Result<BlogPage> {
    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    let path = segments.join("/");

    let is_post = segments
        .last()
        .map(|s| is_post_segment(s))
        .unwrap_or(false);

    if is_post {
        let Some(post) = store.post(&path)? else {
            anyhow::bail!("Post not found: {}", path);
        };

        // The numeric post index does not appear in the breadcrumb
        let crumbs = breadcrumb(config, &segments[..segments.len() - 1]);

        Ok(BlogPage::Post(PostPage {
            path,
            segments,
            breadcrumb: crumbs,
            is_post: true,
            title: post.title,
            date: format_date(&post.date, &config.date_format),
            category: post.category,
            content: post.content,
            word_count: post.word_count,
            tags: post.tags,
        }))
    } else {
        let listing = store.items(&path)?;
        let all_posts = store.all_posts_under(&path, None)?;

        Ok(BlogPage::Folder(FolderPage {
            breadcrumb: breadcrumb(config, &segments),
            is_post: false,
            folders: listing
                .folders
                .iter()
                .map(|f| folder_summary(f, config))
                .collect(),
            posts: listing
                .posts
                .iter()
                .map(|p| post_summary(p, config))
                .collect(),
            all_posts: all_posts.iter().map(|p| post_summary(p, config)).collect(),
            path,
            segments,
        }))
    }
}

/// Breadcrumb for a node: a fixed root crumb, then one per segment
pub fn breadcrumb(config: &SiteConfig, segments: &[String]) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: "Blog".to_string(),
        path: url_for(config, "blog"),
    }];

    for (i, segment) in segments.iter().enumerate() {
        let cumulative = segments[..=i].join("/");
        crumbs.push(Crumb {
            label: segment.clone(),
            path: url_for(config, &format!("blog/{}", cumulative)),
        });
    }

    crumbs
}

/// Every prerenderable blog tree path: non-root folders and posts,
/// depth-first, folders before their own posts
pub fn entries(store: &BlogStore) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    collect_paths(store, "", &mut paths)?;
    Ok(paths)
}

fn collect_paths(store: &BlogStore, current: &str, paths: &mut Vec<String>) -> Result<()> {
    if !current.is_empty() {
        paths.push(current.to_string());
    }

    let listing = store.items(current)?;

    for folder in &listing.folders {
        collect_paths(store, &folder.path, paths)?;
    }

    for post in &listing.posts {
        paths.push(post.path.clone());
    }

    Ok(())
}

fn folder_summary(folder: &FolderInfo, config: &SiteConfig) -> FolderSummary {
    FolderSummary {
        name: folder.name.clone(),
        path: folder.path.clone(),
        folder_count: folder.folder_count,
        post_count: folder.post_count,
        total_folder_count: folder.total_folder_count,
        total_post_count: folder.total_post_count,
        date: format_date(&folder.date, &config.date_format),
    }
}

fn post_summary(post: &Post, config: &SiteConfig) -> PostSummary {
    PostSummary {
        title: post.title.clone(),
        path: post.path.clone(),
        category: post.category.clone(),
        date: format_date(&post.date, &config.date_format),
        word_count: post.word_count,
    }
}
