//! saenslog: the content layer of a markdown blog and project portfolio
//!
//! Posts live as YAML-frontmatter markdown files in a nested folder tree,
//! projects as numeric-prefixed directories holding an info.json and image
//! assets. This crate reads both off disk on every request and shapes them
//! into the view models the site's pages consume.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod projects;
pub mod routes;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::BlogStore;
use projects::ProjectGallery;

/// The site: configuration plus resolved content directories
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Blog tree root
    pub blog_dir: PathBuf,
    /// Projects root
    pub projects_dir: PathBuf,
}

impl Site {
    /// Create a site from a base directory, loading _config.yml when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let blog_dir = base_dir.join(&config.blog_dir);
        let projects_dir = base_dir.join(&config.projects_dir);

        Ok(Self {
            config,
            base_dir,
            blog_dir,
            projects_dir,
        })
    }

    /// Open the blog store
    pub fn store(&self) -> BlogStore {
        BlogStore::new(&self.blog_dir, &self.config)
    }

    /// Open the project gallery
    pub fn gallery(&self) -> ProjectGallery {
        ProjectGallery::new(&self.projects_dir, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_site_without_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.blog_dir, tmp.path().join("content/blog"));
        assert_eq!(site.projects_dir, tmp.path().join("content/projects"));
    }

    #[test]
    fn test_site_reads_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "title: Mine\nblog_dir: posts\n",
        )
        .unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.config.title, "Mine");
        assert_eq!(site.blog_dir, tmp.path().join("posts"));
    }
}
