//! Project gallery - reads per-project metadata and globs asset files
//!
//! A project is a directory named `NNN-name` under the projects root,
//! holding an `info.json`, an optional `logo.png` and zero or more
//! `screenshots/*.png`.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::helpers::url_for;

lazy_static! {
    /// Project directories carry a three-digit ordering prefix
    static ref PROJECT_ID: Regex = Regex::new(r"^\d{3}-.+$").unwrap();
}

/// Metadata read from a project's info.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

/// A project with its resolved asset URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Numeric-prefixed directory name, e.g. "003-saenslog"
    pub id: String,
    #[serde(flatten)]
    pub info: ProjectInfo,
    /// Site-relative logo URL, if the project ships a logo.png
    pub logo_path: Option<String>,
    /// Site-relative screenshot URLs, sorted
    pub screenshot_paths: Vec<String>,
}

/// Loads projects from the projects root directory
pub struct ProjectGallery {
    root: PathBuf,
    config: SiteConfig,
}

impl ProjectGallery {
    /// Create a gallery rooted at the projects directory
    pub fn new<P: Into<PathBuf>>(root: P, config: &SiteConfig) -> Self {
        Self {
            root: root.into(),
            config: config.clone(),
        }
    }

    /// Load every project, sorted by id
    pub fn load_all(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();

        if !self.root.is_dir() {
            return Ok(projects);
        }

        let pattern = self.root.join("*").join("info.json");
        for entry in glob::glob(&pattern.to_string_lossy())? {
            let info_path = match entry {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!("Unreadable project entry: {}", e);
                    continue;
                }
            };

            let Some(dir) = info_path.parent() else {
                continue;
            };
            let id = dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if !PROJECT_ID.is_match(&id) {
                continue;
            }

            match self.load_project(dir, &id) {
                Ok(project) => projects.push(project),
                Err(e) => {
                    tracing::warn!("Failed to load project {:?}: {}", dir, e);
                }
            }
        }

        projects.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(projects)
    }

    /// Find a project by its exact title
    pub fn find_by_title(&self, title: &str) -> Result<Option<Project>> {
        Ok(self.load_all()?.into_iter().find(|p| p.info.title == title))
    }

    /// Titles of every project, in id order
    pub fn titles(&self) -> Result<Vec<String>> {
        Ok(self.load_all()?.into_iter().map(|p| p.info.title).collect())
    }

    /// Read a single project directory
    fn load_project(&self, dir: &Path, id: &str) -> Result<Project> {
        let raw = fs::read_to_string(dir.join("info.json"))?;
        let info: ProjectInfo = serde_json::from_str(&raw)?;

        let logo_path = if dir.join("logo.png").is_file() {
            Some(self.asset_url(id, "logo.png"))
        } else {
            None
        };

        let mut screenshot_paths = Vec::new();
        let pattern = dir.join("screenshots").join("*.png");
        for entry in glob::glob(&pattern.to_string_lossy())?.filter_map(|e| e.ok()) {
            if let Some(name) = entry.file_name().and_then(|n| n.to_str()) {
                screenshot_paths.push(self.asset_url(id, &format!("screenshots/{}", name)));
            }
        }
        screenshot_paths.sort();

        Ok(Project {
            id: id.to_string(),
            info,
            logo_path,
            screenshot_paths,
        })
    }

    /// Site-relative URL of an asset inside a project directory
    fn asset_url(&self, id: &str, rest: &str) -> String {
        url_for(&self.config, &format!("projects/{}/{}", id, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_project(root: &Path, id: &str, title: &str, with_logo: bool, screenshots: &[&str]) {
        let dir = root.join(id);
        fs::create_dir_all(&dir).unwrap();
        let info = format!(
            r#"{{"title": "{}", "tags": ["web"], "startDate": "2024-01", "endDate": "2024-06"}}"#,
            title
        );
        fs::write(dir.join("info.json"), info).unwrap();
        if with_logo {
            fs::write(dir.join("logo.png"), b"png").unwrap();
        }
        if !screenshots.is_empty() {
            let shots = dir.join("screenshots");
            fs::create_dir(&shots).unwrap();
            for name in screenshots {
                fs::write(shots.join(name), b"png").unwrap();
            }
        }
    }

    fn gallery(root: &Path) -> ProjectGallery {
        ProjectGallery::new(root, &SiteConfig::default())
    }

    #[test]
    fn test_load_all_sorted_by_id() {
        let tmp = TempDir::new().unwrap();
        write_project(tmp.path(), "002-second", "Second", true, &[]);
        write_project(tmp.path(), "001-first", "First", true, &[]);

        let projects = gallery(tmp.path()).load_all().unwrap();
        let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["001-first", "002-second"]);
    }

    #[test]
    fn test_ignores_unprefixed_dirs() {
        let tmp = TempDir::new().unwrap();
        write_project(tmp.path(), "001-real", "Real", false, &[]);
        write_project(tmp.path(), "drafts", "Draft", false, &[]);

        let projects = gallery(tmp.path()).load_all().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].info.title, "Real");
    }

    #[test]
    fn test_asset_paths() {
        let tmp = TempDir::new().unwrap();
        write_project(tmp.path(), "001-app", "App", true, &["b.png", "a.png"]);

        let projects = gallery(tmp.path()).load_all().unwrap();
        let p = &projects[0];
        assert_eq!(p.logo_path.as_deref(), Some("/projects/001-app/logo.png"));
        assert_eq!(
            p.screenshot_paths,
            vec![
                "/projects/001-app/screenshots/a.png",
                "/projects/001-app/screenshots/b.png"
            ]
        );
    }

    #[test]
    fn test_missing_logo_is_none() {
        let tmp = TempDir::new().unwrap();
        write_project(tmp.path(), "001-bare", "Bare", false, &[]);

        let projects = gallery(tmp.path()).load_all().unwrap();
        assert!(projects[0].logo_path.is_none());
        assert!(projects[0].screenshot_paths.is_empty());
    }

    #[test]
    fn test_find_by_title() {
        let tmp = TempDir::new().unwrap();
        write_project(tmp.path(), "001-a", "Alpha", false, &[]);
        write_project(tmp.path(), "002-b", "Beta", false, &[]);

        let g = gallery(tmp.path());
        assert_eq!(g.find_by_title("Beta").unwrap().unwrap().id, "002-b");
        assert!(g.find_by_title("Gamma").unwrap().is_none());
    }

    #[test]
    fn test_missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let g = gallery(&tmp.path().join("nope"));
        assert!(g.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_broken_info_json_is_skipped() {
        let tmp = TempDir::new().unwrap();
        write_project(tmp.path(), "001-good", "Good", false, &[]);
        let bad = tmp.path().join("002-bad");
        fs::create_dir(&bad).unwrap();
        fs::write(bad.join("info.json"), "{not json").unwrap();

        let projects = gallery(tmp.path()).load_all().unwrap();
        assert_eq!(projects.len(), 1);
    }
}
