//! Project route view models

use anyhow::Result;
use serde::Serialize;

use crate::projects::{Project, ProjectGallery};

/// View model for the projects index page
#[derive(Debug, Clone, Serialize)]
pub struct ProjectsPage {
    pub projects: Vec<Project>,
}

/// View model for a single project page
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPage {
    pub project: Project,
}

/// Build the projects index view model
pub fn index(gallery: &ProjectGallery) -> Result<ProjectsPage> {
    Ok(ProjectsPage {
        projects: gallery.load_all()?,
    })
}

/// Build the detail view model for the project with the given title
pub fn detail(gallery: &ProjectGallery, title: &str) -> Result<ProjectPage> {
    let Some(project) = gallery.find_by_title(title)? else {
        anyhow::bail!("Project not found: {}", title);
    };
    Ok(ProjectPage { project })
}

/// Every project title, for prerendering the detail route
pub fn entries(gallery: &ProjectGallery) -> Result<Vec<String>> {
    gallery.titles()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, ProjectGallery) {
        let tmp = TempDir::new().unwrap();
        for (id, title) in [("001-one", "One"), ("002-two", "Two")] {
            let dir = tmp.path().join(id);
            fs::create_dir(&dir).unwrap();
            fs::write(
                dir.join("info.json"),
                format!(
                    r#"{{"title": "{}", "tags": [], "startDate": "2024-01", "endDate": "2024-02"}}"#,
                    title
                ),
            )
            .unwrap();
        }
        let gallery = ProjectGallery::new(tmp.path(), &SiteConfig::default());
        (tmp, gallery)
    }

    #[test]
    fn test_index() {
        let (_tmp, gallery) = fixture();
        let page = index(&gallery).unwrap();
        assert_eq!(page.projects.len(), 2);
    }

    #[test]
    fn test_detail() {
        let (_tmp, gallery) = fixture();
        let page = detail(&gallery, "Two").unwrap();
        assert_eq!(page.project.id, "002-two");

        assert!(detail(&gallery, "Three").is_err());
    }

    #[test]
    fn test_entries() {
        let (_tmp, gallery) = fixture();
        assert_eq!(entries(&gallery).unwrap(), vec!["One", "Two"]);
    }
}
