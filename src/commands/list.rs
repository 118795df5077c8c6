//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = site.store().all_posts(None)?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}] {} words",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.path,
                    post.word_count
                );
            }
        }
        "folder" | "folders" => {
            let store = site.store();
            let mut stack = vec![String::new()];
            while let Some(path) = stack.pop() {
                let listing = store.items(&path)?;
                for folder in listing.folders {
                    println!(
                        "  {} ({} folders, {} posts)",
                        folder.path, folder.total_folder_count, folder.total_post_count
                    );
                    stack.push(folder.path);
                }
            }
        }
        "project" | "projects" => {
            let projects = site.gallery().load_all()?;
            println!("Projects ({}):", projects.len());
            for project in projects {
                println!(
                    "  {} - {} [{}]",
                    project.id,
                    project.info.title,
                    project.info.tags.join(", ")
                );
            }
        }
        "tag" | "tags" => {
            let posts = site.store().all_posts(None)?;
            let mut tags: HashMap<String, usize> = HashMap::new();
            for post in &posts {
                for tag in &post.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, folder, project, tag",
                content_type
            );
        }
    }

    Ok(())
}
