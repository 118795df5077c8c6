//! Dump a route's view model as JSON

use anyhow::Result;

use crate::routes;
use crate::Site;

/// Print the blog index, or a blog node when a path is given
pub fn blog(site: &Site, path: Option<&str>) -> Result<()> {
    let store = site.store();
    match path {
        Some(path) => {
            let page = routes::blog::node(&store, &site.config, path)?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        None => {
            let page = routes::blog::index(&store, &site.config)?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
    }
    Ok(())
}

/// Print the projects index, or one project when a title is given
pub fn projects(site: &Site, title: Option<&str>) -> Result<()> {
    let gallery = site.gallery();
    match title {
        Some(title) => {
            let page = routes::projects::detail(&gallery, title)?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        None => {
            let page = routes::projects::index(&gallery)?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
    }
    Ok(())
}
