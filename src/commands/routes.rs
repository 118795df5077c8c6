//! Enumerate prerenderable paths

use anyhow::Result;

use crate::helpers::{full_url_for, url_for};
use crate::routes;
use crate::Site;

/// Print every static route of the site.
/// With `full`, prints absolute URLs (sitemap style) instead of paths.
pub fn run(site: &Site, full: bool) -> Result<()> {
    let config = &site.config;
    let emit = |path: &str| {
        if full {
            println!("{}", full_url_for(config, path));
        } else {
            println!("{}", url_for(config, path));
        }
    };

    emit("blog");
    for path in routes::blog::entries(&site.store())? {
        emit(&format!("blog/{}", path));
    }

    emit("projects");
    for title in routes::projects::entries(&site.gallery())? {
        emit(&format!("projects/{}", title));
    }

    Ok(())
}
