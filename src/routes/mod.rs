//! Page view models for the site's routes

pub mod blog;
pub mod projects;
