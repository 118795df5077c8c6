//! CLI commands

pub mod list;
pub mod page;
pub mod routes;
pub mod show;
