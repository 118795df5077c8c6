//! CLI entry point for saenslog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "saenslog")]
#[command(version)]
#[command(about = "Content layer for a markdown blog and project portfolio", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    List {
        /// Type of content to list (post, folder, project, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show a single post by its tree path
    Show {
        /// Tree path of the post, e.g. "rust/ownership/1"
        path: String,
    },

    /// Dump a page view model as JSON
    Page {
        #[command(subcommand)]
        target: PageTarget,
    },

    /// Print every prerenderable route
    Routes {
        /// Print absolute URLs instead of site-relative paths
        #[arg(long)]
        full: bool,
    },
}

#[derive(Subcommand)]
enum PageTarget {
    /// Blog index, or a blog node when a path is given
    Blog {
        /// Tree path of the node (folder or post)
        path: Option<String>,
    },

    /// Projects index, or one project when a title is given
    Projects {
        /// Exact project title
        title: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "saenslog=debug,info"
    } else {
        "saenslog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = saenslog::Site::new(&base_dir)?;

    match cli.command {
        Commands::List { r#type } => {
            saenslog::commands::list::run(&site, &r#type)?;
        }

        Commands::Show { path } => {
            saenslog::commands::show::run(&site, &path)?;
        }

        Commands::Page { target } => match target {
            PageTarget::Blog { path } => {
                saenslog::commands::page::blog(&site, path.as_deref())?;
            }
            PageTarget::Projects { title } => {
                saenslog::commands::page::projects(&site, title.as_deref())?;
            }
        },

        Commands::Routes { full } => {
            saenslog::commands::routes::run(&site, full)?;
        }
    }

    Ok(())
}
