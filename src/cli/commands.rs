//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogcore")]
#[command(about = "Render and search blog articles", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new blog directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Render article content to HTML
    Render {
        /// Content file (reads stdin if omitted or "-")
        file: Option<PathBuf>,

        /// Only print the detected dialect (markup or plain)
        #[arg(long)]
        dialect: bool,
    },

    /// List published articles
    List {
        /// Case-insensitive search in title, excerpt and content
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only articles with any of these tags (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Only articles by this author
        #[arg(long)]
        author: Option<String>,

        /// Only featured articles
        #[arg(long)]
        featured: bool,

        /// Sort field (published, updated, title)
        #[arg(long, default_value = "published")]
        sort: String,

        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,

        /// Maximum number of articles to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Number of articles to skip
        #[arg(long, default_value_t = 0, conflicts_with = "page")]
        offset: usize,

        /// Page number, sized by ui.posts_per_page
        #[arg(long, conflicts_with = "limit")]
        page: Option<usize>,
    },

    /// List all tags used by published articles
    Tags,

    /// Render a single published article
    Show {
        /// Article slug
        slug: String,
    },

    /// List featured articles
    Featured {
        /// Maximum number of articles to show
        #[arg(short = 'n', long, default_value_t = 3)]
        limit: usize,
    },

    /// Show article and tag counts
    Stats,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
