//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_article, format_article_list, format_articles, format_config, format_stats,
    format_tag_list,
};
