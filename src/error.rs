//! Error types for blogcore

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the blogcore application
///
/// The content renderer and the collection filter are total functions and never
/// produce one of these; errors only arise at the configuration, repository and
/// CLI layers.
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Not a blog directory: {0}")]
    NotBlogDirectory(PathBuf),

    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("Invalid article file {}: {message}", path.display())]
    InvalidArticle { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BlogError::NotBlogDirectory(_) => 2,
            BlogError::ArticleNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BlogError::NotBlogDirectory(path) => {
                format!(
                    "Not a blog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'blogcore init' in this directory to create a new blog\n\
                    • Navigate to an existing blog directory\n\
                    • Set BLOGCORE_ROOT environment variable to your blog path",
                    path.display()
                )
            }
            BlogError::ArticleNotFound(slug) => {
                format!(
                    "No published article with slug: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'blogcore list' to see available articles\n\
                    • Drafts are hidden; check the article's status field\n\
                    • Slugs are matched exactly (e.g., 'hello-world')",
                    slug
                )
            }
            BlogError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: blogcore config ui.posts_per_page 20",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BlogError
pub type Result<T> = std::result::Result<T, BlogError>;
