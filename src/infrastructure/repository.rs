//! File system repository
//!
//! A blog directory holds `.blogcore/config.toml` and a posts directory of
//! `*.toml` article files, one article per file. The repository only reads
//! articles; authoring happens elsewhere.

use crate::domain::Article;
use crate::error::{BlogError, Result};
use crate::infrastructure::config::{Config, META_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment variable overriding blog root discovery
pub const ROOT_ENV: &str = "BLOGCORE_ROOT";

/// Abstract repository for blog operations
pub trait BlogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .blogcore/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .blogcore/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .blogcore directory exists
    fn is_initialized(&self) -> bool;

    /// Every article file that parses, drafts included
    fn load_articles(&self) -> Result<Vec<Article>>;

    /// Published articles only, in load order
    fn published_articles(&self) -> Result<Vec<Article>> {
        Ok(self
            .load_articles()?
            .into_iter()
            .filter(Article::is_published)
            .collect())
    }

    /// The published article with `slug`
    fn find_by_slug(&self, slug: &str) -> Result<Article> {
        self.published_articles()?
            .into_iter()
            .find(|a| a.slug == slug)
            .ok_or_else(|| BlogError::ArticleNotFound(slug.to_string()))
    }
}

/// File system implementation of BlogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover blog root: BLOGCORE_ROOT first, then walk up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_meta_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(BlogError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'blogcore init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    META_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover blog root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_meta_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(BlogError::NotBlogDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_meta_dir(path: &Path) -> bool {
        path.join(META_DIR).is_dir()
    }

    /// Create the metadata directory, config file and posts directory
    pub fn initialize(&self, config: &Config) -> Result<()> {
        let meta_dir = self.root.join(META_DIR);

        if meta_dir.exists() {
            return Err(BlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&self.root)?;
        config.save_to_dir(&self.root)?;
        fs::create_dir_all(self.root.join(&config.posts_dir))?;
        Ok(())
    }

    fn article_paths(&self, posts_dir: &Path) -> Vec<PathBuf> {
        let walker = WalkDir::new(posts_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || entry
                        .file_name()
                        .to_str()
                        .is_none_or(|name| !name.starts_with('.'))
            });

        walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .collect()
    }

    /// Parse one article file
    pub fn read_article(path: &Path) -> Result<Article> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| BlogError::InvalidArticle {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }
}

impl BlogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    fn load_articles(&self) -> Result<Vec<Article>> {
        let config = self.load_config()?;
        let posts_dir = self.root.join(&config.posts_dir);
        if !posts_dir.is_dir() {
            tracing::warn!(path = %posts_dir.display(), "posts directory missing");
            return Ok(Vec::new());
        }

        let mut articles = Vec::new();
        for path in self.article_paths(&posts_dir) {
            match Self::read_article(&path) {
                Ok(article) => articles.push(article),
                Err(e) => tracing::warn!(error = %e, "skipping article file"),
            }
        }

        tracing::info!(count = articles.len(), path = %posts_dir.display(), "loaded articles");
        Ok(articles)
    }
}
