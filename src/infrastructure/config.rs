//! Configuration management

use crate::error::{BlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the metadata directory marking a blog root
pub const META_DIR: &str = ".blogcore";

/// Display settings for the article views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub posts_per_page: usize,
    pub show_search: bool,
    pub show_tags: bool,
    pub show_author: bool,
    pub show_reading_time: bool,
    pub show_featured_image: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            posts_per_page: 10,
            show_search: true,
            show_tags: true,
            show_author: true,
            show_reading_time: true,
            show_featured_image: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding article files, relative to the blog root
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_posts_dir() -> String {
    "posts".to_string()
}

/// Keys accepted by [`Config::get`] and [`Config::set`]
pub const CONFIG_KEYS: &[&str] = &[
    "posts_dir",
    "created",
    "ui.posts_per_page",
    "ui.show_search",
    "ui.show_tags",
    "ui.show_author",
    "ui.show_reading_time",
    "ui.show_featured_image",
];

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            posts_dir: default_posts_dir(),
            created: Utc::now(),
            ui: UiConfig::default(),
        }
    }

    /// Load config from .blogcore/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(META_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlogError::NotBlogDirectory(path.to_path_buf())
            } else {
                BlogError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .blogcore/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(META_DIR);
        let config_path = meta_dir.join("config.toml");

        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Read a single value by key
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "posts_dir" => self.posts_dir.clone(),
            "created" => self.created.to_rfc3339(),
            "ui.posts_per_page" => self.ui.posts_per_page.to_string(),
            "ui.show_search" => self.ui.show_search.to_string(),
            "ui.show_tags" => self.ui.show_tags.to_string(),
            "ui.show_author" => self.ui.show_author.to_string(),
            "ui.show_reading_time" => self.ui.show_reading_time.to_string(),
            "ui.show_featured_image" => self.ui.show_featured_image.to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a single value by key, validating its type
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "posts_dir" => {
                if value.trim().is_empty() {
                    return Err(BlogError::Config("posts_dir cannot be empty".to_string()));
                }
                self.posts_dir = value.to_string();
            }
            "created" => {
                return Err(BlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            "ui.posts_per_page" => {
                let n: usize = value.parse().map_err(|_| {
                    BlogError::Config(format!("Invalid number for {}: '{}'", key, value))
                })?;
                if n == 0 {
                    return Err(BlogError::Config(
                        "ui.posts_per_page must be at least 1".to_string(),
                    ));
                }
                self.ui.posts_per_page = n;
            }
            "ui.show_search" => self.ui.show_search = parse_bool(key, value)?,
            "ui.show_tags" => self.ui.show_tags = parse_bool(key, value)?,
            "ui.show_author" => self.ui.show_author = parse_bool(key, value)?,
            "ui.show_reading_time" => self.ui.show_reading_time = parse_bool(key, value)?,
            "ui.show_featured_image" => self.ui.show_featured_image = parse_bool(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(BlogError::Config(format!(
            "Invalid boolean for {}: '{}' (use true or false)",
            key, value
        ))),
    }
}

fn unknown_key(key: &str) -> BlogError {
    BlogError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
