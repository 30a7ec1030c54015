//! Article model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Publication status of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    #[default]
    Published,
}

impl FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            _ => Err(format!(
                "Invalid status: '{}'. Valid statuses are: draft, published",
                s
            )),
        }
    }
}

/// A stored blog article
///
/// `content` is opaque text of unknown dialect; see [`crate::domain::content`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reading_time: Option<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub featured_image: Option<String>,
}

impl Article {
    /// Create a published article with the required fields; everything else empty
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Article {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            excerpt: None,
            content: content.into(),
            tags: Vec::new(),
            author: None,
            published_at,
            updated_at: None,
            reading_time: None,
            status: ArticleStatus::Published,
            featured: false,
            featured_image: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    /// Timestamp used for "updated" ordering; falls back to the publication time
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.published_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_toml() -> &'static str {
        r###"
id = "1"
slug = "hello-world"
title = "Hello World"
tags = ["rust", "web"]
published_at = "2025-01-15T10:00:00Z"
content = "## Hello"
"###
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let article: Article = toml::from_str(sample_toml()).unwrap();
        assert_eq!(article.slug, "hello-world");
        assert_eq!(article.tags, vec!["rust", "web"]);
        assert_eq!(article.status, ArticleStatus::Published);
        assert!(!article.featured);
        assert!(article.excerpt.is_none());
        assert_eq!(
            article.published_at,
            Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_deserialize_draft_status() {
        let text = format!("{}status = \"draft\"\n", sample_toml());
        let article: Article = toml::from_str(&text).unwrap();
        assert!(!article.is_published());
    }

    #[test]
    fn test_missing_slug_is_an_error() {
        let result: std::result::Result<Article, _> =
            toml::from_str("id = \"1\"\ntitle = \"x\"\npublished_at = \"2025-01-15T10:00:00Z\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            ArticleStatus::from_str("Draft").unwrap(),
            ArticleStatus::Draft
        );
        assert_eq!(
            ArticleStatus::from_str("published").unwrap(),
            ArticleStatus::Published
        );
        assert!(ArticleStatus::from_str("archived").is_err());
    }

    #[test]
    fn test_last_modified_falls_back_to_published() {
        let published = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut article = Article::new("1", "a", "A", "", published);
        assert_eq!(article.last_modified(), published);

        let updated = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        article.updated_at = Some(updated);
        assert_eq!(article.last_modified(), updated);
    }
}
