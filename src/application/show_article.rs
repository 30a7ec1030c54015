//! Show article use case

use crate::domain::content::{excerpt, reading_time_minutes, render, summary::EXCERPT_CHARS};
use crate::domain::Article;
use crate::error::Result;
use crate::infrastructure::{BlogRepository, FileSystemRepository};

/// A published article ready for display
#[derive(Debug, Clone)]
pub struct ArticleView {
    pub article: Article,
    pub html: String,
    pub reading_time: String,
    pub excerpt: String,
}

impl ArticleView {
    /// Render `article`, filling in reading time and excerpt when they are not stored.
    pub fn from_article(article: Article) -> Self {
        let html = render(&article.content);
        let reading_time = article
            .reading_time
            .clone()
            .unwrap_or_else(|| format!("{} min read", reading_time_minutes(&article.content)));
        let excerpt = article
            .excerpt
            .clone()
            .unwrap_or_else(|| excerpt(&article.content, EXCERPT_CHARS));

        ArticleView {
            article,
            html,
            reading_time,
            excerpt,
        }
    }
}

/// Service for looking up and rendering a single article.
pub struct ShowArticleService {
    repository: FileSystemRepository,
}

impl ShowArticleService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    pub fn execute(&self, slug: &str) -> Result<ArticleView> {
        let article = self.repository.find_by_slug(slug)?;
        Ok(ArticleView::from_article(article))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_view_estimates_missing_fields() {
        let article = Article::new("1", "a", "A", "Some **bold** words here", Utc::now());
        let view = ArticleView::from_article(article);
        assert_eq!(view.reading_time, "1 min read");
        assert_eq!(view.excerpt, "Some bold words here");
        assert!(view.html.contains("<strong"));
    }

    #[test]
    fn test_view_prefers_stored_fields() {
        let mut article =
            Article::new("1", "a", "A", "body", Utc::now()).with_excerpt("Stored excerpt");
        article.reading_time = Some("7 min".to_string());
        let view = ArticleView::from_article(article);
        assert_eq!(view.reading_time, "7 min");
        assert_eq!(view.excerpt, "Stored excerpt");
    }
}
