//! List articles use case

use crate::domain::search::{self, ListOptions, SearchPredicate};
use crate::domain::Article;
use crate::error::Result;
use crate::infrastructure::{BlogRepository, FileSystemRepository};

/// Result of a listing request
#[derive(Debug, Clone)]
pub struct ArticleListing {
    /// Articles to display, after filtering, ordering and paging
    pub articles: Vec<Article>,
    /// Articles matching the predicate before paging
    pub matched: usize,
    /// All published articles
    pub total: usize,
    /// Whether the predicate constrained the result
    pub filtered: bool,
}

/// Service for listing published articles.
pub struct ListArticlesService {
    repository: FileSystemRepository,
}

impl ListArticlesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Filter published articles by `predicate`, then apply `options`.
    pub fn execute(
        &self,
        predicate: &SearchPredicate,
        options: &ListOptions,
    ) -> Result<ArticleListing> {
        let published = self.repository.published_articles()?;
        Ok(build_listing(&published, predicate, options))
    }

    /// Featured articles, newest first.
    pub fn featured(&self, limit: usize) -> Result<Vec<Article>> {
        let published = self.repository.published_articles()?;
        Ok(search::featured(published, limit))
    }
}

fn build_listing(
    published: &[Article],
    predicate: &SearchPredicate,
    options: &ListOptions,
) -> ArticleListing {
    let matched = search::filter(published, predicate);
    let matched_count = matched.len();
    tracing::debug!(
        term = %predicate.term,
        tags = predicate.tags.len(),
        matched = matched_count,
        total = published.len(),
        "filtered articles"
    );

    ArticleListing {
        articles: options.apply(matched),
        matched: matched_count,
        total: published.len(),
        filtered: predicate.is_active(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn article(id: &str, day: u32, tags: &[&str]) -> Article {
        let published = Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap();
        Article::new(id, id, format!("Post {}", id), "", published).with_tags(tags.iter().copied())
    }

    #[test]
    fn test_listing_counts() {
        let items = vec![article("a", 1, &["x"]), article("b", 2, &["y"]), article("c", 3, &["x"])];
        let predicate = SearchPredicate::default().with_tags(["x"]);
        let options = ListOptions {
            limit: Some(1),
            ..Default::default()
        };

        let listing = build_listing(&items, &predicate, &options);
        assert_eq!(listing.total, 3);
        assert_eq!(listing.matched, 2);
        assert!(listing.filtered);
        assert_eq!(listing.articles.len(), 1);
        assert_eq!(listing.articles[0].id, "c");
    }

    #[test]
    fn test_unfiltered_listing() {
        let items = vec![article("a", 1, &[])];
        let listing = build_listing(&items, &SearchPredicate::default(), &ListOptions::default());
        assert!(!listing.filtered);
        assert_eq!(listing.matched, 1);
    }
}
