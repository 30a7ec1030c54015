//! In-memory article filtering and tag vocabulary

use super::SearchPredicate;
use crate::domain::Article;
use std::collections::BTreeSet;

/// Articles matching both the term and the tag selection, in input order.
///
/// # Examples
///
/// ```
/// use blogcore::domain::search::{filter, SearchPredicate};
/// use blogcore::domain::Article;
/// use chrono::Utc;
///
/// let articles = vec![
///     Article::new("1", "intro", "Intro to Rust", "", Utc::now()).with_tags(["rust"]),
///     Article::new("2", "go", "Go notes", "", Utc::now()).with_tags(["go"]),
/// ];
/// let predicate = SearchPredicate::new("rust");
/// let found = filter(&articles, &predicate);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].slug, "intro");
/// ```
pub fn filter(items: &[Article], predicate: &SearchPredicate) -> Vec<Article> {
    items
        .iter()
        .filter(|article| matches(article, predicate))
        .cloned()
        .collect()
}

/// Whether a single article satisfies `predicate`
pub fn matches(article: &Article, predicate: &SearchPredicate) -> bool {
    let fields = [
        Some(article.title.as_str()),
        article.excerpt.as_deref(),
        Some(article.content.as_str()),
    ];
    predicate.matches_term(&fields) && predicate.matches_tags(&article.tags)
}

/// Every tag used by `items`, deduplicated and sorted ascending.
pub fn collect_tags(items: &[Article]) -> Vec<String> {
    let tags: BTreeSet<&str> = items
        .iter()
        .flat_map(|article| article.tags.iter().map(String::as_str))
        .collect();
    tags.into_iter().map(str::to_string).collect()
}
