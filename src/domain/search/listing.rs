//! Listing options: exact-match filters, ordering and paging

use crate::domain::Article;
use std::cmp::Ordering;
use std::str::FromStr;

/// Field used to order a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    PublishedAt,
    UpdatedAt,
    Title,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "published" | "published_at" => Ok(SortField::PublishedAt),
            "updated" | "updated_at" => Ok(SortField::UpdatedAt),
            "title" => Ok(SortField::Title),
            _ => Err(format!(
                "Invalid sort field: '{}'. Valid fields are: published, updated, title",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Options narrowing and ordering an article listing
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Exact author match
    pub author: Option<String>,
    /// Exact featured-flag match
    pub featured: Option<bool>,
    pub order_by: SortField,
    pub direction: SortDirection,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl ListOptions {
    /// Options for page `page` (1-based) of `per_page` articles
    pub fn page(page: usize, per_page: usize) -> Self {
        ListOptions {
            offset: page.saturating_sub(1).saturating_mul(per_page),
            limit: Some(per_page),
            ..Default::default()
        }
    }

    /// Filter, order and slice `articles`.
    ///
    /// Ties keep their input order.
    pub fn apply(&self, articles: Vec<Article>) -> Vec<Article> {
        let mut selected: Vec<Article> = articles
            .into_iter()
            .filter(|a| {
                self.author
                    .as_deref()
                    .is_none_or(|author| a.author.as_deref() == Some(author))
            })
            .filter(|a| self.featured.is_none_or(|featured| a.featured == featured))
            .collect();

        selected.sort_by(|a, b| {
            let ordering = compare(a, b, self.order_by);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        let page = selected.into_iter().skip(self.offset);
        match self.limit {
            Some(n) => page.take(n).collect(),
            None => page.collect(),
        }
    }
}

fn compare(a: &Article, b: &Article, field: SortField) -> Ordering {
    match field {
        SortField::PublishedAt => a.published_at.cmp(&b.published_at),
        SortField::UpdatedAt => a.last_modified().cmp(&b.last_modified()),
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}

/// Featured articles, newest first, at most `limit`
pub fn featured(articles: Vec<Article>, limit: usize) -> Vec<Article> {
    ListOptions {
        featured: Some(true),
        limit: Some(limit),
        ..Default::default()
    }
    .apply(articles)
}
