//! List tags use case

use crate::domain::search::collect_tags;
use crate::error::Result;
use crate::infrastructure::{BlogRepository, FileSystemRepository};

/// Service for listing the tag vocabulary of published articles.
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Every tag on a published article, sorted and deduplicated.
    pub fn execute(&self) -> Result<Vec<String>> {
        let published = self.repository.published_articles()?;
        Ok(collect_tags(&published))
    }
}
