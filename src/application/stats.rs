//! Blog statistics use case

use crate::domain::search::collect_tags;
use crate::error::Result;
use crate::infrastructure::{BlogRepository, FileSystemRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogStats {
    pub total_posts: usize,
    pub total_tags: usize,
}

pub fn stats(repository: &FileSystemRepository) -> Result<BlogStats> {
    let published = repository.published_articles()?;
    Ok(BlogStats {
        total_posts: published.len(),
        total_tags: collect_tags(&published).len(),
    })
}
