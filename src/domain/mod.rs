//! Domain layer - Articles, content rendering and search

pub mod article;
pub mod content;
pub mod search;

pub use article::{Article, ArticleStatus};
pub use content::{classify, render, Dialect};
pub use search::{collect_tags, filter, SearchPredicate};
