//! Article search
//!
//! Filtering is pure and in-memory: callers rebuild a [`SearchPredicate`] on
//! every interaction and re-run [`filter`] over the full collection.

pub mod filter;
pub mod listing;
pub mod predicate;

pub use filter::{collect_tags, filter, matches};
pub use listing::{featured, ListOptions, SortDirection, SortField};
pub use predicate::SearchPredicate;
