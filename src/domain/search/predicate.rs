//! Search predicate: free-text term plus tag selection

use std::collections::BTreeSet;

/// The user's current search box text and selected tag chips
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPredicate {
    /// Case-insensitive substring; empty means no constraint
    pub term: String,
    /// Any-of tag selection; empty means no constraint
    pub tags: BTreeSet<String>,
}

impl SearchPredicate {
    pub fn new(term: impl Into<String>) -> Self {
        SearchPredicate {
            term: term.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Select `tag` if it is not selected, deselect it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.tags.remove(tag) {
            self.tags.insert(tag.to_string());
        }
    }

    /// Reset both the term and the tag selection.
    pub fn clear(&mut self) {
        self.term.clear();
        self.tags.clear();
    }

    /// Whether any constraint is in effect
    pub fn is_active(&self) -> bool {
        !self.term.is_empty() || !self.tags.is_empty()
    }

    pub(crate) fn matches_term(&self, fields: &[Option<&str>]) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let needle = self.term.to_lowercase();
        fields
            .iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub(crate) fn matches_tags(&self, tags: &[String]) -> bool {
        self.tags.is_empty() || tags.iter().any(|tag| self.tags.contains(tag))
    }
}
