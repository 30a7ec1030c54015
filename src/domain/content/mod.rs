//! Article content rendering
//!
//! Stored article bodies come in one of two dialects: HTML left behind by an
//! earlier migration (and possibly corrupted by it), or Markdown-like
//! shorthand. [`render`] decides which one it was given and hands the text to
//! the matching pass.
//!
//! The output is meant to be inserted into a page as trusted HTML. Nothing
//! here sanitizes script or event-handler markup, so content must come from a
//! trusted authoring source.
//!
//! # Examples
//!
//! ```
//! use blogcore::domain::content::{classify, render, Dialect};
//!
//! assert_eq!(classify("**bold**"), Dialect::Plain);
//! assert_eq!(render("**bold**"), r#"<strong class="font-semibold">bold</strong>"#);
//! ```

pub mod markdown;
pub mod repair;
pub mod rules;
pub mod summary;

pub use markdown::compile;
pub use repair::repair;
pub use summary::{excerpt, plain_text, reading_time_minutes};

/// Input dialect of a stored article body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Already HTML, possibly with migration damage
    Markup,
    /// Markdown-like shorthand
    Plain,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Markup => "markup",
            Dialect::Plain => "plain",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify content by the presence of both `<` and `>`.
///
/// This is a heuristic, not a parse: plain text such as `a<b and x>y` is
/// reported as markup.
pub fn classify(content: &str) -> Dialect {
    if content.contains('<') && content.contains('>') {
        Dialect::Markup
    } else {
        Dialect::Plain
    }
}

/// Render a stored article body to HTML.
///
/// Never fails; input that matches no rule comes back unchanged.
pub fn render(content: &str) -> String {
    let dialect = classify(content);
    tracing::debug!(%dialect, bytes = content.len(), "rendering content");
    match dialect {
        Dialect::Markup => repair(content),
        Dialect::Plain => compile(content),
    }
}
