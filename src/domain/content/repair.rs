//! Repair pass for markup-dialect content
//!
//! An earlier migration corrupted stored HTML in a handful of systematic ways:
//! image openers were entity-escaped (sometimes twice), and the slashes of
//! image URLs were turned into attribute boundaries, so that
//! `https://host/a/b.png` was stored as `https:=""host""a""b.png"`.
//! The rules below undo those shapes. None of them matches markup that was
//! never corrupted, so the pass is a no-op on clean input.

use super::rules::{apply_all, RewriteRule};
use std::sync::OnceLock;

/// One flattened URL segment
const SEGMENT: &str = r#"([^"]*?)"#;
/// Boundary between two flattened segments, with or without a leading `=`
const SEPARATOR: &str = r#"=?"""#;

/// Pattern matching a URL flattened into exactly `segments` pseudo-attributes.
fn flattened_url_pattern(segments: usize) -> String {
    let body = vec![SEGMENT; segments].join(SEPARATOR);
    format!(r#"https:=""{}""#, body)
}

fn repair_rules() -> &'static [RewriteRule] {
    static RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            RewriteRule::literal(
                "nested-escaped-img",
                r#"&lt;img src="&lt;img src=""#,
                r#"<img src=""#,
            ),
            RewriteRule::literal("escaped-img", r#"&lt;img src=""#, r#"<img src=""#),
            RewriteRule::literal("escaped-gt", "&gt;", ">"),
            // Longest first: a shorter pattern would leave a longer URL half converted.
            RewriteRule::new(
                "flattened-url-5",
                &flattened_url_pattern(5),
                "https://${1}/${2}/${3}/${4}/${5}",
            ),
            RewriteRule::new(
                "flattened-url-4",
                &flattened_url_pattern(4),
                "https://${1}/${2}/${3}/${4}",
            ),
            RewriteRule::new(
                "flattened-url-3",
                &flattened_url_pattern(3),
                "https://${1}/${2}/${3}",
            ),
            RewriteRule::new(
                "flattened-url-2",
                &flattened_url_pattern(2),
                "https://${1}/${2}",
            ),
            RewriteRule::new("flattened-url-1", &flattened_url_pattern(1), "https://${1}"),
            RewriteRule::new("spaced-value", r#"=" ([^="]+)=" "#, r#"="${1}" "#),
            RewriteRule::literal("empty-value", r#"="""#, ""),
            RewriteRule::new(
                "split-class",
                r#"class="([^"]*)"([^"\s=<>/]*)""#,
                r#"class="${1}${2}""#,
            ),
            RewriteRule::new(
                "split-alt",
                r#"alt="([^"]*)"([^"\s=<>/]*)""#,
                r#"alt="${1}${2}""#,
            ),
            RewriteRule::new(
                "split-loading",
                r#"loading="([^"]*)"([^"\s=<>/]*)""#,
                r#"loading="${1}${2}""#,
            ),
        ]
    })
}

/// Undo the known migration corruption in markup-dialect content.
pub fn repair(markup: &str) -> String {
    apply_all(repair_rules(), markup)
}
