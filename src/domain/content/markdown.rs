//! Compile pass for plain/Markdown-dialect content
//!
//! This is a template-substitution compiler, not a Markdown parser: every rule
//! is a global rewrite applied to the output of the rules above it. Emphasis
//! may cross constructs and nested syntax is not understood. The exact rule
//! order is what callers rely on.

use super::rules::{apply_all, RewriteRule};
use std::sync::OnceLock;

// Line-anchored rules run in CRLF mode so `\r` never lands inside an element.
fn compile_rules() -> &'static [RewriteRule] {
    static RULES: OnceLock<Vec<RewriteRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            RewriteRule::new(
                "heading-3",
                r"(?mR)^### (.*)$",
                r#"<h3 class="text-xl font-semibold mt-6 mb-4">${1}</h3>"#,
            ),
            RewriteRule::new(
                "heading-2",
                r"(?mR)^## (.*)$",
                r#"<h2 class="text-2xl font-bold mt-8 mb-4">${1}</h2>"#,
            ),
            RewriteRule::new(
                "heading-1",
                r"(?mR)^# (.*)$",
                r#"<h1 class="text-3xl font-bold mt-10 mb-6">${1}</h1>"#,
            ),
            // Strong before italic, or `**x**` becomes two empty italics.
            RewriteRule::new(
                "strong",
                r"\*\*(.*?)\*\*",
                r#"<strong class="font-semibold">${1}</strong>"#,
            ),
            RewriteRule::new("italic", r"\*(.*?)\*", r#"<em class="italic">${1}</em>"#),
            RewriteRule::new(
                "code-block",
                r"(?s)```(.*?)```",
                r#"<pre class="bg-gray-100 p-4 rounded-lg overflow-x-auto my-4"><code>${1}</code></pre>"#,
            ),
            RewriteRule::new(
                "inline-code",
                r"`(.*?)`",
                r#"<code class="bg-gray-100 px-2 py-1 rounded text-sm">${1}</code>"#,
            ),
            RewriteRule::new(
                "image-line",
                r"(?imR)^(https?://\S+\.(?:jpg|jpeg|png|gif|webp|svg))$",
                r#"<div class="my-6 text-center"><img src="${1}" alt="Image" class="mx-auto rounded-lg shadow-lg max-w-full h-auto" loading="lazy" /></div>"#,
            ),
            // A URL directly after a quote, `=` or `(` is already an attribute value
            // or the target of Markdown image/link syntax.
            RewriteRule::new(
                "image-inline",
                r#"(?i)(^|[^"'(=\w/])(https?://\S+\.(?:jpg|jpeg|png|gif|webp|svg))"#,
                r#"${1}<img src="${2}" alt="Image" class="inline-block rounded shadow max-w-full h-auto" loading="lazy" />"#,
            ),
            RewriteRule::new(
                "image",
                r"!\[([^\]]*)\]\(([^)]+)\)",
                r#"<div class="my-6 text-center"><img src="${2}" alt="${1}" class="mx-auto rounded-lg shadow-lg max-w-full h-auto" loading="lazy" /></div>"#,
            ),
            RewriteRule::new(
                "link",
                r"\[([^\]]+)\]\(([^)]+)\)",
                r#"<a href="${2}" class="text-blue-600 hover:text-blue-800 underline">${1}</a>"#,
            ),
            // Items are emitted without an enclosing <ul>.
            RewriteRule::new("list-item-star", r"(?mR)^\* (.*)$", r#"<li class="ml-4">${1}</li>"#),
            RewriteRule::new("list-item-dash", r"(?mR)^- (.*)$", r#"<li class="ml-4">${1}</li>"#),
            RewriteRule::literal("paragraph", "\n\n", r#"</p><p class="mb-4">"#),
            RewriteRule::literal("line-break", "\n", "<br />"),
        ]
    })
}

/// Compile Markdown-like shorthand into HTML fragments.
pub fn compile(text: &str) -> String {
    apply_all(compile_rules(), text)
}
