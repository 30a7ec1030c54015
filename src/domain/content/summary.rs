//! Plain-text views of article content: word counts and excerpts

use super::{classify, Dialect};
use pulldown_cmark::{Event, Parser as MdParser, TagEnd};
use regex::Regex;
use std::sync::OnceLock;

/// Reading speed used for estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Default excerpt length in characters
pub const EXCERPT_CHARS: usize = 160;

fn html_tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Strip formatting and return the readable text of `content`.
///
/// Markdown is walked with pulldown-cmark; markup has its tags removed.
/// Whitespace is collapsed to single spaces.
pub fn plain_text(content: &str) -> String {
    let raw = match classify(content) {
        Dialect::Markup => html_tag_regex().replace_all(content, " ").into_owned(),
        Dialect::Plain => markdown_text(content),
    };
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn markdown_text(content: &str) -> String {
    let mut text = String::new();
    for event in MdParser::new(content) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::Item)
            | Event::End(TagEnd::CodeBlock) => text.push(' '),
            _ => {}
        }
    }
    text
}

/// Estimated minutes to read `content`, never less than one.
pub fn reading_time_minutes(content: &str) -> usize {
    let words = plain_text(content).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// First `max_chars` characters of the readable text, cut at a word boundary.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let text = plain_text(content);
    if text.chars().count() <= max_chars {
        return text;
    }

    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(' ') {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end())
}
