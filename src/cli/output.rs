//! Output formatting utilities

use crate::application::{ArticleListing, ArticleView, BlogStats};
use crate::domain::content::reading_time_minutes;
use crate::domain::Article;
use crate::error::Result;
use crate::infrastructure::config::{Config, UiConfig, CONFIG_KEYS};

/// Tags shown per article before collapsing into "+N more"
const VISIBLE_TAGS: usize = 3;

fn format_tags(tags: &[String]) -> String {
    let mut shown: Vec<String> = tags
        .iter()
        .take(VISIBLE_TAGS)
        .map(|t| format!("#{}", t))
        .collect();
    if tags.len() > VISIBLE_TAGS {
        shown.push(format!("+{} more", tags.len() - VISIBLE_TAGS));
    }
    shown.join(" ")
}

fn reading_time(article: &Article) -> String {
    article
        .reading_time
        .clone()
        .unwrap_or_else(|| format!("{} min read", reading_time_minutes(&article.content)))
}

fn format_article_line(article: &Article, ui: &UiConfig) -> String {
    let mut line = format!(
        "{}  {}  {}",
        article.published_at.format("%d-%m-%Y"),
        article.slug,
        article.title
    );
    if ui.show_author {
        if let Some(author) = &article.author {
            line.push_str(&format!(" by {}", author));
        }
    }
    if ui.show_reading_time {
        line.push_str(&format!(" ({})", reading_time(article)));
    }
    if ui.show_tags && !article.tags.is_empty() {
        line.push_str(&format!("  {}", format_tags(&article.tags)));
    }
    line
}

/// Format plain article lines, or `empty` when there are none
pub fn format_articles(articles: &[Article], ui: &UiConfig, empty: &str) -> String {
    if articles.is_empty() {
        return empty.to_string();
    }

    let mut output = String::new();
    for article in articles {
        output.push_str(&format_article_line(article, ui));
        output.push('\n');
    }
    output
}

/// Format a listing, with a result count when a search or tag filter is active
pub fn format_article_list(listing: &ArticleListing, ui: &UiConfig) -> String {
    if listing.articles.is_empty() {
        return "No articles found".to_string();
    }

    let mut output = format_articles(&listing.articles, ui, "");
    if ui.show_search && listing.filtered {
        output.push_str(&format!(
            "Found {} articles (total {})\n",
            listing.matched, listing.total
        ));
    }
    output
}

/// Format a list of tags, one per line.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(tag);
        output.push('\n');
    }
    output
}

/// Format a single rendered article: header lines, a blank line, then the HTML
pub fn format_article(view: &ArticleView, ui: &UiConfig) -> String {
    let article = &view.article;
    let mut output = format!("{}\n", article.title);
    output.push_str(&format!(
        "Published: {}\n",
        article.published_at.format("%d-%m-%Y")
    ));
    if ui.show_author {
        if let Some(author) = &article.author {
            output.push_str(&format!("Author: {}\n", author));
        }
    }
    if ui.show_reading_time {
        output.push_str(&format!("Reading time: {}\n", view.reading_time));
    }
    if ui.show_tags && !article.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", article.tags.join(", ")));
    }
    if ui.show_featured_image {
        if let Some(image) = &article.featured_image {
            output.push_str(&format!("Image: {}\n", image));
        }
    }
    output.push('\n');
    output.push_str(&view.html);
    output.push('\n');
    output
}

pub fn format_stats(stats: &BlogStats) -> String {
    format!(
        "Articles: {}\nTags: {}\n",
        stats.total_posts, stats.total_tags
    )
}

/// Format every config key as `key = value`
pub fn format_config(config: &Config) -> Result<String> {
    let mut output = String::new();
    for key in CONFIG_KEYS {
        output.push_str(&format!("{} = {}\n", key, config.get(key)?));
    }
    Ok(output)
}
