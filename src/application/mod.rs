//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_articles;
pub mod list_tags;
pub mod manage_config;
pub mod render_content;
pub mod show_article;
pub mod stats;

pub use list_articles::{ArticleListing, ListArticlesService};
pub use list_tags::ListTagsService;
pub use manage_config::ConfigService;
pub use render_content::{render_source, ContentSource, RenderedContent};
pub use show_article::{ArticleView, ShowArticleService};
pub use stats::BlogStats;
