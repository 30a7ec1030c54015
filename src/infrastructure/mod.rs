//! Infrastructure layer - Configuration and article storage

pub mod config;
pub mod repository;

pub use config::{Config, UiConfig};
pub use repository::{BlogRepository, FileSystemRepository};
