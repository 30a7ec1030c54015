//! blogcore - Blog content rendering and search
//!
//! Renders stored article bodies (repairing migrated HTML or compiling
//! Markdown-like shorthand) and filters article collections by search term
//! and tags, with a small command-line front end over a directory of
//! article files.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BlogError;
