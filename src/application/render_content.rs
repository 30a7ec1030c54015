//! Render content use case

use crate::domain::content::{classify, render, Dialect};
use crate::error::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Where raw content is read from
#[derive(Debug, Clone, Copy)]
pub enum ContentSource<'a> {
    File(&'a Path),
    Stdin,
}

impl<'a> ContentSource<'a> {
    /// `None` or `-` means standard input
    pub fn from_arg(path: Option<&'a Path>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => ContentSource::File(p),
            _ => ContentSource::Stdin,
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            ContentSource::File(path) => Ok(fs::read_to_string(path)?),
            ContentSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

/// Rendered content together with the dialect it was recognized as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedContent {
    pub dialect: Dialect,
    pub html: String,
}

/// Read raw content and render it.
pub fn render_source(source: ContentSource<'_>) -> Result<RenderedContent> {
    let raw = source.read()?;
    Ok(RenderedContent {
        dialect: classify(&raw),
        html: render(&raw),
    })
}
