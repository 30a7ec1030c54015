//! Initialize blog use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository};
use std::path::Path;

/// Initialize a new blog directory at the specified path.
///
/// Returns the config that was written.
pub fn init(path: &Path) -> Result<Config> {
    let repo = FileSystemRepository::new(path.to_path_buf());
    let config = Config::new();
    repo.initialize(&config)?;

    tracing::info!(path = %path.display(), "initialized blog directory");
    Ok(config)
}
