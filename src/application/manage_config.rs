//! Config management use case

use crate::error::Result;
use crate::infrastructure::{BlogRepository, Config, FileSystemRepository};

/// Service for managing blog configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        self.repository.load_config()?.get(key)
    }

    /// Set a config value and persist it
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;
        config.set(key, value)?;
        self.repository.save_config(&config)
    }

    /// Get the full configuration
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
