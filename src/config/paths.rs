//! Path management for creatorlink
//!
//! Resolves the configuration directory for persisted settings.
//!
//! ## Path Resolution Order
//!
//! 1. `CREATORLINK_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (Linux: `~/.config/creatorlink`, macOS: `~/Library/Application
//!    Support/creatorlink`, Windows: `%APPDATA%\creatorlink`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CreatorlinkError;

/// Manages all paths used by creatorlink
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Base directory for all creatorlink data
    base_dir: PathBuf,
}

impl AppPaths {
    /// Create a new AppPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CreatorlinkError> {
        let base_dir = if let Ok(custom) = std::env::var("CREATORLINK_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "creatorlink").ok_or_else(|| {
                CreatorlinkError::Config("Could not determine config directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create AppPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), CreatorlinkError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CreatorlinkError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}
