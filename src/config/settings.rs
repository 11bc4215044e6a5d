//! User settings for creatorlink
//!
//! Manages the small set of preferences the terminal client remembers
//! between sessions: the last login email, the default country code for
//! phone verification, and whether keyboard hints are shown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::paths::AppPaths;
use crate::error::CreatorlinkError;

/// User settings for creatorlink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Email remembered from the last successful login
    #[serde(default)]
    pub last_email: String,

    /// Default country dial code pre-selected on the phone step
    #[serde(default = "default_country_code")]
    pub default_country_code: String,

    /// Whether key hints are rendered at the bottom of each screen
    #[serde(default = "default_show_hints")]
    pub show_key_hints: bool,

    /// When the settings file was last written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_country_code() -> String {
    "+1".to_string()
}

fn default_show_hints() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            last_email: String::new(),
            default_country_code: default_country_code(),
            show_key_hints: default_show_hints(),
            updated_at: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AppPaths) -> Result<Self, CreatorlinkError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CreatorlinkError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CreatorlinkError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&mut self, paths: &AppPaths) -> Result<(), CreatorlinkError> {
        paths.ensure_directories()?;

        self.updated_at = Some(Utc::now());

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CreatorlinkError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            CreatorlinkError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_country_code, "+1");
        assert!(settings.last_email.is_empty());
        assert!(settings.show_key_hints);
        assert!(settings.updated_at.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.last_email = "casey@example.com".to_string();
        settings.default_country_code = "+44".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.last_email, "casey@example.com");
        assert_eq!(loaded.default_country_code, "+44");
        assert!(loaded.updated_at.is_some());
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.last_email, deserialized.last_email);
        assert_eq!(settings.show_key_hints, deserialized.show_key_hints);
    }
}
