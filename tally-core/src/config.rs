//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "activeUser": "3f2a..."
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    active_user: Option<String>,
    // Keep fields this crate doesn't manage intact across saves
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Ledger configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The user id operations default to when none is given
    pub active_user: Option<String>,
    _raw_settings: SettingsFile,
}

impl Config {
    /// Load config from the data directory
    pub fn load(dir: &Path) -> Result<Self> {
        let settings_path = dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        Ok(Self {
            active_user: raw.active_user.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory, preserving unmanaged fields
    pub fn save(&self, dir: &Path) -> Result<()> {
        let settings_path = dir.join("settings.json");

        let mut settings = self._raw_settings.clone();
        settings.active_user = self.active_user.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Make the given user the default for subsequent operations
    pub fn set_active_user(&mut self, id: impl Into<String>) {
        self.active_user = Some(id.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.active_user.is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.set_active_user("user-1");
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.active_user.as_deref(), Some("user-1"));
    }

    #[test]
    fn test_preserves_unmanaged_fields() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{ "activeUser": "user-1", "theme": "dark" }"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.set_active_user("user-2");
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        assert!(content.contains("user-2"));
        assert!(content.contains("theme"));
    }
}
