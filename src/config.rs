//! Application configuration.
//!
//! Only the preview styling is configurable; everything else about the form
//! is fixed. The file is optional and defaults apply whenever it is absent.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed presentation applied to the preview element when it is created.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PreviewStyle {
    /// Upper bound on the rendered width, in logical pixels
    pub max_width: f32,
    /// Space between the input and the preview, in logical pixels
    pub margin_top: f32,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            max_width: 300.0,
            margin_top: 10.0,
        }
    }
}

/// On-disk application configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub preview: PreviewStyle,
}

impl AppConfig {
    /// Load the configuration file, falling back to defaults when it is
    /// absent or malformed.
    pub fn load() -> Self {
        let path = Self::config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) => {
                    log::info!("loaded configuration from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Where the configuration lives:
    /// - Linux: ~/.config/form-preview/config.json
    /// - macOS: ~/Library/Application Support/form-preview/config.json
    /// - Windows: %APPDATA%\form-preview\config.json
    fn config_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push("form-preview");
        path.push("config.json");
        path
    }

    /// Convert to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styling() {
        let style = PreviewStyle::default();
        assert_eq!(style.max_width, 300.0);
        assert_eq!(style.margin_top, 10.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = AppConfig::default();
        config.preview.max_width = 480.0;

        let json = config.to_json().unwrap();
        let restored = AppConfig::from_json(&json).unwrap();

        assert_eq!(restored, config);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
