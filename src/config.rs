//! Configuration management
//!
//! Load and save user preferences to a TOML config file.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::retro::RETRO_RESOLUTION;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub conversion: ConversionPreferences,
    pub export: ExportPreferences,
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "glyphcast", "glyphcast") {
            Ok(proj_dirs.config_dir().join("config.toml"))
        } else {
            // Fallback to current directory
            Ok(PathBuf::from("glyphcast.toml"))
        }
    }
}

/// Conversion preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionPreferences {
    pub default_width: u32,
    pub default_style: String,
    pub apply_color: bool,
    pub retro_resolution: u32,
}

impl Default for ConversionPreferences {
    fn default() -> Self {
        Self {
            default_width: 100,
            default_style: "monochrome".to_string(),
            apply_color: true,
            retro_resolution: RETRO_RESOLUTION,
        }
    }
}

/// Export preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPreferences {
    pub formats: Vec<String>,
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
}

impl Default for ExportPreferences {
    fn default() -> Self {
        Self {
            formats: vec![
                "text".to_string(),
                "raster".to_string(),
                "vector".to_string(),
                "markup".to_string(),
            ],
            font_path: None,
            font_size: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.conversion.default_width, 100);
        assert_eq!(config.conversion.retro_resolution, 128);
        assert!(config.conversion.apply_color);
        assert_eq!(config.export.formats.len(), 4);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            parsed.conversion.default_width,
            config.conversion.default_width
        );
        assert_eq!(parsed.export.formats, config.export.formats);
    }
}
