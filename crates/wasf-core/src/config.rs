use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::WasfError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub tags: TagsConfig,
    pub quality: QualityConfig,
    pub correction: CorrectionConfig,
    pub intake: IntakeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsConfig {
    /// Upper bound on tags stored per asset.
    pub max_tags: usize,
}

/// Bounds the quality gate checks a parsed asset against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityConfig {
    pub min_tags: usize,
    pub max_tags: usize,
    pub min_script_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionConfig {
    pub enabled: bool,
    /// Instruction appended when asking the model for a rewrite.
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// File extensions treated as raw model output.
    pub extensions: Vec<String>,
}

impl AppConfig {
    /// Load config: user file (if exists) replaces the built-in defaults.
    pub fn load() -> Result<Self, WasfError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| WasfError::Config(e.to_string()))
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, WasfError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WasfError::Config(e.to_string()))?;
        toml::from_str(&content).map_err(|e| WasfError::Config(e.to_string()))
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), WasfError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), WasfError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String, WasfError> {
        toml::to_string_pretty(self).map_err(|e| WasfError::Config(e.to_string()))
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "wasf")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
