use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, OUTPUT_FORMATS};
use crate::error::{OctofitError, OctofitResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,
}

impl Config {
    /// Change the default output format, refusing formats this build can't print.
    pub fn set_default_format(&mut self, format: impl Into<String>) -> OctofitResult<()> {
        let format = format.into();
        if !OUTPUT_FORMATS.contains(&format.as_str()) {
            return Err(OctofitError::ConfigError(format!(
                "unsupported output format '{}' (expected one of: {})",
                format,
                OUTPUT_FORMATS.join(", ")
            )));
        }
        self.default_format = Some(format);
        Ok(())
    }

    /// Output format for list commands, ignoring values this build doesn't know.
    pub fn output_format(&self) -> Option<&str> {
        self.default_format
            .as_deref()
            .filter(|f| OUTPUT_FORMATS.contains(f))
    }
}

pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

pub fn load_config() -> Config {
    load_config_from(&config_path())
}

/// Missing or unreadable files fall back to the defaults.
pub fn load_config_from(path: &Path) -> Config {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

pub fn save_config(config: &Config) -> OctofitResult<()> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &Config, path: &Path) -> OctofitResult<()> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
