use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::models::display_mode::DisplayMode;
use crate::utils::path::expand_tilde;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_display_mode")]
    pub display_mode: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default)]
    pub show_timestamps: bool,
}

fn default_display_mode() -> String {
    "clock".to_string()
}
fn default_prompt() -> String {
    "djset> ".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_mode: default_display_mode(),
            prompt: default_prompt(),
            separator_char: default_separator_char(),
            show_timestamps: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("djsetcalc")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".djsetcalc")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("djsetcalc.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// `path_override` comes from the global `--config` flag.
    pub fn load(path_override: Option<&str>) -> AppResult<Self> {
        let path = match path_override {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// Initialize the configuration directory and default config file
    pub fn init_all(is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            let yaml =
                serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(())
    }

    /// Resolved display mode, validated against the known names.
    pub fn display_mode(&self) -> AppResult<DisplayMode> {
        DisplayMode::dm_from_str(&self.display_mode)
            .ok_or_else(|| AppError::InvalidMode(self.display_mode.clone()))
    }
}
