use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

impl ThemeMode {
    /// The mode to persist after an explicit user toggle.
    pub fn for_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    /// Base URL of the video-resolver backend.
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            server_url: default_server_url(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            // File doesn't exist, use defaults and try to save them for next time
            let default = Self::default();
            let _ = default.save();
            return default;
        }

        Self::load_from(&config_path)
    }

    /// Load settings from a specific path, falling back to defaults on any
    /// read or parse failure.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tokgrab");
        path.push("settings.json");
        path
    }

    /// Resolve the effective mode for this run: an explicit stored choice
    /// wins; otherwise fall back to the system signal. Adopting the system's
    /// dark preference records it as the stored choice (the caller persists
    /// when the mode changed).
    pub fn resolve_startup_theme(&mut self, system_prefers_dark: bool) -> bool {
        match self.theme_mode {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::SystemDefault => {
                if system_prefers_dark {
                    self.theme_mode = ThemeMode::Dark;
                    true
                } else {
                    false
                }
            }
        }
    }
}
