use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    pub api_base_url: String,
    pub search_engine_id: String,
    pub api_key: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base_url: global_constants::DEFAULT_SEARCH_API_URL.to_string(),
            search_engine_id: global_constants::DEFAULT_SEARCH_ENGINE_ID.to_string(),
            api_key: global_constants::DEFAULT_SEARCH_API_KEY.to_string(),
        }
    }
}

fn default_export_file_name() -> String {
    global_constants::DEFAULT_EXPORT_FILE_NAME.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    #[serde(default)]
    pub export_directory: Option<PathBuf>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            theme_mode: ThemeMode::default(),
            export_file_name: default_export_file_name(),
            export_directory: None,
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Search API URL: {}", settings.search.api_base_url);
        log::debug!(
            "[SETTINGS] Search engine id: {}",
            settings.search.search_engine_id
        );

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn resolve_export_directory(&self) -> PathBuf {
        if let Some(directory) = &self.export_directory {
            return directory.clone();
        }

        dirs::download_dir().unwrap_or_else(|| {
            log::warn!("[SETTINGS] No downloads directory found, exporting to working directory");
            PathBuf::from(".")
        })
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
