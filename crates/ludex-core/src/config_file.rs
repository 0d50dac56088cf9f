//! On-disk TOML configuration shared by the front ends.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub api: Option<ApiConfig>,
    pub catalog: Option<CatalogConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub page_size: Option<u32>,
    pub year_span: Option<u32>,
    pub auto_backfill: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// "dark" or "light". This is the one durable preference the browser
    /// keeps; it is written back on every toggle.
    pub theme: Option<String>,
}

impl ConfigFile {
    pub fn api_key(&self) -> Option<&str> {
        self.api.as_ref()?.key.as_deref()
    }

    pub fn theme(&self) -> Option<&str> {
        self.display.as_ref()?.theme.as_deref()
    }

    pub fn set_theme(&mut self, theme: &str) {
        self.display.get_or_insert_with(Default::default).theme = Some(theme.to_string());
    }
}

/// Platform config directory path: `<config_dir>/ludex/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ludex").join("config.toml"))
}

/// Load config by cascading CWD `.ludex.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".ludex.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        api: Some(ApiConfig {
            key: overlay
                .api
                .as_ref()
                .and_then(|a| a.key.clone())
                .or_else(|| base.api.as_ref().and_then(|a| a.key.clone())),
        }),
        catalog: Some(CatalogConfig {
            page_size: overlay
                .catalog
                .as_ref()
                .and_then(|c| c.page_size)
                .or_else(|| base.catalog.as_ref().and_then(|c| c.page_size)),
            year_span: overlay
                .catalog
                .as_ref()
                .and_then(|c| c.year_span)
                .or_else(|| base.catalog.as_ref().and_then(|c| c.year_span)),
            auto_backfill: overlay
                .catalog
                .as_ref()
                .and_then(|c| c.auto_backfill)
                .or_else(|| base.catalog.as_ref().and_then(|c| c.auto_backfill)),
        }),
        display: Some(DisplayConfig {
            theme: overlay
                .display
                .as_ref()
                .and_then(|d| d.theme.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.theme.clone())),
        }),
    }
}

/// Save the current config to the platform config directory.
pub fn save_config(config: &ConfigFile) -> Result<PathBuf, String> {
    let path = config_path().ok_or_else(|| "Could not determine config directory".to_string())?;
    save_to_path(config, &path)?;
    Ok(path)
}

/// Save the config to a specific path, creating parent directories.
pub fn save_to_path(config: &ConfigFile, path: &PathBuf) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }
    let content =
        toml::to_string_pretty(config).map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config: {}", e))
}
