use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::LayoutSettings;

const SETTINGS_FILE_NAME: &str = "layout.toml";

/// Reads and writes [`LayoutSettings`] as TOML.
///
/// Every value handed out has passed validation, so an engine built from it
/// cannot fail.
pub struct SettingsService;

impl SettingsService {
    /// Per-user configuration file location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "calendar-grid", "calendar-grid")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
    }

    /// Parse and validate settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<LayoutSettings> {
        let settings: LayoutSettings =
            toml::from_str(content).context("Failed to parse layout settings")?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid layout settings: {}", e))?;
        Ok(settings)
    }

    /// Load settings from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<LayoutSettings> {
        if !path.exists() {
            log::info!(
                "No layout settings at {}, using defaults",
                path.display()
            );
            return Ok(LayoutSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read layout settings from {}", path.display()))?;
        let settings = Self::from_toml_str(&content)
            .with_context(|| format!("failed to load layout settings from {}", path.display()))?;

        log::info!(
            "Loaded layout settings: slot_minutes={}, column_limit={}",
            settings.slot_minutes,
            settings.column_limit
        );
        Ok(settings)
    }

    pub fn save(path: &Path, settings: &LayoutSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid layout settings: {}", e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(settings)?;
        fs::write(path, content)
            .with_context(|| format!("failed to write layout settings to {}", path.display()))?;
        Ok(())
    }
}
