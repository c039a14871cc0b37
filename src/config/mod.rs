//! Application Configuration
//!
//! Page layout, shortcuts and window preferences stored in TOML format.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::coordinator::Layout;
use crate::shortcuts::ShortcutBindings;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Page layout managed by the coordinator
    pub layout: Layout,
    /// Global keyboard shortcuts
    pub shortcuts: ShortcutBindings,
    /// Window settings
    pub window: WindowSettings,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reject layouts the coordinator cannot start from
    pub fn validate(&self) -> Result<()> {
        if self.layout.views.is_empty() {
            bail!("layout.views must name at least one view");
        }
        if !self.layout.views.contains(&self.layout.dashboard_view) {
            tracing::warn!(
                "Dashboard view '{}' is not registered; the search shortcut will never fire",
                self.layout.dashboard_view
            );
        }
        if !self.layout.views.contains(&self.layout.story_view) {
            tracing::warn!(
                "Story view '{}' is not registered; story rows will do nothing",
                self.layout.story_view
            );
        }
        Ok(())
    }
}

/// Dashboard window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Window title
    pub title: String,
    /// Initial inner width
    pub width: f32,
    /// Initial inner height
    pub height: f32,
    /// Minimum inner width
    pub min_width: f32,
    /// Minimum inner height
    pub min_height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "StoryReview Studio".to_string(),
            width: 1100.0,
            height: 700.0,
            min_width: 800.0,
            min_height: 500.0,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset (e.g. "info", "debug")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
