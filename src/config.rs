//! Console configuration persistence
//!
//! Stores user preferences in `~/.config/slidein/config.yaml`

use serde::{Deserialize, Serialize};

/// Delay between a close request and removal of the panel content.
/// Matches the slide-out transition.
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 200;

/// Console configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Deferred clear delay after a slide-in closes
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,
    /// Panel width in pixels for regular slide-ins
    #[serde(default = "default_panel_width")]
    pub panel_width: usize,
    /// Panel width in pixels when opened with `wide`
    #[serde(default = "default_wide_panel_width")]
    pub wide_panel_width: usize,
    /// Backdrop color drawn over the page while a slide-in is open (ARGB)
    #[serde(default = "default_backdrop_color")]
    pub backdrop_color: u32,
}

fn default_close_delay_ms() -> u64 {
    DEFAULT_CLOSE_DELAY_MS
}

fn default_panel_width() -> usize {
    480
}

fn default_wide_panel_width() -> usize {
    800
}

fn default_backdrop_color() -> u32 {
    0x80000000
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: default_close_delay_ms(),
            panel_width: default_panel_width(),
            wide_panel_width: default_wide_panel_width(),
            backdrop_color: default_backdrop_color(),
        }
    }
}

impl ConsoleConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
