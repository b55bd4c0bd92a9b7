//! Configuration management for Nebula.
//!
//! Configuration is read from `~/.config/nebula/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::range::DEFAULT_WINDOW_DAYS;

pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

/// Where the feed lives and which window to show by default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
    /// Length of the default date window ending today.
    pub window_days: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating it on first run.
    ///
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load an existing config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/nebula/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("nebula").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, Self::default_config_content()).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// The default config file content with comments.
    fn default_config_content() -> String {
        format!(
            r##"# Nebula Configuration
#
# Colors can be named (Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
# DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
# LightCyan, White, Reset) or hex ("#RRGGBB" / "#RGB").
#
# Keybindings are single characters ("g"), special keys (Enter, Space, Esc,
# Tab, BackTab, Up, Down, Left, Right, PageUp, PageDown, F1-F12) or
# modifier combinations ("Ctrl+c", "Shift+Tab").

[feed]
# JSON feed of astronomy picture of the day entries
url = "{url}"

# Days shown by default, ending today
window_days = {days}

[colors]
active_border = "Cyan"
inactive_border = "DarkGray"
selection_bg = "Cyan"
selection_fg = "Black"
badge_image = "LightBlue"
badge_video = "LightMagenta"
card_title = "White"
card_date = "Gray"
link = "Blue"
placeholder = "DarkGray"
error = "LightRed"
fact = "Yellow"
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
quit = ["q", "Ctrl+c"]
close = ["Esc"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
move_left = ["h", "Left"]
move_right = ["l", "Right"]
next_focus = ["Tab"]
prev_focus = ["BackTab", "Shift+Tab"]
activate = ["Enter", "Space"]
load = ["g", "F5"]
open_hd = ["H"]
open_source = ["o"]
play_video = ["p"]
next_fact = ["f"]
"##,
            url = DEFAULT_FEED_URL,
            days = DEFAULT_WINDOW_DAYS,
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
