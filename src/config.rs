//! Game configuration
//!
//! Window, layout and input settings, read from a JSON file. Every field
//! has a default for the 640x480 presentation, so a config
//! file only needs the values it changes.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_DIR: &str = ".but-i-have-to-try";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "But I have to try".to_string(),
            width: 640,
            height: 480,
            resizable: true,
        }
    }
}

/// Screen positions and spacing, in window pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Top of the illustration band
    pub image_top: i32,
    /// Height the illustration is scaled to fit
    pub image_band_height: u32,
    /// Top of the first story text line
    pub text_top: i32,
    /// Horizontal margin subtracted from the wrap width
    pub text_side_padding: u32,
    /// Distance between consecutive text lines
    pub line_height: i32,
    /// Gap between the last text line and the first choice
    pub choice_gap: i32,
    /// Distance between consecutive choices
    pub choice_spacing: i32,
    /// Bitmap font scale
    pub font_scale: u32,
    /// Extra pixels above and below a label's glyphs in its hit band
    pub region_padding: u32,
    /// Quit label distance from the top-right corner
    pub quit_margin: i32,
    pub end_marker_x: i32,
    pub end_marker_y: i32,
    /// Gap between the end marker and the restart label
    pub restart_gap: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            image_top: 40,
            image_band_height: 240,
            text_top: 290,
            text_side_padding: 40,
            line_height: 20,
            choice_gap: 20,
            choice_spacing: 20,
            font_scale: 1,
            region_padding: 4,
            quit_margin: 10,
            end_marker_x: 20,
            end_marker_y: 400,
            restart_gap: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum milliseconds between accepted clicks
    pub debounce_ms: u64,
}

impl InputConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig { debounce_ms: 200 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub input: InputConfig,
    /// Directory the illustrations are loaded from
    pub asset_dir: PathBuf,
    pub frame_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window: WindowConfig::default(),
            layout: LayoutConfig::default(),
            input: InputConfig::default(),
            asset_dir: PathBuf::from("assets"),
            frame_rate: 60,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|source| GameError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Loads `path` if it exists, otherwise returns defaults
    ///
    /// A file that exists but doesn't parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading config from {}", path.display());
            Self::load_from_file(path)
        } else {
            log::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// `~/.but-i-have-to-try/config.json`, or `./config.json` without a home
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Time budget for one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}
