//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_pager::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.idiom = Some("tablet".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedPager";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Browser background as a `#RRGGBB` hex string.
    pub background: Option<String>,
    /// Forced device idiom ("phone" or "tablet"); unset derives it from the
    /// window width.
    #[serde(default)]
    pub idiom: Option<String>,
    /// Gap between toolbar items in the tablet layout, in logical pixels.
    #[serde(default)]
    pub toolbar_item_gap: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: None,
            idiom: None,
            toolbar_item_gap: Some(crate::ui::design_tokens::layout::TABLET_ITEM_GAP),
        }
    }
}

impl Config {
    /// Parses the configured background, if present and well-formed.
    pub fn background_color(&self) -> Option<Color> {
        self.background.as_deref().and_then(parse_hex_color)
    }
}

/// Parses a `#RRGGBB` hex string into an opaque color.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };
    Some(Color {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
        a: 1.0,
    })
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
