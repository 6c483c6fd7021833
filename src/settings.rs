//! Runtime settings
//!
//! Read from a JSON file at startup. Missing or unreadable files fall back to
//! defaults; fields absent from the file keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between clock ticks
    pub tick_interval_ms: u64,
    /// Most ticks emitted for one frame when the clock falls behind
    pub max_catch_up_ticks: u32,
    /// Layout seed; a random one is drawn when unset
    pub seed: Option<u64>,
    /// Ticks the headless driver runs when no script is given
    pub demo_ticks: u64,
    /// Print every snapshot, not just the last one
    pub show_frames: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            max_catch_up_ticks: 8,
            seed: None,
            demo_ticks: 200,
            show_frames: false,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const PATH_ENV: &'static str = "FROGGER_SETTINGS";
    /// Settings file used when the variable is unset
    pub const DEFAULT_PATH: &'static str = "frogger.json";

    /// Location of the settings file
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH))
    }

    /// Load settings from the configured location
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings to `path`
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("Could not save settings to {}: {}", path.display(), e);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Could not encode settings: {}", e),
        }
    }

    /// Configured seed, or a fresh random one
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
