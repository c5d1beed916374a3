//! Launcher settings document.
//!
//! One JSON file holding the emulator location and the ROM directory, read
//! at startup and rewritten wholesale on any change. Corruption is not an
//! error — the launcher comes up with empty settings and a warning in the
//! log, and the next save repairs the file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store;

/// File name of the settings document.
pub const SETTINGS_FILE: &str = "settings.json";

/// Persisted launcher settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherSettings {
    /// Path to the PCSX2 executable.
    pub pcsx2_path: Option<PathBuf>,
    /// PCSX2 configuration directory (holds `inis/PCSX2.ini`).
    pub pcsx2_config_dir: Option<PathBuf>,
    /// Directory scanned for disc images.
    pub roms_dir: Option<PathBuf>,
}

/// Canonical path of the settings document.
pub fn settings_path() -> PathBuf {
    crate::config_dir().join(SETTINGS_FILE)
}

impl LauncherSettings {
    /// Load settings from the canonical location.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load settings from an explicit path. Missing or malformed files
    /// yield defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        store::read_json_or_default(path)
    }

    /// Persist to the canonical location.
    pub fn save(&self) -> Result<(), StoreError> {
        self.save_to(&settings_path())
    }

    /// Persist to an explicit path (atomic temp-file + rename).
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), StoreError> {
        store::write_json_atomic(path, self)
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
