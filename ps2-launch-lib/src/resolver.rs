//! Effective-configuration resolution.
//!
//! Priority chain, highest first:
//! 1. a user override stored under the exact identifier string — overrides
//!    are keyed strictly, no normalization, so an override saved for
//!    `SLES-548.41` does not leak onto `SLES_548.41`;
//! 2. the database record found via normalized lookup;
//! 3. the global default, cloned fresh on every call.
//!
//! Every tier hands back an owned config. Callers can mutate freely without
//! touching the database or the default.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ps2_launch_core::EmuConfig;

use crate::database::TitleDb;
use crate::error::StoreError;
use crate::store;

/// File name of the persisted per-title override document.
pub const OVERRIDES_FILE: &str = "game_configs.json";

/// Resolves effective emulator configurations for titles.
pub struct ConfigResolver {
    db: TitleDb,
    overrides: HashMap<String, EmuConfig>,
    overrides_path: PathBuf,
}

impl ConfigResolver {
    /// Create a resolver backed by `db`, loading overrides from `path`.
    ///
    /// A missing override file is normal (no overrides yet); a malformed
    /// one is discarded with a warning and defaults apply.
    pub fn new(db: TitleDb, path: impl Into<PathBuf>) -> Self {
        let overrides_path = path.into();
        let overrides = store::read_json_or_default(&overrides_path);
        Self {
            db,
            overrides,
            overrides_path,
        }
    }

    /// Create a resolver persisting overrides at the canonical location.
    pub fn with_default_path(db: TitleDb) -> Self {
        Self::new(db, crate::config_dir().join(OVERRIDES_FILE))
    }

    /// Resolve the effective configuration for a title identifier.
    pub fn resolve(&self, id: &str) -> EmuConfig {
        if let Some(custom) = self.overrides.get(id) {
            return custom.clone();
        }
        if let Some(record) = self.db.lookup(id) {
            return record.config.clone();
        }
        EmuConfig::default()
    }

    /// The stored override for an exact identifier, if any.
    pub fn override_for(&self, id: &str) -> Option<&EmuConfig> {
        self.overrides.get(id)
    }

    /// Store an override under the exact identifier string and persist
    /// immediately. Takes effect on the next [`resolve`](Self::resolve).
    pub fn save_override(&mut self, id: &str, config: EmuConfig) -> Result<(), StoreError> {
        self.overrides.insert(id.to_string(), config);
        store::write_json_atomic(&self.overrides_path, &self.overrides)
    }

    /// Remove an override; returns whether one was present. Persists when
    /// something actually changed.
    pub fn remove_override(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.overrides.remove(id).is_none() {
            return Ok(false);
        }
        store::write_json_atomic(&self.overrides_path, &self.overrides)?;
        Ok(true)
    }

    /// The backing title database.
    pub fn db(&self) -> &TitleDb {
        &self.db
    }

    /// Where overrides are persisted.
    pub fn overrides_path(&self) -> &Path {
        &self.overrides_path
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
