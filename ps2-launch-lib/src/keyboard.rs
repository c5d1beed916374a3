//! Keyboard fallback mapping: abstract PS2 controls to keyboard keys.
//!
//! Defaults cover every control; a saved document only needs to carry the
//! user's deviations. On load the saved values are merged over the defaults
//! (saved wins), so adding a new control in a later release never leaves a
//! hole in an old user's map.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::store;

/// File name of the persisted keyboard mapping.
pub const KEYBOARD_FILE: &str = "controller.json";

/// Built-in control → key table (WASD movement, IJKL face buttons).
const DEFAULT_BINDINGS: &[(&str, &str)] = &[
    ("up", "W"),
    ("down", "S"),
    ("left", "A"),
    ("right", "D"),
    ("cross", "K"),
    ("circle", "L"),
    ("square", "J"),
    ("triangle", "I"),
    ("l1", "Q"),
    ("l2", "E"),
    ("r1", "U"),
    ("r2", "O"),
    ("l3", "Z"),
    ("r3", "C"),
    ("start", "Return"),
    ("select", "BackSpace"),
    ("left_analog_up", "Up"),
    ("left_analog_down", "Down"),
    ("left_analog_left", "Left"),
    ("left_analog_right", "Right"),
];

/// User-editable keyboard mapping, persisted as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardMap {
    bindings: BTreeMap<String, String>,
    path: PathBuf,
}

impl KeyboardMap {
    /// The built-in defaults, bound to a persistence path.
    pub fn defaults(path: impl Into<PathBuf>) -> Self {
        Self {
            bindings: DEFAULT_BINDINGS
                .iter()
                .map(|(control, key)| (control.to_string(), key.to_string()))
                .collect(),
            path: path.into(),
        }
    }

    /// Load from `path`, merging saved bindings over the defaults.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let mut map = Self::defaults(path);
        let saved: BTreeMap<String, String> = store::read_json_or_default(&map.path);
        map.bindings.extend(saved);
        map
    }

    /// Load from the canonical location.
    pub fn load() -> Self {
        Self::load_from(crate::config_dir().join(KEYBOARD_FILE))
    }

    /// The key bound to a control, if the control is known.
    pub fn key_for(&self, control: &str) -> Option<&str> {
        self.bindings.get(control).map(String::as_str)
    }

    /// Rebind a known control and persist. Unknown control names are
    /// rejected without touching the file.
    pub fn set_binding(&mut self, control: &str, key: &str) -> Result<bool, StoreError> {
        if !self.bindings.contains_key(control) {
            return Ok(false);
        }
        self.bindings
            .insert(control.to_string(), key.to_string());
        self.persist()?;
        Ok(true)
    }

    /// Restore the built-in defaults and persist.
    pub fn reset_to_default(&mut self) -> Result<(), StoreError> {
        self.bindings = Self::defaults(&self.path).bindings;
        self.persist()
    }

    /// All bindings, in stable (alphabetical) order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|(control, key)| (control.as_str(), key.as_str()))
    }

    fn persist(&self) -> Result<(), StoreError> {
        store::write_json_atomic(&self.path, &self.bindings)
    }

    /// Where this mapping is persisted.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
#[path = "tests/keyboard_tests.rs"]
mod tests;
