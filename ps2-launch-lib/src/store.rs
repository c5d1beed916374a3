//! JSON document persistence shared by the settings, override, and keyboard
//! stores.
//!
//! Reads degrade: a missing file yields the default value silently, a
//! malformed file yields the default with a logged warning. Writes go
//! through a temp file and an atomic rename so a crash mid-write never
//! leaves a truncated document behind.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Read a JSON document, falling back to `T::default()` when the file is
/// missing or unreadable as the expected shape.
pub(crate) fn read_json_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            log::warn!("could not read {}: {}", path.display(), e);
            return T::default();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(e) => {
            log::warn!(
                "malformed JSON in {} ({}); using defaults",
                path.display(),
                e
            );
            T::default()
        }
    }
}

/// Serialize `value` as pretty JSON and write it atomically.
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let serialized = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serialized)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
