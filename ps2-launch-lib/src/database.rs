//! Curated title database: per-title metadata and recommended PCSX2
//! configuration.
//!
//! The backing store is a built-in table loaded once at startup. Records are
//! never mutated at runtime — resolution clones before handing anything to a
//! caller. Lookup tolerates identifier spelling drift via the normalizer.

use std::collections::HashMap;

use ps2_launch_core::{EmuConfig, Region, equivalent, normalize};

/// Metadata and recommended configuration for one known title.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleRecord {
    /// Canonical identifier as printed on the disc (e.g. `SLUS_210.05`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Release region.
    pub region: Region,
    /// Developer.
    pub developer: String,
    /// Release year.
    pub year: u16,
    /// Genre label.
    pub genre: String,
    /// Recommended emulator configuration.
    pub config: EmuConfig,
}

/// The title database: insertion-ordered records with a normalized index
/// for the exact-lookup fast path.
pub struct TitleDb {
    records: Vec<TitleRecord>,
    index: HashMap<String, usize>,
}

impl TitleDb {
    /// Load the built-in curated database.
    pub fn builtin() -> Self {
        Self::from_records(builtin_records())
    }

    /// Build a database from explicit records.
    ///
    /// Records whose identifier is equivalent to an already-loaded one are
    /// rejected with a loud warning — a duplicate key in curated data is a
    /// data-entry defect, and silently shadowing an earlier title would hide
    /// it. First entry wins.
    pub fn from_records(records: Vec<TitleRecord>) -> Self {
        let mut kept: Vec<TitleRecord> = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());

        for record in records {
            let key = normalize(&record.id);
            if let Some(&existing) = index.get(&key) {
                let first: &TitleRecord = &kept[existing];
                log::warn!(
                    "duplicate title id {} ({:?} vs earlier {:?}); keeping the first entry",
                    record.id,
                    record.name,
                    first.name,
                );
                continue;
            }
            index.insert(key, kept.len());
            kept.push(record);
        }

        Self {
            records: kept,
            index,
        }
    }

    /// Look up a record by title identifier.
    ///
    /// Exact normalized lookup first; on a miss, a linear scan applying
    /// [`equivalent`] against every key. With the duplicate guard in
    /// [`from_records`] the linear scan can only ever find one match, in
    /// insertion order.
    pub fn lookup(&self, id: &str) -> Option<&TitleRecord> {
        if let Some(&i) = self.index.get(&normalize(id)) {
            return Some(&self.records[i]);
        }
        self.records.iter().find(|r| equivalent(&r.id, id))
    }

    /// Display name for an identifier, with a fallback for unknown titles.
    pub fn title_name<'a>(&'a self, id: &'a str, fallback: Option<&'a str>) -> &'a str {
        match self.lookup(id) {
            Some(record) => &record.name,
            None => fallback.unwrap_or(id),
        }
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the database is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TitleRecord> {
        self.records.iter()
    }
}

/// Shorthand constructor for the built-in table below.
#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    name: &str,
    region: Region,
    developer: &str,
    year: u16,
    genre: &str,
    config: EmuConfig,
) -> TitleRecord {
    TitleRecord {
        id: id.to_string(),
        name: name.to_string(),
        region,
        developer: developer.to_string(),
        year,
        genre: genre.to_string(),
        config,
    }
}

/// A 3x-native configuration, the sweet spot for well-behaved titles.
fn config_3x(frame_limit: u32, game_fixes: &[&str]) -> EmuConfig {
    EmuConfig {
        internal_resolution: 3,
        anisotropic_filtering: 16,
        frame_limit,
        game_fixes: game_fixes.iter().map(|f| f.to_string()).collect(),
        ..EmuConfig::default()
    }
}

/// The curated table.
///
/// Upstream launcher data registered both God of War and Ratchet & Clank
/// under SCUS_971.99; the serials here are the corrected ones.
fn builtin_records() -> Vec<TitleRecord> {
    vec![
        // -- Crash of the Titans --
        record(
            "SLUS_216.64",
            "Crash of the Titans",
            Region::NtscU,
            "Radical Entertainment",
            2007,
            "Action/Adventure",
            config_3x(60, &["VuAddSubHack"]),
        ),
        record(
            "SLES_548.39",
            "Crash of the Titans",
            Region::Pal,
            "Radical Entertainment",
            2007,
            "Action/Adventure",
            config_3x(50, &["VuAddSubHack"]),
        ),
        record(
            "SLES_548.40",
            "Crash of the Titans",
            Region::Pal,
            "Radical Entertainment",
            2007,
            "Action/Adventure",
            config_3x(50, &["VuAddSubHack"]),
        ),
        record(
            "SLES_548.41",
            "Crash of the Titans",
            Region::Pal,
            "Radical Entertainment",
            2007,
            "Action/Adventure",
            config_3x(50, &["VuAddSubHack"]),
        ),
        // -- God of War --
        record(
            "SCUS_973.99",
            "God of War",
            Region::NtscU,
            "Santa Monica Studio",
            2005,
            "Action/Adventure",
            config_3x(60, &[]),
        ),
        record(
            "SCUS_974.81",
            "God of War II",
            Region::NtscU,
            "Santa Monica Studio",
            2007,
            "Action/Adventure",
            config_3x(60, &[]),
        ),
        // -- Kingdom Hearts --
        record(
            "SLUS_210.05",
            "Kingdom Hearts",
            Region::NtscU,
            "Square Enix",
            2002,
            "Action RPG",
            config_3x(60, &[]),
        ),
        // -- Final Fantasy --
        record(
            "SLUS_203.12",
            "Final Fantasy X",
            Region::NtscU,
            "Square Enix",
            2001,
            "RPG",
            config_3x(60, &[]),
        ),
        // -- Shadow of the Colossus --
        // Runs at 30 fps; MTVU and full clocks trip engine bugs, so this one
        // underclocks the EE and stays at 2x.
        record(
            "SCUS_974.72",
            "Shadow of the Colossus",
            Region::NtscU,
            "Team Ico",
            2005,
            "Action/Adventure",
            EmuConfig {
                internal_resolution: 2,
                anisotropic_filtering: 8,
                frame_limit: 30,
                ee_cycle_rate: -1,
                mtvu: false,
                game_fixes: vec!["EETimingHack".to_string()],
                ..EmuConfig::default()
            },
        ),
        // -- Ratchet & Clank --
        record(
            "SCUS_971.99",
            "Ratchet & Clank",
            Region::NtscU,
            "Insomniac Games",
            2002,
            "Platformer",
            config_3x(60, &[]),
        ),
    ]
}

#[cfg(test)]
#[path = "tests/database_tests.rs"]
mod tests;
