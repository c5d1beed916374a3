use super::*;

use ps2_launch_core::{EmuConfig, Region};

#[test]
fn builtin_loads_without_duplicates() {
    let db = TitleDb::builtin();
    assert!(!db.is_empty());

    // Every record must be reachable under its own id.
    for rec in db.iter() {
        assert!(db.lookup(&rec.id).is_some(), "unreachable record {}", rec.id);
    }
}

#[test]
fn lookup_is_spelling_tolerant() {
    let db = TitleDb::builtin();
    let canonical = db.lookup("SLUS_210.05").unwrap();

    for variant in ["SLUS-210.05", "SLUS21005", "slus_210.05", "SLUS.210-05"] {
        let found = db.lookup(variant).unwrap();
        assert_eq!(found, canonical, "variant {variant} missed");
    }
}

#[test]
fn lookup_miss_is_none() {
    let db = TitleDb::builtin();
    assert!(db.lookup("SLUS_999.99").is_none());
    assert!(db.lookup("").is_none());
}

#[test]
fn duplicate_keys_keep_first_entry() {
    let a = record(
        "SCUS_971.99",
        "First",
        Region::NtscU,
        "Dev A",
        2002,
        "Platformer",
        EmuConfig::default(),
    );
    // Equivalent spelling, not byte-equal.
    let b = record(
        "SCUS-971.99",
        "Second",
        Region::NtscU,
        "Dev B",
        2005,
        "Action",
        EmuConfig::default(),
    );

    let db = TitleDb::from_records(vec![a, b]);
    assert_eq!(db.len(), 1);
    assert_eq!(db.lookup("SCUS_971.99").unwrap().name, "First");
}

#[test]
fn gow_and_ratchet_are_distinct_titles() {
    let db = TitleDb::builtin();
    let gow = db.lookup("SCUS_973.99").unwrap();
    let ratchet = db.lookup("SCUS_971.99").unwrap();
    assert_eq!(gow.name, "God of War");
    assert_eq!(ratchet.name, "Ratchet & Clank");
}

#[test]
fn title_name_falls_back_for_unknown_ids() {
    let db = TitleDb::builtin();
    assert_eq!(db.title_name("SLUS_210.05", None), "Kingdom Hearts");
    assert_eq!(db.title_name("SLUS_999.99", Some("My Dump")), "My Dump");
    assert_eq!(db.title_name("SLUS_999.99", None), "SLUS_999.99");
}

#[test]
fn pal_records_run_at_50fps() {
    let db = TitleDb::builtin();
    let pal = db.lookup("SLES_548.39").unwrap();
    assert_eq!(pal.region, Region::Pal);
    assert_eq!(pal.config.frame_limit, 50);

    let ntsc = db.lookup("SLUS_216.64").unwrap();
    assert_eq!(ntsc.region, Region::NtscU);
    assert_eq!(ntsc.config.frame_limit, 60);
}

#[test]
fn colossus_carries_its_underclock_profile() {
    let db = TitleDb::builtin();
    let config = &db.lookup("SCUS_974.72").unwrap().config;
    assert_eq!(config.internal_resolution, 2);
    assert_eq!(config.frame_limit, 30);
    assert_eq!(config.ee_cycle_rate, -1);
    assert!(!config.mtvu);
    assert_eq!(config.game_fixes, vec!["EETimingHack".to_string()]);
}
