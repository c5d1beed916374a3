use super::*;

use tempfile::TempDir;

use crate::database::TitleDb;

fn resolver_in(dir: &TempDir) -> ConfigResolver {
    ConfigResolver::new(TitleDb::builtin(), dir.path().join(OVERRIDES_FILE))
}

#[test]
fn unknown_title_gets_fresh_default() {
    let dir = TempDir::new().unwrap();
    let resolver = resolver_in(&dir);

    let a = resolver.resolve("SLUS_999.99");
    assert_eq!(a, EmuConfig::default());

    // Mutating one resolved config must not bleed into the next.
    let mut b = resolver.resolve("SLUS_999.99");
    b.renderer = "Software".to_string();
    assert_eq!(resolver.resolve("SLUS_999.99"), EmuConfig::default());
}

#[test]
fn known_title_gets_database_config() {
    let dir = TempDir::new().unwrap();
    let resolver = resolver_in(&dir);

    let config = resolver.resolve("SCUS_974.72");
    assert_eq!(config.frame_limit, 30);
    assert_eq!(config.internal_resolution, 2);
}

#[test]
fn database_lookup_tolerates_spelling_variants() {
    let dir = TempDir::new().unwrap();
    let resolver = resolver_in(&dir);
    assert_eq!(resolver.resolve("scus-974.72").frame_limit, 30);
}

#[test]
fn override_beats_database() {
    let dir = TempDir::new().unwrap();
    let mut resolver = resolver_in(&dir);

    let mut custom = EmuConfig::default();
    custom.internal_resolution = 6;
    resolver.save_override("SCUS_974.72", custom.clone()).unwrap();

    assert_eq!(resolver.resolve("SCUS_974.72"), custom);
}

#[test]
fn override_key_is_exact_not_normalized() {
    let dir = TempDir::new().unwrap();
    let mut resolver = resolver_in(&dir);

    let mut custom = EmuConfig::default();
    custom.internal_resolution = 6;
    resolver.save_override("SCUS-974.72", custom.clone()).unwrap();

    // Equivalent spelling still resolves through the database tier.
    assert_eq!(resolver.resolve("SCUS_974.72").internal_resolution, 2);
    assert_eq!(resolver.resolve("SCUS-974.72"), custom);
}

#[test]
fn overrides_persist_across_instances() {
    let dir = TempDir::new().unwrap();
    let mut custom = EmuConfig::default();
    custom.vsync = false;

    {
        let mut resolver = resolver_in(&dir);
        resolver.save_override("SLUS_210.05", custom.clone()).unwrap();
    }

    let reloaded = resolver_in(&dir);
    assert_eq!(reloaded.resolve("SLUS_210.05"), custom);
}

#[test]
fn remove_override_restores_database_tier() {
    let dir = TempDir::new().unwrap();
    let mut resolver = resolver_in(&dir);

    let mut custom = EmuConfig::default();
    custom.frame_limit = 120;
    resolver.save_override("SCUS_974.72", custom).unwrap();
    assert_eq!(resolver.resolve("SCUS_974.72").frame_limit, 120);

    assert!(resolver.remove_override("SCUS_974.72").unwrap());
    assert_eq!(resolver.resolve("SCUS_974.72").frame_limit, 30);

    // Removing again reports nothing was there.
    assert!(!resolver.remove_override("SCUS_974.72").unwrap());
}

#[test]
fn malformed_override_file_degrades_to_no_overrides() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(OVERRIDES_FILE), "{{{").unwrap();

    let resolver = resolver_in(&dir);
    assert_eq!(resolver.resolve("SLUS_999.99"), EmuConfig::default());
    assert!(resolver.override_for("SLUS_999.99").is_none());
}
