use super::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = LauncherSettings::load_from(&dir.path().join("absent.json"));
    assert_eq!(settings, LauncherSettings::default());
}

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let settings = LauncherSettings {
        pcsx2_path: Some(PathBuf::from("/opt/pcsx2/pcsx2")),
        pcsx2_config_dir: Some(PathBuf::from("/home/user/.config/PCSX2")),
        roms_dir: Some(PathBuf::from("/srv/roms/ps2")),
    };
    settings.save_to(&path).unwrap();

    assert_eq!(LauncherSettings::load_from(&path), settings);
}

#[test]
fn corrupted_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "not json at all").unwrap();

    assert_eq!(LauncherSettings::load_from(&path), LauncherSettings::default());
}

#[test]
fn partial_document_fills_missing_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"roms_dir": "/srv/roms"}"#).unwrap();

    let settings = LauncherSettings::load_from(&path);
    assert_eq!(settings.roms_dir, Some(PathBuf::from("/srv/roms")));
    assert_eq!(settings.pcsx2_path, None);
    assert_eq!(settings.pcsx2_config_dir, None);
}

#[test]
fn save_repairs_corrupted_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "garbage").unwrap();

    let mut settings = LauncherSettings::load_from(&path);
    settings.roms_dir = Some(PathBuf::from("/srv/roms"));
    settings.save_to(&path).unwrap();

    assert_eq!(LauncherSettings::load_from(&path), settings);
}
