use super::*;

use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;

#[test]
fn missing_file_yields_default() {
    let dir = TempDir::new().unwrap();
    let value: HashMap<String, String> = read_json_or_default(&dir.path().join("absent.json"));
    assert!(value.is_empty());
}

#[test]
fn malformed_file_yields_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let value: HashMap<String, String> = read_json_or_default(&path);
    assert!(value.is_empty());
}

#[test]
fn write_then_read_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.json");

    let mut value = HashMap::new();
    value.insert("renderer".to_string(), "Vulkan".to_string());
    write_json_atomic(&path, &value).unwrap();

    let loaded: HashMap<String, String> = read_json_or_default(&path);
    assert_eq!(loaded, value);
}

#[test]
fn write_creates_missing_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("doc.json");

    let value = vec![1u32, 2, 3];
    write_json_atomic(&path, &value).unwrap();
    assert!(path.is_file());
}

#[test]
fn write_leaves_no_temp_file_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.json");
    write_json_atomic(&path, &vec!["x"]).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["doc.json".to_string()]);
}
