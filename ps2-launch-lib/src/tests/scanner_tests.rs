use super::*;

use std::fs;

use tempfile::TempDir;

fn window_with(content: &[u8], offset: usize) -> Vec<u8> {
    let mut window = vec![0u8; offset + content.len() + 64];
    window[offset..offset + content.len()].copy_from_slice(content);
    window
}

#[test]
fn extracts_id_from_boot_record() {
    let window = window_with(b"BOOT2 = cdrom0:\\SLUS_210.05;1\r\nVER = 1.00", 512);
    assert_eq!(extract_title_id(&window).as_deref(), Some("SLUS_210.05"));
}

#[test]
fn boot_record_tolerates_tight_spacing() {
    let window = window_with(b"BOOT2=cdrom0:\\SCUS_973.99;1", 0);
    assert_eq!(extract_title_id(&window).as_deref(), Some("SCUS_973.99"));
}

#[test]
fn boot_record_tolerates_tabs_around_equals() {
    let window = window_with(b"BOOT2\t =\t cdrom0:\\SLES_548.39;1", 100);
    assert_eq!(extract_title_id(&window).as_deref(), Some("SLES_548.39"));
}

#[test]
fn boot_record_beats_earlier_bare_serial() {
    // A bare serial appears before the boot record; the boot record is the
    // authoritative source and must win.
    let mut window = window_with(b"SLES_999.99 noise", 0);
    window.extend_from_slice(b"BOOT2 = cdrom0:\\SLUS_203.12;1");
    assert_eq!(extract_title_id(&window).as_deref(), Some("SLUS_203.12"));
}

#[test]
fn falls_back_to_bare_underscore_serial() {
    let window = window_with(b"some banner text SCUS_974.72 more text", 64);
    assert_eq!(extract_title_id(&window).as_deref(), Some("SCUS_974.72"));
}

#[test]
fn falls_back_to_hyphenated_serial() {
    let window = window_with(b"label SLUS-21005 end", 32);
    assert_eq!(extract_title_id(&window).as_deref(), Some("SLUS-21005"));
}

#[test]
fn underscore_form_wins_over_hyphen_form() {
    let mut window = window_with(b"SLUS-21005 then ", 0);
    window.extend_from_slice(b"SLUS_210.05");
    assert_eq!(extract_title_id(&window).as_deref(), Some("SLUS_210.05"));
}

#[test]
fn rejects_lowercase_prefix() {
    let window = window_with(b"slus_210.05", 0);
    assert_eq!(extract_title_id(&window), None);
}

#[test]
fn empty_window_yields_none() {
    assert_eq!(extract_title_id(&[]), None);
}

#[test]
fn serial_split_across_window_end_is_not_matched() {
    // Truncated serial at the very end of the window.
    let window = b"BOOT2 = cdrom0:\\SLUS_21".to_vec();
    assert_eq!(extract_title_id(&window), None);
}

#[test]
fn scan_missing_directory_is_empty() {
    let dir = TempDir::new().unwrap();
    let gone = dir.path().join("nope");
    assert!(scan(&gone).is_empty());
}

#[test]
fn scan_lists_unidentifiable_images_as_unknown() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("game.iso"), vec![0u8; 4096]).unwrap();

    let entries = scan(dir.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, UNKNOWN_ID);
    assert_eq!(entries[0].extension, "iso");
    assert_eq!(entries[0].size, 4096);
}

#[test]
fn scan_skips_unsupported_extensions() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
    fs::write(dir.path().join("game.iso"), b"").unwrap();

    let entries = scan(dir.path());
    assert_eq!(entries.len(), 1);
    assert!(entries[0].path.ends_with("game.iso"));
}

#[test]
fn scan_extension_match_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("game.ISO"), b"").unwrap();
    assert_eq!(scan(dir.path()).len(), 1);
}

#[test]
fn scan_extracts_ids_and_sorts_by_path() {
    let dir = TempDir::new().unwrap();
    let mut image = vec![0u8; 1024];
    image.extend_from_slice(b"BOOT2 = cdrom0:\\SLUS_210.05;1");
    fs::write(dir.path().join("b_kingdom_hearts.iso"), &image).unwrap();
    fs::write(dir.path().join("a_mystery.bin"), vec![0u8; 16]).unwrap();

    let entries = scan(dir.path());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, UNKNOWN_ID);
    assert_eq!(entries[1].id, "SLUS_210.05");
    assert_eq!(entries[1].name, "b kingdom hearts");
}

#[test]
fn display_name_replaces_separators() {
    assert_eq!(
        display_name_from_stem("Final_Fantasy.X"),
        "Final Fantasy X"
    );
}
