//! Disc image scanner for PS2 ROM directories.
//!
//! Enumerates the immediate files of a directory and pulls a title
//! identifier out of each image's opening window. The SYSTEM.CNF boot
//! record usually sits in the first few dozen sectors, so 2 MiB is enough
//! without reading whole multi-gigabyte images.
//!
//! A file that can't be identified is still listed (with the `UNKNOWN`
//! sentinel); a file that can't be read is skipped with a logged warning.
//! Neither aborts the scan.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use ps2_launch_core::UNKNOWN_ID;
use ps2_launch_core::util::{decode_ascii_lossy, format_size};

/// File extensions treated as PS2 disc images (case-insensitive).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["iso", "bin", "cso", "img"];

/// How much of each image is searched for a title identifier.
const ID_WINDOW_LEN: u64 = 2 * 1024 * 1024;

/// Byte length of the `XXXX_NNN.NN` serial form.
const UNDERSCORE_SERIAL_LEN: usize = 11;

/// Byte length of the `XXXX-NNNNN` serial form.
const HYPHEN_SERIAL_LEN: usize = 10;

/// One disc image found by a scan. Rebuilt from scratch on every scan;
/// nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscEntry {
    /// Extracted title identifier, or `UNKNOWN`.
    pub id: String,
    /// Display name derived from the file name (not authoritative).
    pub name: String,
    /// Absolute path of the image file.
    pub path: PathBuf,
    /// File size in bytes.
    pub size: u64,
    /// Human-readable size string.
    pub size_formatted: String,
    /// Lowercased file extension.
    pub extension: String,
}

/// Scan a directory for PS2 disc images.
///
/// Returns entries sorted by path. A missing or unreadable directory yields
/// an empty list — the caller can't distinguish "no ROMs" from "no folder",
/// which is the intended degradation for a launcher front page.
pub fn scan(dir: &Path) -> Vec<DiscEntry> {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            log::warn!("could not read ROM directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = read_dir
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_supported_extension(path))
        .collect();
    files.sort();

    files.iter().filter_map(|path| read_entry(path)).collect()
}

/// Check whether a path carries one of the supported image extensions.
fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Build a `DiscEntry` for a single image file.
///
/// I/O failures are logged and collapse to `None`; identifier extraction
/// failures fall back to the `UNKNOWN` sentinel and keep the entry.
fn read_entry(path: &Path) -> Option<DiscEntry> {
    let size = match fs::metadata(path) {
        Ok(m) => m.len(),
        Err(e) => {
            log::warn!("skipping {}: {}", path.display(), e);
            return None;
        }
    };

    let mut window = Vec::new();
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("skipping {}: {}", path.display(), e);
            return None;
        }
    };
    if let Err(e) = file.take(ID_WINDOW_LEN).read_to_end(&mut window) {
        log::warn!("skipping {}: {}", path.display(), e);
        return None;
    }

    let id = extract_title_id(&window).unwrap_or_else(|| UNKNOWN_ID.to_string());

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("?");
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    Some(DiscEntry {
        id,
        name: display_name_from_stem(stem),
        path: path.to_path_buf(),
        size,
        size_formatted: format_size(size),
        extension,
    })
}

/// Turn a file stem into a display name: ROM dumps pack words with `_`
/// and `.`, so both become spaces.
fn display_name_from_stem(stem: &str) -> String {
    stem.replace(['_', '.'], " ")
}

/// Search a byte window for a PS2 title identifier.
///
/// Three patterns, in strict priority order, first match wins:
/// 1. `BOOT2 = cdrom0:\XXXX_NNN.NN` — anchored to the boot record key,
///    the most reliable source.
/// 2. Bare `XXXX_NNN.NN` anywhere. False positives from unrelated strings
///    are possible; accepted as a fallback.
/// 3. Bare `XXXX-NNNNN`, the hyphenated five-digit form.
pub fn extract_title_id(window: &[u8]) -> Option<String> {
    find_boot_record_id(window)
        .or_else(|| find_serial(window, is_underscore_serial, UNDERSCORE_SERIAL_LEN))
        .or_else(|| find_serial(window, is_hyphen_serial, HYPHEN_SERIAL_LEN))
        .map(|raw| clean_id(&raw))
}

/// Match `XXXX_NNN.NN` at the start of the slice.
fn is_underscore_serial(w: &[u8]) -> bool {
    w.len() >= UNDERSCORE_SERIAL_LEN
        && w[..4].iter().all(|b| b.is_ascii_uppercase())
        && w[4] == b'_'
        && w[5..8].iter().all(|b| b.is_ascii_digit())
        && w[8] == b'.'
        && w[9..11].iter().all(|b| b.is_ascii_digit())
}

/// Match `XXXX-NNNNN` at the start of the slice.
fn is_hyphen_serial(w: &[u8]) -> bool {
    w.len() >= HYPHEN_SERIAL_LEN
        && w[..4].iter().all(|b| b.is_ascii_uppercase())
        && w[4] == b'-'
        && w[5..10].iter().all(|b| b.is_ascii_digit())
}

/// Scan the window for the first position where `matches` fires.
fn find_serial(window: &[u8], matches: fn(&[u8]) -> bool, len: usize) -> Option<&[u8]> {
    (0..window.len().saturating_sub(len - 1))
        .find(|&i| matches(&window[i..]))
        .map(|i| &window[i..i + len])
}

/// Find the serial inside a `BOOT2 = cdrom0:\...` boot record line.
///
/// Whitespace around `=` is tolerated (SYSTEM.CNF files vary here).
fn find_boot_record_id(window: &[u8]) -> Option<&[u8]> {
    const KEY: &[u8] = b"BOOT2";
    const DEVICE: &[u8] = b"cdrom0:\\";

    let mut pos = 0;
    while let Some(offset) = find_subslice(&window[pos..], KEY) {
        let key_end = pos + offset + KEY.len();

        let eq = skip_blank(window, key_end);
        if window.get(eq) == Some(&b'=') {
            let dev = skip_blank(window, eq + 1);
            if window[dev..].starts_with(DEVICE) {
                let serial = dev + DEVICE.len();
                if is_underscore_serial(&window[serial..]) {
                    return Some(&window[serial..serial + UNDERSCORE_SERIAL_LEN]);
                }
            }
        }

        pos = pos + offset + 1;
    }
    None
}

/// First offset of `needle` within `haystack`.
fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|chunk| chunk == needle)
}

/// Advance past spaces and tabs, returning the first non-blank index.
fn skip_blank(window: &[u8], mut i: usize) -> usize {
    while window.get(i).is_some_and(|&b| b == b' ' || b == b'\t') {
        i += 1;
    }
    i
}

/// Decode matched bytes as ASCII and strip path/version residue
/// (trailing `\`, CD version suffix `;1`).
fn clean_id(raw: &[u8]) -> String {
    decode_ascii_lossy(raw).replace('\\', "").replace(";1", "")
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
