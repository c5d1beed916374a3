//! PCSX2 controller profile patching.
//!
//! Rewrites the `[Pad1]` section of `PCSX2.ini` to bind the detected pad as
//! a DualShock 2 through PCSX2's SDL input source. The operation is
//! idempotent: applying the same profile twice leaves the file unchanged,
//! and every byte outside the `[Pad1]` section is preserved exactly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::PadDescriptor;

#[derive(Debug, Error)]
pub enum PatchError {
    /// The INI file does not exist; patching never creates one.
    #[error("PCSX2 configuration not found at {0}")]
    TargetMissing(PathBuf),

    #[error("failed to update {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// DualShock 2 binding block written into `[Pad1]`.
///
/// PCSX2's `SDL-0/...` control names are layout-independent (the SDL
/// gamepad layer already normalizes the physical layout), so the same block
/// works for every family the classifier produces.
const PAD1_BINDINGS: &str = "\
Type = DualShock2
InvertL = 0
InvertR = 0
Deadzone = 0
AxisScale = 1.33
LargeMotorScale = 1
SmallMotorScale = 1
ButtonDeadzone = 0
PressureModifier = 0.5
Up = SDL-0/DPadUp
Right = SDL-0/DPadRight
Down = SDL-0/DPadDown
Left = SDL-0/DPadLeft
Triangle = SDL-0/FaceNorth
Circle = SDL-0/FaceEast
Cross = SDL-0/FaceSouth
Square = SDL-0/FaceWest
Select = SDL-0/Back
Start = SDL-0/Start
L1 = SDL-0/LeftShoulder
L2 = SDL-0/+LeftTrigger
R1 = SDL-0/RightShoulder
R2 = SDL-0/+RightTrigger
L3 = SDL-0/LeftStick
R3 = SDL-0/RightStick
LUp = SDL-0/-LeftY
LRight = SDL-0/+LeftX
LDown = SDL-0/+LeftY
LLeft = SDL-0/-LeftX
RUp = SDL-0/-RightY
RRight = SDL-0/+RightX
RDown = SDL-0/+RightY
RLeft = SDL-0/-RightX
Analog = SDL-0/Guide
LargeMotor = SDL-0/LargeMotor
SmallMotor = SDL-0/SmallMotor";

/// The full `[Pad1]` section for a detected pad.
pub fn pad_profile(_pad: &PadDescriptor) -> String {
    format!("[Pad1]\n{PAD1_BINDINGS}")
}

/// Apply a pad's DualShock 2 profile to the INI at `ini_path`.
///
/// Replaces the existing `[Pad1]` section in place, or appends one if the
/// file has none. The write goes through a temp file and rename so the INI
/// is never left half-written.
pub fn apply_pad_profile(pad: &PadDescriptor, ini_path: &Path) -> Result<(), PatchError> {
    if !ini_path.exists() {
        return Err(PatchError::TargetMissing(ini_path.to_path_buf()));
    }

    let content = fs::read_to_string(ini_path).map_err(|source| PatchError::Io {
        path: ini_path.to_path_buf(),
        source,
    })?;

    let profile = pad_profile(pad);
    let patched = replace_pad_section(&content, &profile);

    if patched == content {
        log::debug!("[Pad1] profile already current in {}", ini_path.display());
        return Ok(());
    }

    let tmp = ini_path.with_extension("ini.tmp");
    fs::write(&tmp, &patched)
        .and_then(|()| fs::rename(&tmp, ini_path))
        .map_err(|source| PatchError::Io {
            path: ini_path.to_path_buf(),
            source,
        })?;

    log::info!(
        "bound {} ({}) as DualShock 2 in {}",
        pad.name,
        pad.family,
        ini_path.display()
    );
    Ok(())
}

/// Replace the `[Pad1]` section of `content` with `profile`.
///
/// The section runs from a `[Pad1]` header at the start of a line to the
/// blank line preceding the next section header, or to end of file. When
/// absent, the profile is appended after a blank line.
fn replace_pad_section(content: &str, profile: &str) -> String {
    match find_section_start(content) {
        Some(start) => {
            let end = section_end(content, start);
            let mut out = String::with_capacity(content.len() + profile.len());
            out.push_str(&content[..start]);
            out.push_str(profile);
            out.push_str(&content[end..]);
            out
        }
        None => format!("{content}\n\n{profile}"),
    }
}

/// Byte offset of a `[Pad1]` header at the start of a line, if any.
fn find_section_start(content: &str) -> Option<usize> {
    const HEADER: &str = "[Pad1]";
    let mut search_from = 0;
    while let Some(rel) = content[search_from..].find(HEADER) {
        let pos = search_from + rel;
        if pos == 0 || content.as_bytes()[pos - 1] == b'\n' {
            return Some(pos);
        }
        search_from = pos + HEADER.len();
    }
    None
}

/// End offset of the section starting at `start`: the first `\n\n[` after
/// it (the section text ends before the blank line), or end of file.
fn section_end(content: &str, start: usize) -> usize {
    content[start..]
        .find("\n\n[")
        .map(|rel| start + rel)
        .unwrap_or(content.len())
}

/// Probe the standard PCSX2 install locations for `PCSX2.ini`.
///
/// Checks the Documents layout used by the Windows installer first, then
/// the per-user config directory layouts.
pub fn default_ini_path() -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(docs) = dirs::document_dir() {
        candidates.push(docs.join("PCSX2").join("inis").join("PCSX2.ini"));
    }
    if let Some(config) = dirs::config_dir() {
        candidates.push(config.join("PCSX2").join("inis").join("PCSX2.ini"));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(
            home.join(".config")
                .join("PCSX2")
                .join("inis")
                .join("PCSX2.ini"),
        );
    }
    candidates.into_iter().find(|p| p.exists())
}

#[cfg(test)]
#[path = "tests/pcsx2_tests.rs"]
mod tests;
