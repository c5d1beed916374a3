//! Gamepad detection and remapping pipeline.
//!
//! Flow: a [`backend::PadBackend`] enumerates connected devices, the name
//! classifier buckets each into a [`ControllerFamily`], the per-family
//! [`mapping`] table translates physical controls to abstract PS2 controls,
//! and [`pcsx2`] binds the result into the emulator's INI file. The
//! [`monitor`] watches for attach/detach in the background and publishes
//! events to the foreground.

pub mod backend;
pub mod mapping;
pub mod monitor;
pub mod pcsx2;

use serde::{Deserialize, Serialize};

/// Controller hardware families. A closed set — every family has a button
/// table, so an unhandled family is a compile error at the lookup site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerFamily {
    /// Sony DualSense (PS5)
    Ps5DualSense,
    /// Sony DualShock 4 (PS4)
    Ps4DualShock,
    /// Xbox Series X|S controller
    XboxSeries,
    /// Xbox One controller
    XboxOne,
    /// Xbox 360 controller (and XInput lookalikes)
    Xbox360,
    /// Nintendo Switch Pro Controller
    SwitchPro,
    /// Anything with no recognizable vendor string
    Generic,
    /// Family not yet determined
    Unknown,
}

impl ControllerFamily {
    /// Display name for UI and logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ps5DualSense => "DualSense (PS5)",
            Self::Ps4DualShock => "DualShock 4 (PS4)",
            Self::XboxSeries => "Xbox Series X|S",
            Self::XboxOne => "Xbox One",
            Self::Xbox360 => "Xbox 360",
            Self::SwitchPro => "Switch Pro Controller",
            Self::Generic => "Generic",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ControllerFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Name-substring patterns per family, in match priority order.
///
/// Vendor-specific patterns come first; the bare "wireless controller"
/// entry sits last because SDL reports a DualSense that way on many
/// systems, but the phrase also occurs inside Xbox device names.
const NAME_PATTERNS: &[(ControllerFamily, &[&str])] = &[
    (
        ControllerFamily::Ps5DualSense,
        &["dualsense", "ps5", "playstation 5"],
    ),
    (
        ControllerFamily::Ps4DualShock,
        &["dualshock", "ps4", "playstation 4", "sony interactive"],
    ),
    (
        ControllerFamily::XboxSeries,
        &["xbox series", "xbox wireless controller"],
    ),
    (ControllerFamily::XboxOne, &["xbox one", "microsoft xbox one"]),
    (ControllerFamily::Xbox360, &["xbox 360", "xinput"]),
    (
        ControllerFamily::SwitchPro,
        &["switch pro", "nintendo", "pro controller"],
    ),
    (ControllerFamily::Ps5DualSense, &["wireless controller"]),
];

/// Classify a device by its reported name.
///
/// Case-insensitive substring matching against [`NAME_PATTERNS`]; the first
/// family with a hit wins. Best-effort by nature — an unbranded name falls
/// to [`ControllerFamily::Generic`], which shares the Xbox-360 button table
/// (the broadest SDL-compatible layout).
pub fn classify(device_name: &str) -> ControllerFamily {
    let lower = device_name.to_lowercase();
    for (family, patterns) in NAME_PATTERNS {
        if patterns.iter().any(|p| lower.contains(p)) {
            return *family;
        }
    }
    ControllerFamily::Generic
}

/// Snapshot of one connected gamepad. Valid for a single connection
/// session; rebuilt on every rescan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadDescriptor {
    /// Session-local device index.
    pub index: usize,
    /// Name as reported by the driver.
    pub name: String,
    /// Classified controller family.
    pub family: ControllerFamily,
    /// Number of analog axes.
    pub axes: u32,
    /// Number of digital buttons.
    pub buttons: u32,
    /// Number of hat switches (d-pads).
    pub hats: u32,
    /// Hardware GUID, hex-encoded; empty when unavailable.
    pub guid: String,
}

#[cfg(test)]
#[path = "tests/gamepad_tests.rs"]
mod tests;
