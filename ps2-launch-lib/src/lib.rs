//! ps2-launch engine: disc scanning, title database, configuration
//! resolution, and the gamepad detection/remapping pipeline.
//!
//! The CLI (and any other frontend) drives everything through this crate.
//! Scanning and resolution never fail past their own boundary — they degrade
//! to documented fallbacks. The one exception is the PCSX2 pad patcher,
//! whose failures are surfaced so stale bindings don't go unnoticed.

pub mod database;
pub mod error;
pub mod gamepad;
pub mod keyboard;
pub mod resolver;
pub mod scanner;
pub mod settings;
mod store;

pub use database::{TitleDb, TitleRecord};
pub use error::StoreError;
pub use gamepad::{ControllerFamily, PadDescriptor, classify};
pub use gamepad::backend::{BackendError, GilrsBackend, PadBackend};
pub use gamepad::mapping::{
    ButtonMapping, PadControl, button_label, control_for_axis, control_for_button, mapping_for,
};
pub use gamepad::monitor::{PadEvent, PadMonitor};
pub use gamepad::pcsx2::{PatchError, apply_pad_profile, default_ini_path};
pub use keyboard::KeyboardMap;
pub use resolver::ConfigResolver;
pub use scanner::{DiscEntry, scan};
pub use settings::LauncherSettings;

/// Canonical configuration directory for all persisted launcher documents:
/// `~/.config/ps2-launch` (platform equivalent via `dirs`).
pub fn config_dir() -> std::path::PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    base.join("ps2-launch")
}
