//! Core types for the ps2-launch workspace: title identifiers, regions,
//! emulator configuration, and small formatting utilities.
//!
//! This crate is dependency-light by design — everything that touches the
//! filesystem or a device lives in `ps2-launch-lib`.

pub mod config;
pub mod region;
pub mod title_id;
pub mod util;

pub use config::EmuConfig;
pub use region::Region;
pub use title_id::{UNKNOWN_ID, equivalent, normalize};
