//! Device enumeration backends.
//!
//! [`PadBackend`] is the seam between the hot-plug monitor and the actual
//! input stack: production uses [`GilrsBackend`], tests substitute a scripted
//! implementation and never touch real hardware.

use gilrs::{Axis, Button, Gamepad, Gilrs};
use thiserror::Error;

use super::{PadDescriptor, classify};

#[derive(Debug, Error)]
pub enum BackendError {
    /// The platform input stack refused to initialize.
    #[error("gamepad backend failed to initialize: {0}")]
    Init(String),
}

/// A source of connected-gamepad snapshots.
pub trait PadBackend {
    /// Re-enumerate and return every currently connected pad.
    fn rescan(&mut self) -> Vec<PadDescriptor>;
}

/// Production backend over the `gilrs` input library.
pub struct GilrsBackend {
    gilrs: Gilrs,
}

impl GilrsBackend {
    pub fn new() -> Result<Self, BackendError> {
        let gilrs = Gilrs::new().map_err(|e| BackendError::Init(e.to_string()))?;
        Ok(Self { gilrs })
    }
}

impl PadBackend for GilrsBackend {
    fn rescan(&mut self) -> Vec<PadDescriptor> {
        // gilrs only notices connect/disconnect while its event queue is
        // drained, so pump it before enumerating.
        while self.gilrs.next_event().is_some() {}

        self.gilrs
            .gamepads()
            .filter(|(_, pad)| pad.is_connected())
            .map(|(id, pad)| describe(usize::from(id), &pad))
            .collect()
    }
}

/// `None` behaves as a backend with no devices, so a failed initialization
/// can still feed the monitor.
impl<B: PadBackend> PadBackend for Option<B> {
    fn rescan(&mut self) -> Vec<PadDescriptor> {
        match self {
            Some(backend) => backend.rescan(),
            None => Vec::new(),
        }
    }
}

/// Buttons probed to estimate the reported button count.
const PROBE_BUTTONS: &[Button] = &[
    Button::South,
    Button::East,
    Button::North,
    Button::West,
    Button::LeftTrigger,
    Button::LeftTrigger2,
    Button::RightTrigger,
    Button::RightTrigger2,
    Button::Select,
    Button::Start,
    Button::Mode,
    Button::LeftThumb,
    Button::RightThumb,
    Button::DPadUp,
    Button::DPadDown,
    Button::DPadLeft,
    Button::DPadRight,
    Button::C,
    Button::Z,
];

/// Axes probed to estimate the reported axis count.
const PROBE_AXES: &[Axis] = &[
    Axis::LeftStickX,
    Axis::LeftStickY,
    Axis::LeftZ,
    Axis::RightStickX,
    Axis::RightStickY,
    Axis::RightZ,
];

fn describe(index: usize, pad: &Gamepad<'_>) -> PadDescriptor {
    let name = pad.name().to_string();
    let family = classify(&name);
    let buttons = PROBE_BUTTONS
        .iter()
        .filter(|b| pad.button_code(**b).is_some())
        .count() as u32;
    let axes = PROBE_AXES
        .iter()
        .filter(|a| pad.axis_code(**a).is_some())
        .count() as u32;
    // gilrs folds the hat into d-pad buttons; report one hat if present.
    let hats = u32::from(pad.button_code(Button::DPadUp).is_some());
    let guid = hex_guid(&pad.uuid());

    PadDescriptor {
        index,
        name,
        family,
        axes,
        buttons,
        hats,
        guid,
    }
}

fn hex_guid(uuid: &[u8; 16]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(32);
    for byte in uuid {
        // writing to a String cannot fail
        let _ = write!(out, "{byte:02x}");
    }
    out
}
