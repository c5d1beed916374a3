//! Physical-control to PS2-control translation tables.
//!
//! Each [`ControllerFamily`] carries a static table mapping raw button and
//! axis indices (as SDL-style drivers number them) to the abstract
//! [`PadControl`] set of a DualShock 2. Tables are data, not code: adding a
//! family means adding rows, never logic.

use super::ControllerFamily;

/// The abstract control set of a DualShock 2.
///
/// One namespace for buttons and axes; `L2`/`R2` appear in button tables on
/// pads with digital triggers and in axis tables on pads with analog ones.
/// Wire names match the persisted keyboard-map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadControl {
    Cross,
    Circle,
    Square,
    Triangle,
    L1,
    L2,
    R1,
    R2,
    L3,
    R3,
    Select,
    Start,
    Up,
    Down,
    Left,
    Right,
    LeftX,
    LeftY,
    RightX,
    RightY,
}

impl PadControl {
    /// Lowercase wire name, shared with the keyboard mapping document.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cross => "cross",
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::L1 => "l1",
            Self::L2 => "l2",
            Self::R1 => "r1",
            Self::R2 => "r2",
            Self::L3 => "l3",
            Self::R3 => "r3",
            Self::Select => "select",
            Self::Start => "start",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::LeftX => "left_x",
            Self::LeftY => "left_y",
            Self::RightX => "right_x",
            Self::RightY => "right_y",
        }
    }
}

impl std::fmt::Display for PadControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One family's translation table. Indices are the driver's raw numbering.
#[derive(Debug, Clone, Copy)]
pub struct ButtonMapping {
    pub buttons: &'static [(u8, PadControl)],
    pub axes: &'static [(u8, PadControl)],
}

/// Sony pads: DualSense and DualShock 4 report identical layouts.
static SONY: ButtonMapping = ButtonMapping {
    buttons: &[
        (0, PadControl::Cross),
        (1, PadControl::Circle),
        (2, PadControl::Square),
        (3, PadControl::Triangle),
        (4, PadControl::Select),
        (5, PadControl::Start),
        (6, PadControl::L3),
        (7, PadControl::R3),
        (8, PadControl::L1),
        (9, PadControl::R1),
        (10, PadControl::Up),
        (11, PadControl::Down),
        (12, PadControl::Left),
        (13, PadControl::Right),
    ],
    axes: &[
        (0, PadControl::LeftX),
        (1, PadControl::LeftY),
        (2, PadControl::RightX),
        (3, PadControl::RightY),
        (4, PadControl::L2),
        (5, PadControl::R2),
    ],
};

/// Xbox Series and Xbox One layout.
static XBOX_MODERN: ButtonMapping = ButtonMapping {
    buttons: &[
        (0, PadControl::Cross),
        (1, PadControl::Circle),
        (2, PadControl::Square),
        (3, PadControl::Triangle),
        (4, PadControl::L1),
        (5, PadControl::R1),
        (6, PadControl::Select),
        (7, PadControl::Start),
        (8, PadControl::L3),
        (9, PadControl::R3),
    ],
    axes: &[
        (0, PadControl::LeftX),
        (1, PadControl::LeftY),
        (2, PadControl::RightX),
        (3, PadControl::RightY),
        (4, PadControl::L2),
        (5, PadControl::R2),
    ],
};

/// Xbox 360 layout. The left trigger sits between the sticks in the axis
/// order, unlike the newer pads. Also the fallback table for generic
/// devices.
static XBOX_360: ButtonMapping = ButtonMapping {
    buttons: &[
        (0, PadControl::Cross),
        (1, PadControl::Circle),
        (2, PadControl::Square),
        (3, PadControl::Triangle),
        (4, PadControl::L1),
        (5, PadControl::R1),
        (6, PadControl::Select),
        (7, PadControl::Start),
        (8, PadControl::L3),
        (9, PadControl::R3),
    ],
    axes: &[
        (0, PadControl::LeftX),
        (1, PadControl::LeftY),
        (2, PadControl::L2),
        (3, PadControl::RightX),
        (4, PadControl::RightY),
        (5, PadControl::R2),
    ],
};

/// Switch Pro layout. A/B and X/Y are physically swapped relative to the
/// Xbox arrangement, and the triggers are digital (no trigger axes).
static SWITCH_PRO: ButtonMapping = ButtonMapping {
    buttons: &[
        (0, PadControl::Circle),
        (1, PadControl::Cross),
        (2, PadControl::Triangle),
        (3, PadControl::Square),
        (4, PadControl::L1),
        (5, PadControl::R1),
        (6, PadControl::L2),
        (7, PadControl::R2),
        (8, PadControl::Select),
        (9, PadControl::Start),
        (10, PadControl::L3),
        (11, PadControl::R3),
    ],
    axes: &[
        (0, PadControl::LeftX),
        (1, PadControl::LeftY),
        (2, PadControl::RightX),
        (3, PadControl::RightY),
    ],
};

/// Look up the translation table for a family. Total over the enum, so any
/// device the classifier produces has a usable mapping.
pub fn mapping_for(family: ControllerFamily) -> &'static ButtonMapping {
    match family {
        ControllerFamily::Ps5DualSense | ControllerFamily::Ps4DualShock => &SONY,
        ControllerFamily::XboxSeries | ControllerFamily::XboxOne => &XBOX_MODERN,
        ControllerFamily::Xbox360 | ControllerFamily::Generic | ControllerFamily::Unknown => {
            &XBOX_360
        }
        ControllerFamily::SwitchPro => &SWITCH_PRO,
    }
}

/// PS2 control bound to a raw button index, if the family's table has one.
pub fn control_for_button(family: ControllerFamily, button: u8) -> Option<PadControl> {
    mapping_for(family)
        .buttons
        .iter()
        .find(|(idx, _)| *idx == button)
        .map(|(_, control)| *control)
}

/// Human-readable label for a raw button: the PS2 control name when mapped,
/// `button_N` otherwise.
pub fn button_label(family: ControllerFamily, button: u8) -> String {
    match control_for_button(family, button) {
        Some(control) => control.name().to_string(),
        None => format!("button_{button}"),
    }
}

/// PS2 control bound to a raw axis index, if the family's table has one.
pub fn control_for_axis(family: ControllerFamily, axis: u8) -> Option<PadControl> {
    mapping_for(family)
        .axes
        .iter()
        .find(|(idx, _)| *idx == axis)
        .map(|(_, control)| *control)
}

#[cfg(test)]
#[path = "tests/mapping_tests.rs"]
mod tests;
