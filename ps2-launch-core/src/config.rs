//! Emulator configuration model.
//!
//! `EmuConfig` mirrors the PCSX2 options the launcher tunes per title.
//! Values are only interpreted by the display tables — an out-of-table value
//! is carried through unchanged rather than rejected, so a hand-edited
//! override file keeps working even when it names something we don't label.

use serde::{Deserialize, Serialize};

/// A per-title emulator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmuConfig {
    /// Graphics backend ("Vulkan", "OpenGL", "Direct3D 11", "Direct3D 12").
    pub renderer: String,
    /// Internal resolution multiplier (1 = native).
    pub internal_resolution: u32,
    /// Anisotropic filtering level (0 = off, 2/4/8/16).
    pub anisotropic_filtering: u32,
    /// Texture filtering mode (0..=3).
    pub texture_filtering: u32,
    /// Vertical sync.
    pub vsync: bool,
    /// Frame-rate cap (60 NTSC, 50 PAL).
    pub frame_limit: u32,
    /// EE cycle-rate adjustment (negative = underclock).
    pub ee_cycle_rate: i32,
    /// EE cycle-skip level.
    pub ee_cycle_skip: u32,
    /// VU cycle-stealing level.
    pub vu_cycle_stealing: u32,
    /// Multi-threaded VU1.
    pub mtvu: bool,
    /// Named compatibility fixes, applied in order.
    pub game_fixes: Vec<String>,
    /// Enable the preset speed hacks.
    pub speedhacks: bool,
}

impl Default for EmuConfig {
    /// The global fallback for unrecognized titles: 2x native is safe on
    /// most hardware, everything else at conservative PCSX2 presets.
    fn default() -> Self {
        Self {
            renderer: "Vulkan".to_string(),
            internal_resolution: 2,
            anisotropic_filtering: 8,
            texture_filtering: 2,
            vsync: true,
            frame_limit: 60,
            ee_cycle_rate: 0,
            ee_cycle_skip: 0,
            vu_cycle_stealing: 0,
            mtvu: true,
            game_fixes: Vec::new(),
            speedhacks: true,
        }
    }
}

impl EmuConfig {
    /// Human-readable label for the internal resolution multiplier.
    pub fn resolution_display(&self) -> String {
        resolution_label(self.internal_resolution)
    }

    /// Human-readable label for the anisotropic filtering level.
    pub fn anisotropic_display(&self) -> String {
        anisotropic_label(self.anisotropic_filtering)
    }

    /// Human-readable label for the texture filtering mode.
    pub fn texture_filtering_display(&self) -> String {
        texture_filtering_label(self.texture_filtering)
    }
}

/// Display label for an internal resolution multiplier.
///
/// Unlisted multipliers fall through as the bare number — no range check.
pub fn resolution_label(multiplier: u32) -> String {
    match multiplier {
        1 => "Native (PS2)".to_string(),
        2 => "2x Native (720p)".to_string(),
        3 => "3x Native (1080p)".to_string(),
        4 => "4x Native (1440p)".to_string(),
        5 => "5x Native".to_string(),
        6 => "6x Native (4K)".to_string(),
        other => other.to_string(),
    }
}

/// Display label for an anisotropic filtering level.
pub fn anisotropic_label(level: u32) -> String {
    match level {
        0 => "Off".to_string(),
        2 | 4 | 8 | 16 => format!("{}x", level),
        other => other.to_string(),
    }
}

/// Display label for a texture filtering mode.
pub fn texture_filtering_label(mode: u32) -> String {
    match mode {
        0 => "Nearest".to_string(),
        1 => "Bilinear (Forced)".to_string(),
        2 => "Bilinear (PS2)".to_string(),
        3 => "Bilinear (Forced excluding Sprites)".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_conservative() {
        let cfg = EmuConfig::default();
        assert_eq!(cfg.renderer, "Vulkan");
        assert_eq!(cfg.internal_resolution, 2);
        assert!(cfg.mtvu);
        assert!(cfg.game_fixes.is_empty());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(resolution_label(3), "3x Native (1080p)");
        assert_eq!(anisotropic_label(16), "16x");
        assert_eq!(anisotropic_label(0), "Off");
        assert_eq!(texture_filtering_label(2), "Bilinear (PS2)");
    }

    #[test]
    fn test_unknown_values_pass_through() {
        assert_eq!(resolution_label(9), "9");
        assert_eq!(anisotropic_label(3), "3");
        assert_eq!(texture_filtering_label(7), "7");
    }

    #[test]
    fn test_config_json_round_trip() {
        let mut cfg = EmuConfig::default();
        cfg.game_fixes.push("VuAddSubHack".to_string());
        cfg.frame_limit = 50;
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EmuConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
