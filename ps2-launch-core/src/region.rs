use serde::{Deserialize, Serialize};

/// Release regions for PS2 titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// North America (NTSC-U)
    NtscU,
    /// Japan (NTSC-J)
    NtscJ,
    /// Europe / PAL territories
    Pal,
    /// Korea (NTSC-K)
    NtscK,
    /// Unknown region
    Unknown,
}

impl Region {
    /// Returns the short video-standard code for this region.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NtscU => "NTSC-U",
            Self::NtscJ => "NTSC-J",
            Self::Pal => "PAL",
            Self::NtscK => "NTSC-K",
            Self::Unknown => "UNK",
        }
    }

    /// Returns the full display name of this region.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NtscU => "NTSC-U (USA)",
            Self::NtscJ => "NTSC-J (Japan)",
            Self::Pal => "PAL (Europe)",
            Self::NtscK => "NTSC-K (Korea)",
            Self::Unknown => "Unknown",
        }
    }

    /// Derive the region from a title identifier's four-letter prefix.
    ///
    /// `SLUS_210.05` → NTSC-U, `SLES_548.41` → PAL, and so on. Identifiers
    /// shorter than four characters or with an unrecognized prefix map to
    /// [`Region::Unknown`].
    pub fn from_title_id(id: &str) -> Self {
        let Some(prefix) = id.get(..4) else {
            return Self::Unknown;
        };
        match prefix.to_uppercase().as_str() {
            "SLUS" | "SCUS" => Self::NtscU,
            "SLPM" | "SLPS" | "SCPS" => Self::NtscJ,
            "SLES" | "SCES" => Self::Pal,
            "SLKA" => Self::NtscK,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_title_id() {
        assert_eq!(Region::from_title_id("SLUS_210.05"), Region::NtscU);
        assert_eq!(Region::from_title_id("SCUS_974.72"), Region::NtscU);
        assert_eq!(Region::from_title_id("SLES_548.41"), Region::Pal);
        assert_eq!(Region::from_title_id("slpm_621.05"), Region::NtscJ);
        assert_eq!(Region::from_title_id("SLKA-25001"), Region::NtscK);
        assert_eq!(Region::from_title_id("XXXX_000.00"), Region::Unknown);
        assert_eq!(Region::from_title_id("SL"), Region::Unknown);
    }
}
