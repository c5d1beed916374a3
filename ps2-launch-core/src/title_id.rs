//! PS2 title identifier normalization.
//!
//! Disc headers, filenames, and database keys spell the same serial in
//! different ways (`SLES-548.41`, `SLES_548.41`, `SLES54841`). Comparisons
//! go through a canonical form so those variants are treated as one title.

/// Sentinel identifier for discs whose serial could not be extracted.
pub const UNKNOWN_ID: &str = "UNKNOWN";

/// Canonicalize a title identifier: strip `-`, `_`, `.` and uppercase.
///
/// Pure and idempotent — `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(id: &str) -> String {
    id.chars()
        .filter(|c| !matches!(c, '-' | '_' | '.'))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Two identifiers are equivalent when their canonical forms are equal.
pub fn equivalent(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("SLUS_210.05"), "SLUS21005");
        assert_eq!(normalize("SLES-548.41"), "SLES54841");
        assert_eq!(normalize("slus_210.05"), "SLUS21005");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for id in ["SLUS_210.05", "SLES-548.41", "scus97472", "A-B_C.D"] {
            assert_eq!(normalize(&normalize(id)), normalize(id));
        }
    }

    #[test]
    fn test_equivalent_is_reflexive_and_symmetric() {
        let ids = ["SLUS_210.05", "SLUS-210.05", "slus21005", "SCES_503.61"];
        for a in ids {
            assert!(equivalent(a, a));
            for b in ids {
                assert_eq!(equivalent(a, b), equivalent(b, a));
            }
        }
    }

    #[test]
    fn test_equivalent_tolerates_separator_variants() {
        assert!(equivalent("SLES-548.41", "SLES_548.41"));
        assert!(equivalent("SLUS_210.05", "SLUS21005"));
        assert!(!equivalent("SLUS_210.05", "SLUS_210.06"));
    }
}
