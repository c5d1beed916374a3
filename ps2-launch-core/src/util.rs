/// Format a byte count as a human-readable size with two decimals
/// (e.g., "700.00 MB", "4.37 GB").
///
/// Disc images are never clean powers of two, so fractional display is the
/// right default here.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} TB", size)
}

/// Decode a byte slice as ASCII, silently dropping non-ASCII bytes.
///
/// Used on matched identifier bytes pulled out of a raw disc window, where
/// stray high bytes must not abort extraction.
pub fn decode_ascii_lossy(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|&&b| b.is_ascii())
        .map(|&b| b as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(10), "10.00 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(734_003_200), "700.00 MB");
        assert_eq!(format_size(4_699_717_632), "4.38 GB");
    }

    #[test]
    fn test_decode_ascii_lossy() {
        assert_eq!(decode_ascii_lossy(b"SLUS_210.05"), "SLUS_210.05");
        assert_eq!(decode_ascii_lossy(b"SL\xFFUS"), "SLUS");
        assert_eq!(decode_ascii_lossy(b""), "");
    }
}
