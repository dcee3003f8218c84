/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! FIX checksum arithmetic.
//!
//! The FIX checksum is the sum of all bytes in the message (excluding the
//! checksum field itself) modulo 256, formatted as a 3-digit zero-padded string.

use fixdecode_core::{EQUALS, SOH};

/// Sums the byte values of `data`.
///
/// The sum wraps on overflow, which preserves its value modulo 256.
#[inline]
#[must_use]
pub fn byte_sum(data: &[u8]) -> u32 {
    data.iter().fold(0u32, |sum, &b| sum.wrapping_add(b as u32))
}

/// Sums the bytes of a field's wire form, `tag=value<SOH>`, without
/// materialising it.
#[inline]
#[must_use]
pub fn field_byte_sum(tag: &str, value: &str) -> u32 {
    byte_sum(tag.as_bytes())
        .wrapping_add(EQUALS as u32)
        .wrapping_add(byte_sum(value.as_bytes()))
        .wrapping_add(SOH as u32)
}

/// Calculates the FIX checksum for the given data.
///
/// # Arguments
/// * `data` - The message bytes to checksum (excluding the 10=XXX| field)
///
/// # Returns
/// The checksum value as a u8 (0-255).
///
/// # Example
/// ```
/// use fixdecode_tagvalue::calculate_checksum;
///
/// let data = b"8=FIX.4.4\x019=5\x0135=0\x01";
/// assert_eq!(calculate_checksum(data), 163);
/// ```
#[inline]
#[must_use]
pub fn calculate_checksum(data: &[u8]) -> u8 {
    (byte_sum(data) % 256) as u8
}

/// Formats a checksum value as a 3-digit zero-padded string.
///
/// # Returns
/// A 3-character representation (e.g., "042", "255").
#[inline]
#[must_use]
pub fn format_checksum(checksum: u8) -> [u8; 3] {
    let d0 = b'0' + (checksum / 100);
    let d1 = b'0' + ((checksum / 10) % 10);
    let d2 = b'0' + (checksum % 10);
    [d0, d1, d2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_checksum_empty() {
        assert_eq!(calculate_checksum(b""), 0);
    }

    #[test]
    fn test_calculate_checksum_simple() {
        let data = b"ABC";
        let expected = (b'A' as u32 + b'B' as u32 + b'C' as u32) % 256;
        assert_eq!(calculate_checksum(data), expected as u8);
    }

    #[test]
    fn test_calculate_checksum_overflow() {
        let data = vec![255u8; 1000];
        let expected = ((255u32 * 1000) % 256) as u8;
        assert_eq!(calculate_checksum(&data), expected);
    }

    #[test]
    fn test_field_byte_sum_matches_wire_form() {
        let wire = b"35=2\x01";
        assert_eq!(field_byte_sum("35", "2"), byte_sum(wire));
        assert_eq!(field_byte_sum("", ""), (b'=' as u32) + 1);
    }

    #[test]
    fn test_format_checksum() {
        assert_eq!(format_checksum(0), *b"000");
        assert_eq!(format_checksum(36), *b"036");
        assert_eq!(format_checksum(100), *b"100");
        assert_eq!(format_checksum(255), *b"255");
    }
}
