//! Scan-angle codec.
//!
//! The wire carries the antenna position as a 12-bit code split across two
//! header fields. Decoding sums a fixed degrees-per-bit weight for every set
//! bit, shifts by the standard's reference offset and wraps into [0, 360).

use crate::consts::{SCAN_ANGLE_REFERENCE_OFFSET_DEGREES, SCAN_ANGLE_WEIGHT_DEGREES};

/// Mask for a valid 12-bit scan-angle code.
pub const SCAN_ANGLE_MASK: u16 = 0x0FFF;

/// Decode a 12-bit scan-angle code into a bearing in degrees.
///
/// The result is always in [0, 360). The pre-wrap value can be negative
/// because of the reference offset, so the wrap uses floored modulo.
pub fn decode(code: u16) -> f64 {
    debug_assert_eq!(code & !SCAN_ANGLE_MASK, 0, "scan angle code out of range");

    let mut degrees = 0.0;
    for (bit, weight) in SCAN_ANGLE_WEIGHT_DEGREES.iter().enumerate() {
        degrees += f64::from(code >> bit & 1) * weight;
    }

    (degrees - SCAN_ANGLE_REFERENCE_OFFSET_DEGREES).rem_euclid(360.0)
}

/// Split a scan-angle code into its two header fields: the low 5 bits and
/// the high 7 bits.
pub fn split(code: u16) -> (u8, u8) {
    ((code & 0x1F) as u8, (code >> 5 & 0x7F) as u8)
}

/// Reassemble a scan-angle code from the two header fields.
pub fn reassemble(low5: u8, high7: u8) -> u16 {
    u16::from(low5) & 0x1F | (u16::from(high7) & 0x7F) << 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SCAN_ANGLES_PER_REV;

    #[test]
    fn split_reassemble_round_trip() {
        for code in 0..SCAN_ANGLES_PER_REV {
            let (low5, high7) = split(code);
            assert_eq!(reassemble(low5, high7), code);
        }
    }

    #[test]
    fn bearing_always_normalized() {
        for code in 0..SCAN_ANGLES_PER_REV {
            let bearing = decode(code);
            assert!(
                (0.0..360.0).contains(&bearing),
                "code {} decoded to {}",
                code,
                bearing
            );
        }
    }

    #[test]
    fn zero_code_points_at_reference() {
        // 0 - 90 wraps to 270 under floored modulo.
        assert_eq!(decode(0), 270.0);
    }

    #[test]
    fn full_code_decodes_to_weight_sum() {
        let sum: f64 = SCAN_ANGLE_WEIGHT_DEGREES.iter().sum();
        let expected = (sum - 90.0).rem_euclid(360.0);
        assert!((decode(0x0FFF) - expected).abs() < 1e-9);
    }

    #[test]
    fn adjacent_codes_step_by_minimum_resolution() {
        let step = decode(1) - decode(0);
        assert!((step - 0.0879).abs() < 1e-9);
    }
}
