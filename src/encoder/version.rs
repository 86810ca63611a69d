//! Symbol capacity and version selection.

use crate::encoder::modes::Segment;
use crate::encoder::tables;
use crate::error::EncodeError;
use crate::models::{ECLevel, Version};

/// Total module capacity available to codewords, in bits
///
/// Closed form over the version number, subtracting the finder, timing,
/// alignment, format and version reservations from the full grid.
pub fn capacity_bits(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    debug_assert!((208..=29648).contains(&result));
    result
}

/// Data codeword capacity after error correction overhead
pub fn capacity_codewords(version: Version, ec_level: ECLevel) -> usize {
    let info = tables::ec_block_info(version, ec_level);
    capacity_bits(version) / 8 - info.ecc_per_block * info.num_blocks
}

/// Pick the smallest version in [min, max] whose capacity holds the segments
///
/// Returns the version together with the segments' bit length at that
/// version. Fails with `DataTooLong` carrying the requirement measured at
/// the maximum allowed version.
pub fn choose_version(
    segments: &[Segment],
    ec_level: ECLevel,
    min_version: Version,
    max_version: Version,
) -> Result<(Version, usize), EncodeError> {
    let mut number = min_version.number();
    loop {
        let version = Version::new(number).expect("scan stays inside [1, 40]");
        let data_capacity = capacity_codewords(version, ec_level) * 8;
        match Segment::total_bits(segments, version) {
            Some(needed) if needed <= data_capacity => return Ok((version, needed)),
            _ if version >= max_version => {
                return Err(EncodeError::DataTooLong {
                    required_bits: unchecked_total_bits(segments, max_version),
                    max_capacity_bits: data_capacity,
                });
            }
            _ => number += 1,
        }
    }
}

/// Raise the error correction level as far as the data still fits
pub fn boost_ec_level(needed_bits: usize, version: Version, requested: ECLevel) -> ECLevel {
    let mut result = requested;
    for level in [ECLevel::M, ECLevel::Q, ECLevel::H] {
        let fits = needed_bits <= capacity_codewords(version, level) * 8;
        if level.ordinal() > result.ordinal() && fits {
            result = level;
        }
    }
    result
}

/// Bit requirement ignoring whether character counts fit their fields
///
/// Used only to populate the `DataTooLong` report when `total_bits`
/// declines to produce a number (oversized counts saturate instead of
/// failing, so the caller still sees how far the input overshoots).
fn unchecked_total_bits(segments: &[Segment], version: Version) -> usize {
    segments
        .iter()
        .map(|s| 4 + s.mode().char_count_bits(version) + s.data().len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_capacity_bits_landmarks() {
        assert_eq!(capacity_bits(version(1)), 208);
        assert_eq!(capacity_bits(version(5)), 1079);
        assert_eq!(capacity_bits(version(40)), 29648);
    }

    #[test]
    fn test_capacity_codewords() {
        // Version 1: 26 raw codewords minus the per-level ECC overhead
        assert_eq!(capacity_codewords(version(1), ECLevel::L), 19);
        assert_eq!(capacity_codewords(version(1), ECLevel::M), 16);
        assert_eq!(capacity_codewords(version(1), ECLevel::Q), 13);
        assert_eq!(capacity_codewords(version(1), ECLevel::H), 9);
        // Version 40 H
        assert_eq!(capacity_codewords(version(40), ECLevel::H), 1276);
    }

    #[test]
    fn test_choose_version_first_fit() {
        let segments = Segment::make_segments("HELLO WORLD").unwrap();
        let (v, needed) =
            choose_version(&segments, ECLevel::Q, Version::MIN, Version::MAX).unwrap();
        assert_eq!(v.number(), 1);
        assert_eq!(needed, 74);
    }

    #[test]
    fn test_choose_version_too_long() {
        let text = "A".repeat(10_000);
        let segments = Segment::make_segments(&text).unwrap();
        let err = choose_version(&segments, ECLevel::H, Version::MIN, Version::MAX).unwrap_err();
        match err {
            EncodeError::DataTooLong {
                required_bits,
                max_capacity_bits,
            } => {
                // 4 + 13-bit count + 5000 pairs * 11 bits
                assert_eq!(required_bits, 4 + 13 + 55_000);
                assert_eq!(max_capacity_bits, 1276 * 8);
            }
            other => panic!("expected DataTooLong, got {other:?}"),
        }
    }

    #[test]
    fn test_boost_ec_level() {
        // 48 bits fit version 1 even at H (72 bits)
        assert_eq!(boost_ec_level(48, version(1), ECLevel::L), ECLevel::H);
        // 74 bits fit Q (104) but not H (72)
        assert_eq!(boost_ec_level(74, version(1), ECLevel::Q), ECLevel::Q);
        // Never lowers the requested level
        assert_eq!(boost_ec_level(48, version(1), ECLevel::H), ECLevel::H);
    }
}
