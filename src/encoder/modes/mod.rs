//! QR code data mode encoders
//!
//! This module contains encoders for the supported data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Digits, uppercase letters, and nine symbols
//! - Byte: 8-bit data (UTF-8, binary, etc.)
//! - Eci: Extended channel interpretation designators

pub mod alphanumeric;
pub mod byte;
pub mod eci;
pub mod numeric;

use crate::encoder::bits::BitBuffer;
use crate::error::EncodeError;
use crate::models::Version;

use self::alphanumeric::AlphanumericEncoder;
use self::byte::ByteEncoder;
use self::numeric::NumericEncoder;

/// Data encoding mode of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Digits 0-9 (indicator 0001)
    Numeric,
    /// The 45-character alphanumeric set (indicator 0010)
    Alphanumeric,
    /// Raw 8-bit bytes (indicator 0100)
    Byte,
    /// ECI designator, no payload characters (indicator 0111)
    Eci,
}

/// Per-mode constants: 4-bit indicator plus the character count field
/// widths for the three version bands 1-9, 10-26, 27-40.
static MODE_TABLE: [(u32, [usize; 3]); 4] = [
    (0x1, [10, 12, 14]), // Numeric
    (0x2, [9, 11, 13]),  // Alphanumeric
    (0x4, [8, 16, 16]),  // Byte
    (0x7, [0, 0, 0]),    // Eci
];

impl Mode {
    fn table_entry(&self) -> &'static (u32, [usize; 3]) {
        match self {
            Mode::Numeric => &MODE_TABLE[0],
            Mode::Alphanumeric => &MODE_TABLE[1],
            Mode::Byte => &MODE_TABLE[2],
            Mode::Eci => &MODE_TABLE[3],
        }
    }

    /// Four-bit mode indicator
    pub fn indicator(&self) -> u32 {
        self.table_entry().0
    }

    /// Width of the character count field at the given version
    pub fn char_count_bits(&self, version: Version) -> usize {
        let band = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        self.table_entry().1[band]
    }
}

/// One run of input characters encoded under a single mode
///
/// Carries the payload bits exactly as they will appear in the codeword
/// stream; the mode indicator and character count field are prepended
/// later, once the version (and so the count width) is known.
#[derive(Debug, Clone)]
pub struct Segment {
    mode: Mode,
    char_count: usize,
    data: BitBuffer,
}

impl Segment {
    pub(crate) fn new(mode: Mode, char_count: usize, data: BitBuffer) -> Self {
        Self {
            mode,
            char_count,
            data,
        }
    }

    /// Encoding mode of this segment
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of input characters (0 for ECI segments)
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Payload bits, without header
    pub fn data(&self) -> &BitBuffer {
        &self.data
    }

    /// Split a string into segments, choosing the densest single mode
    ///
    /// All digits selects numeric, all characters in the 45-character set
    /// selects alphanumeric, anything else falls back to UTF-8 byte mode.
    pub fn make_segments(text: &str) -> Result<Vec<Segment>, EncodeError> {
        if text.is_empty() {
            return Err(EncodeError::Domain("text must not be empty"));
        }
        let segment = if NumericEncoder::is_numeric(text) {
            NumericEncoder::encode(text)?
        } else if AlphanumericEncoder::is_alphanumeric(text) {
            AlphanumericEncoder::encode(text)?
        } else {
            ByteEncoder::encode(text.as_bytes())
        };
        Ok(vec![segment])
    }

    /// Total bit length of the segments at the given version
    ///
    /// Returns `None` when a character count does not fit its field width
    /// at this version, or when the sum overflows.
    pub fn total_bits(segments: &[Segment], version: Version) -> Option<usize> {
        let mut result: usize = 0;
        for segment in segments {
            let cc_bits = segment.mode.char_count_bits(version);
            if cc_bits < usize::BITS as usize && segment.char_count >= 1 << cc_bits {
                return None;
            }
            result = result.checked_add(4 + cc_bits)?;
            result = result.checked_add(segment.data.len())?;
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_mode_indicators() {
        assert_eq!(Mode::Numeric.indicator(), 0b0001);
        assert_eq!(Mode::Alphanumeric.indicator(), 0b0010);
        assert_eq!(Mode::Byte.indicator(), 0b0100);
        assert_eq!(Mode::Eci.indicator(), 0b0111);
    }

    #[test]
    fn test_char_count_bits_bands() {
        assert_eq!(Mode::Numeric.char_count_bits(version(9)), 10);
        assert_eq!(Mode::Numeric.char_count_bits(version(10)), 12);
        assert_eq!(Mode::Numeric.char_count_bits(version(27)), 14);
        assert_eq!(Mode::Byte.char_count_bits(version(1)), 8);
        assert_eq!(Mode::Byte.char_count_bits(version(26)), 16);
        assert_eq!(Mode::Eci.char_count_bits(version(40)), 0);
    }

    #[test]
    fn test_mode_chooser() {
        let segments = Segment::make_segments("0123456789").unwrap();
        assert_eq!(segments[0].mode(), Mode::Numeric);

        let segments = Segment::make_segments("HELLO WORLD").unwrap();
        assert_eq!(segments[0].mode(), Mode::Alphanumeric);

        let segments = Segment::make_segments("hello world").unwrap();
        assert_eq!(segments[0].mode(), Mode::Byte);
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(
            Segment::make_segments(""),
            Err(EncodeError::Domain(_))
        ));
    }

    #[test]
    fn test_total_bits() {
        // "HELLO WORLD": 4-bit header + 9-bit count + 5*11 + 6 payload bits
        let segments = Segment::make_segments("HELLO WORLD").unwrap();
        assert_eq!(Segment::total_bits(&segments, version(1)), Some(74));
        // Count width grows with the version band
        assert_eq!(Segment::total_bits(&segments, version(10)), Some(76));
    }

    #[test]
    fn test_total_bits_count_overflow() {
        // 10_000 alphanumeric characters exceed the 13-bit count field even
        // at version 40.
        let text = "A".repeat(10_000);
        let segments = Segment::make_segments(&text).unwrap();
        assert_eq!(Segment::total_bits(&segments, version(40)), None);
    }
}
