use crate::encoder::bits::BitBuffer;
use crate::encoder::modes::{Mode, Segment};
use crate::error::EncodeError;

/// ECI designator encoder (Mode 0111)
/// The designator value is stored in 8, 2+14 or 3+21 bits by magnitude;
/// the segment carries no characters
pub struct EciEncoder;

impl EciEncoder {
    /// Encode an ECI assignment value; valid range is [0, 1_000_000)
    pub fn encode(value: u32) -> Result<Segment, EncodeError> {
        let mut data = BitBuffer::new();
        if value < 1 << 7 {
            data.append_bits(value, 8);
        } else if value < 1 << 14 {
            data.append_bits(2, 2);
            data.append_bits(value, 14);
        } else if value < 1_000_000 {
            data.append_bits(6, 3);
            data.append_bits(value, 21);
        } else {
            return Err(EncodeError::Domain("ECI designator out of range"));
        }
        Ok(Segment::new(Mode::Eci, 0, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eci_widths() {
        assert_eq!(EciEncoder::encode(0).unwrap().data().len(), 8);
        assert_eq!(EciEncoder::encode(127).unwrap().data().len(), 8);
        assert_eq!(EciEncoder::encode(128).unwrap().data().len(), 16);
        assert_eq!(EciEncoder::encode(16383).unwrap().data().len(), 16);
        assert_eq!(EciEncoder::encode(16384).unwrap().data().len(), 24);
        assert_eq!(EciEncoder::encode(999_999).unwrap().data().len(), 24);
    }

    #[test]
    fn test_eci_out_of_range() {
        assert!(EciEncoder::encode(1_000_000).is_err());
    }

    #[test]
    fn test_eci_has_no_characters() {
        let segment = EciEncoder::encode(26).unwrap();
        assert_eq!(segment.char_count(), 0);
        assert_eq!(segment.mode(), Mode::Eci);
    }
}
