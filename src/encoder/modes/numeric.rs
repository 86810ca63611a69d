use crate::encoder::bits::BitBuffer;
use crate::encoder::modes::{Mode, Segment};
use crate::error::EncodeError;

/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
pub struct NumericEncoder;

impl NumericEncoder {
    /// Check that every character is a decimal digit
    pub fn is_numeric(text: &str) -> bool {
        text.bytes().all(|b| b.is_ascii_digit())
    }

    /// Encode a digit string into a numeric segment
    pub fn encode(text: &str) -> Result<Segment, EncodeError> {
        let mut data = BitBuffer::new();
        let mut accum: u32 = 0;
        let mut accum_count = 0;
        let mut char_count = 0;

        for b in text.bytes() {
            if !b.is_ascii_digit() {
                return Err(EncodeError::Domain(
                    "string contains non-digit characters in numeric mode",
                ));
            }
            accum = accum * 10 + u32::from(b - b'0');
            accum_count += 1;
            char_count += 1;
            if accum_count == 3 {
                data.append_bits(accum, 10);
                accum = 0;
                accum_count = 0;
            }
        }
        match accum_count {
            1 => data.append_bits(accum, 4),
            2 => data.append_bits(accum, 7),
            _ => {}
        }

        Ok(Segment::new(Mode::Numeric, char_count, data))
    }
}
