use crate::encoder::bits::BitBuffer;
use crate::encoder::modes::{Mode, Segment};
use crate::error::EncodeError;

/// Alphanumeric character set in index order (values 0-44)
const ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Alphanumeric mode encoder (Mode 0010)
/// Pairs = 11 bits (a*45 + b), trailing single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Check that every character is in the 45-character set
    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
    }

    /// Encode a string into an alphanumeric segment
    pub fn encode(text: &str) -> Result<Segment, EncodeError> {
        let mut data = BitBuffer::new();
        let mut accum: u32 = 0;
        let mut accum_count = 0;
        let mut char_count = 0;

        for c in text.chars() {
            let value = ALPHANUMERIC_CHARSET.find(c).ok_or(EncodeError::Domain(
                "string contains unencodable characters in alphanumeric mode",
            ))?;
            accum = accum * 45 + value as u32;
            accum_count += 1;
            char_count += 1;
            if accum_count == 2 {
                data.append_bits(accum, 11);
                accum = 0;
                accum_count = 0;
            }
        }
        if accum_count == 1 {
            data.append_bits(accum, 6);
        }

        Ok(Segment::new(Mode::Alphanumeric, char_count, data))
    }
}
