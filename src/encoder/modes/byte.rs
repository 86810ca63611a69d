use crate::encoder::bits::BitBuffer;
use crate::encoder::modes::{Mode, Segment};

/// Byte mode encoder (Mode 0100)
/// Every input byte becomes 8 payload bits
pub struct ByteEncoder;

impl ByteEncoder {
    /// Encode raw bytes into a byte segment; any content is valid
    pub fn encode(data: &[u8]) -> Segment {
        let mut bits = BitBuffer::new();
        for &b in data {
            bits.append_bits(u32::from(b), 8);
        }
        Segment::new(Mode::Byte, data.len(), bits)
    }
}
