//! Main QR encoder that orchestrates the encoding pipeline.

use crate::encoder::bits::BitBuffer;
use crate::encoder::mask::{apply_mask, penalty_score};
use crate::encoder::matrix::MatrixBuilder;
use crate::encoder::modes::Segment;
use crate::encoder::reed_solomon::add_ecc_and_interleave;
use crate::encoder::version::{boost_ec_level, capacity_codewords, choose_version};
use crate::error::EncodeError;
use crate::models::{ECLevel, MaskPattern, QrCode, Version};

/// Knobs for segment-level encoding
///
/// The defaults match the plain `encode_text`/`encode_binary` behavior:
/// any version, automatic mask choice, and level boosting on.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Smallest version the selector may pick
    pub min_version: Version,
    /// Largest version the selector may pick
    pub max_version: Version,
    /// Fixed mask pattern; `None` selects the lowest-penalty mask
    pub mask: Option<MaskPattern>,
    /// Raise the error correction level when the chosen version has room
    pub boost_ecl: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            min_version: Version::MIN,
            max_version: Version::MAX,
            mask: None,
            boost_ecl: true,
        }
    }
}

/// Encode pre-built segments into a QR symbol
///
/// Walks versions from `min_version` upward until the segments fit at the
/// requested level, optionally boosts the level, assembles the codeword
/// stream and builds the masked matrix.
pub fn encode_segments(
    segments: &[Segment],
    ec_level: ECLevel,
    options: &EncodeOptions,
) -> Result<QrCode, EncodeError> {
    if options.min_version > options.max_version {
        return Err(EncodeError::Domain("min_version exceeds max_version"));
    }

    let (version, needed_bits) =
        choose_version(segments, ec_level, options.min_version, options.max_version)?;
    let ec_level = if options.boost_ecl {
        boost_ec_level(needed_bits, version, ec_level)
    } else {
        ec_level
    };

    let data = assemble_codewords(segments, version, ec_level, needed_bits);
    Ok(construct(version, ec_level, &data, options.mask))
}

/// Serialize segments into the padded data codeword bytes
///
/// Header and payload per segment, then up to four terminator zero bits
/// (capped by the remaining room), zero bits to the next byte boundary,
/// and alternating 0xEC/0x11 pad bytes out to the full data capacity.
fn assemble_codewords(
    segments: &[Segment],
    version: Version,
    ec_level: ECLevel,
    needed_bits: usize,
) -> Vec<u8> {
    let mut buffer = BitBuffer::new();
    for segment in segments {
        buffer.append_bits(segment.mode().indicator(), 4);
        buffer.append_bits(
            segment.char_count() as u32,
            segment.mode().char_count_bits(version),
        );
        buffer.append_buffer(segment.data());
    }
    assert_eq!(buffer.len(), needed_bits);

    let capacity = capacity_codewords(version, ec_level) * 8;
    assert!(buffer.len() <= capacity);
    buffer.append_bits(0, (capacity - buffer.len()).min(4));
    buffer.append_bits(0, (8 - buffer.len() % 8) % 8);

    let mut pad_byte: u32 = 0xEC;
    while buffer.len() < capacity {
        buffer.append_bits(pad_byte, 8);
        pad_byte ^= 0xEC ^ 0x11;
    }

    let bytes = buffer.into_bytes();
    assert_eq!(bytes.len(), capacity / 8);
    bytes
}

/// Build the matrix, choose a mask, and freeze the symbol
fn construct(
    version: Version,
    ec_level: ECLevel,
    data: &[u8],
    requested_mask: Option<MaskPattern>,
) -> QrCode {
    let mut builder = MatrixBuilder::new(version, ec_level);
    builder.draw_function_patterns();
    let all_codewords = add_ecc_and_interleave(version, ec_level, data);
    builder.draw_codewords(&all_codewords);

    let mask = requested_mask.unwrap_or_else(|| {
        // Try all eight: apply, write format bits, score, undo by XOR.
        // Ties go to the lowest pattern index.
        let mut best = MaskPattern::Pattern0;
        let mut min_penalty = i32::MAX;
        for m in 0..8 {
            let pattern = MaskPattern::from_bits(m).expect("index in range");
            apply_mask(&mut builder.modules, &builder.reserved, pattern);
            builder.draw_format_bits(pattern);
            let penalty = penalty_score(&builder.modules);
            if penalty < min_penalty {
                best = pattern;
                min_penalty = penalty;
            }
            apply_mask(&mut builder.modules, &builder.reserved, pattern);
        }
        best
    });

    apply_mask(&mut builder.modules, &builder.reserved, mask);
    builder.draw_format_bits(mask);
    builder.into_qr(mask)
}
