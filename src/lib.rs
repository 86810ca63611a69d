//! RustQRGen - Fast QR code generation library
//!
//! A pure Rust QR code encoder (ISO/IEC 18004, Model 2) covering versions
//! 1-40, all four error correction levels, automatic mode and mask
//! selection. The core produces an immutable module grid and performs no
//! I/O; renderers in [`tools`] and external consumers read the grid
//! through [`QrCode::module`].
//!
//! ```no_run
//! use rust_qr_gen::{encode_text, ECLevel};
//!
//! let qr = encode_text("HELLO WORLD", ECLevel::Q).unwrap();
//! for y in 0..qr.size() {
//!     for x in 0..qr.size() {
//!         let _dark = qr.module(x, y);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (segments, error correction, matrix, masking)
pub mod encoder;
/// Encoder error types
pub mod error;
/// Core data structures (QrCode, BitMatrix, Version, etc.)
pub mod models;
/// Renderers consuming the published module grid (text, SVG, PNG)
pub mod tools;

pub use encoder::modes::{Mode, Segment};
pub use encoder::qr_encoder::{encode_segments, EncodeOptions};
pub use error::EncodeError;
pub use models::{BitMatrix, ECLevel, MaskPattern, QrCode, Version};

/// Encode a text string into a QR symbol
///
/// The densest single mode covering the whole string is chosen
/// automatically (numeric, alphanumeric, or UTF-8 byte). The version is
/// the smallest that fits, and the error correction level is boosted when
/// the chosen version still has room.
pub fn encode_text(text: &str, ec_level: ECLevel) -> Result<QrCode, EncodeError> {
    let segments = Segment::make_segments(text)?;
    encode_segments(&segments, ec_level, &EncodeOptions::default())
}

/// Encode raw bytes into a QR symbol, forcing byte mode
pub fn encode_binary(data: &[u8], ec_level: ECLevel) -> Result<QrCode, EncodeError> {
    let segments = vec![encoder::modes::byte::ByteEncoder::encode(data)];
    encode_segments(&segments, ec_level, &EncodeOptions::default())
}

/// Encoder with configuration options
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Create a new encoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the encoding options
    pub fn with_options(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Encode a text string with this encoder's options
    pub fn encode(&self, text: &str, ec_level: ECLevel) -> Result<QrCode, EncodeError> {
        let segments = Segment::make_segments(text)?;
        encode_segments(&segments, ec_level, &self.options)
    }

    /// Encode raw bytes with this encoder's options
    pub fn encode_binary(&self, data: &[u8], ec_level: ECLevel) -> Result<QrCode, EncodeError> {
        let segments = vec![encoder::modes::byte::ByteEncoder::encode(data)];
        encode_segments(&segments, ec_level, &self.options)
    }
}
