//! QR code encoding modules
//!
//! This module contains all the logic for turning input data into a
//! finished symbol:
//! - Bit buffer assembly and data mode encoders
//! - Capacity tables and version selection
//! - Reed-Solomon error correction and block interleaving
//! - Matrix construction, masking, and penalty scoring

/// BCH protection for format and version info
pub mod bch;
/// Append-only bit buffer
pub mod bits;
/// Mask application and penalty scoring
pub mod mask;
/// Module grid construction (function patterns, data placement)
pub mod matrix;
/// Data mode encoders (numeric, alphanumeric, byte, ECI)
pub mod modes;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// Error correction block geometry tables
pub mod tables;
/// Symbol capacity and version selection
pub mod version;
