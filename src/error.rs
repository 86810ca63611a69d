//! Encoder error types.

use thiserror::Error;

/// Errors that can occur while generating a QR code.
///
/// Internal invariants (grid dimensions, codeword counts, penalty bounds)
/// are guarded with assertions instead; tripping one is a bug in this
/// library, not a condition a caller can cause or handle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Precondition violation on a caller-supplied argument.
    #[error("invalid argument: {0}")]
    Domain(&'static str),

    /// The data does not fit in any version of the allowed range.
    #[error("data too long: {required_bits} bits needed, {max_capacity_bits} bits available")]
    DataTooLong {
        /// Bits the segments would occupy at the maximum allowed version.
        required_bits: usize,
        /// Data capacity in bits at the maximum allowed version and level.
        max_capacity_bits: usize,
    },
}
