//! Error types for Wirepack operations.
//!
//! This module provides the error type shared by the codec and framing
//! layers. The split follows the codec's error taxonomy: encode-side
//! failures are fatal to the current call, decode-side "not enough input"
//! is never an error (the decompressor simply retains state), and the
//! invariant variants mark defects rather than runtime conditions.

use std::io;
use thiserror::Error;

/// The main error type for Wirepack operations.
#[derive(Debug, Error)]
pub enum WirepackError {
    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A value to encode falls outside its representable range.
    #[error("Value out of range for {what}: {value} not in [{min}, {max}]")]
    EncodeRange {
        /// What was being encoded (e.g. "match length").
        what: &'static str,
        /// The offending value.
        value: u64,
        /// Smallest representable value.
        min: u64,
        /// Largest representable value.
        max: u64,
    },

    /// An internal consistency check failed on the encode side.
    ///
    /// This indicates a defect in the encoder, not a runtime condition;
    /// correct match-search logic never produces one.
    #[error("Encoder invariant violated: {message}")]
    EncodeInvariant {
        /// Description of the violated invariant.
        message: &'static str,
    },

    /// An internal consistency check failed on the decode side.
    ///
    /// Reserved for states unreachable from any input byte sequence. A
    /// decoder that cannot confirm a token stalls and waits for more
    /// input instead; this variant fires only on defects.
    #[error("Decoder invariant violated: {message}")]
    DecodeInvariant {
        /// Description of the violated invariant.
        message: &'static str,
    },

    /// Unexpected end of buffered data in the framing layer.
    #[error("Unexpected end of buffer: need {needed} bytes, have {available}")]
    UnexpectedEof {
        /// Number of bytes the read required.
        needed: usize,
        /// Number of bytes actually available.
        available: usize,
    },

    /// A length-prefixed string did not decode as valid UTF-16LE.
    #[error("Invalid string payload: {message}")]
    InvalidString {
        /// Description of the decoding failure.
        message: &'static str,
    },
}

/// Result type alias for Wirepack operations.
pub type Result<T> = std::result::Result<T, WirepackError>;

impl WirepackError {
    /// Create an encode range error.
    pub fn encode_range(what: &'static str, value: u64, min: u64, max: u64) -> Self {
        Self::EncodeRange {
            what,
            value,
            min,
            max,
        }
    }

    /// Create an encoder invariant error.
    pub fn encode_invariant(message: &'static str) -> Self {
        Self::EncodeInvariant { message }
    }

    /// Create a decoder invariant error.
    pub fn decode_invariant(message: &'static str) -> Self {
        Self::DecodeInvariant { message }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(needed: usize, available: usize) -> Self {
        Self::UnexpectedEof { needed, available }
    }

    /// Create an invalid string error.
    pub fn invalid_string(message: &'static str) -> Self {
        Self::InvalidString { message }
    }
}
