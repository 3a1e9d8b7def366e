//! # Wirepack Core
//!
//! Core components for the Wirepack MPPC stream-compression library.
//!
//! This crate provides the building blocks the codec is assembled from:
//!
//! - [`bitstream`]: MSB-first bit packing and cursor-based bit reading
//! - [`history`]: the fixed 8192-byte sliding-window segment history
//! - [`buffer`]: wire buffer with CUInt and length-prefixed framing
//! - [`traits`]: the streaming-codec trait surface
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! Wirepack is a layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Tools                                               │
//! │     wirepack CLI, io::Write stream adapters             │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec (wirepack-mppc)                               │
//! │     MppcCompressor / MppcDecompressor, match dictionary │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Primitives (this crate)                             │
//! │     BitWriter/BitCursor, HistoryWindow, WireBuffer      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wirepack_core::bitstream::BitWriter;
//! use wirepack_core::buffer::WireBuffer;
//!
//! // Pack a 10-bit token code.
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b1111_000001, 10).unwrap();
//! writer.align_to_byte().unwrap();
//! assert_eq!(writer.take_bytes(), vec![0xF0, 0x40]);
//!
//! // Frame a payload for the wire.
//! let mut frame = WireBuffer::new();
//! frame.write_octets(b"compressed bytes here");
//! assert_eq!(frame.read_octets().unwrap(), b"compressed bytes here");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod buffer;
pub mod error;
pub mod history;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitCursor, BitWriter};
pub use buffer::WireBuffer;
pub use error::{Result, WirepackError};
pub use history::{HistoryWindow, WINDOW_SIZE};
pub use traits::StreamCodec;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitCursor, BitWriter};
    pub use crate::buffer::WireBuffer;
    pub use crate::error::{Result, WirepackError};
    pub use crate::history::{HistoryWindow, WINDOW_SIZE};
    pub use crate::traits::StreamCodec;
}
