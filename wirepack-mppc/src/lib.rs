//! # Wirepack MPPC
//!
//! Pure Rust implementation of MPPC-style sliding-window stream
//! compression: an LZ77 variant with an 8192-byte history, bit-packed
//! literal/copy tokens, and flush-marker segment resets that keep the
//! compressor and decompressor windows synchronized.
//!
//! Both halves are streaming: feed chunks of any size, get back the
//! bytes that are ready. Every compressor `update` ends on a byte
//! boundary behind a flush marker, and the decompressor tolerates
//! tokens split anywhere — across calls it keeps the unfinished tail
//! buffered, down to the bit.
//!
//! ## Example
//!
//! ```rust
//! use wirepack_mppc::{MppcCompressor, MppcDecompressor};
//!
//! let mut compressor = MppcCompressor::new();
//! let mut decompressor = MppcDecompressor::new();
//!
//! let mut wire = Vec::new();
//! wire.extend(compressor.update(b"hello hello hello ").unwrap());
//! wire.extend(compressor.update(b"world").unwrap());
//!
//! let restored = decompressor.update(&wire).unwrap();
//! assert_eq!(restored, b"hello hello hello world");
//! ```
//!
//! ## One-shot convenience
//!
//! ```rust
//! let compressed = wirepack_mppc::compress(b"aaaaaaaaaaaaaaaa").unwrap();
//! let restored = wirepack_mppc::decompress(&compressed).unwrap();
//! assert_eq!(restored, b"aaaaaaaaaaaaaaaa");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decode;
pub mod dict;
pub mod encode;
pub mod stream;
pub mod tokens;

// Re-exports
pub use decode::{MppcDecompressor, decompress};
pub use dict::MatchDict;
pub use encode::{MppcCompressor, compress};
pub use stream::{CompressWriter, DecompressWriter};
pub use tokens::{MAX_LENGTH, MAX_OFFSET, MIN_MATCH};
