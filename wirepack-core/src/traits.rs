//! Core traits for streaming codecs.
//!
//! MPPC is a synchronized stream transform: both halves expose the same
//! chunk-in/bytes-out surface, so the shared trait lives here in the
//! core crate and the codec crate implements it twice.

use crate::error::Result;

/// A stateful streaming byte transform.
///
/// Implementations own all of their state; calls must be issued strictly
/// sequentially by one caller. Feeding the concatenation of all inputs
/// in any chunking must produce the concatenation of all outputs the
/// round-trip law expects — chunk boundaries carry no meaning on the
/// wire.
pub trait StreamCodec {
    /// Transform one chunk, returning whatever output became ready.
    ///
    /// Never blocks. An empty chunk is valid and may still produce
    /// output (the compressor emits a flush marker; the decompressor
    /// drains whatever its pending buffer now completes).
    fn update(&mut self, chunk: &[u8]) -> Result<Vec<u8>>;

    /// Return the codec to its freshly-constructed state.
    fn reset(&mut self);

    /// Drive the codec over `input` in `chunk_size` pieces and collect
    /// the output (convenience for tests and one-shot callers).
    fn run_chunked(&mut self, input: &[u8], chunk_size: usize) -> Result<Vec<u8>> {
        let step = chunk_size.max(1);
        let mut output = Vec::new();
        if input.is_empty() {
            output.extend_from_slice(&self.update(&[])?);
            return Ok(output);
        }
        for chunk in input.chunks(step) {
            output.extend_from_slice(&self.update(chunk)?);
        }
        Ok(output)
    }
}
