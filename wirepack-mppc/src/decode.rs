//! MPPC decompression.
//!
//! The decompressor replays the token stream against its own history
//! window. Its defining problem is that tokens arrive split across
//! arbitrary chunk boundaries: a token is consumed only once every one
//! of its bits is present, otherwise the read cursor rolls back to the
//! position saved before the attempt and the call returns whatever
//! output was already complete. Unconsumed bytes wait in a pending
//! buffer, together with the bit offset already spent inside its first
//! byte.
//!
//! Running out of input is therefore never an error. Neither is a copy
//! token that does not (yet) fit the window: a decoder cannot tell a
//! token truncated mid-transfer from a malformed one, so both stall the
//! cursor and wait.

use crate::tokens::{self, TokenClass};
use wirepack_core::bitstream::BitCursor;
use wirepack_core::error::{Result, WirepackError};
use wirepack_core::history::{HistoryWindow, WINDOW_SIZE};
use wirepack_core::traits::StreamCodec;

/// Streaming MPPC decompressor.
///
/// Feed it the compressor's output in any chunking; the concatenated
/// results reconstruct the original bytes exactly.
///
/// # Example
///
/// ```
/// use wirepack_mppc::{MppcCompressor, MppcDecompressor};
///
/// let mut compressor = MppcCompressor::new();
/// let mut decompressor = MppcDecompressor::new();
///
/// let compressed = compressor.update(b"streaming round-trip").unwrap();
/// // Chunk boundaries on the compressed side carry no meaning.
/// let mut out = decompressor.update(&compressed[..3]).unwrap();
/// out.extend(decompressor.update(&compressed[3..]).unwrap());
/// assert_eq!(out, b"streaming round-trip");
/// ```
#[derive(Debug, Default)]
pub struct MppcDecompressor {
    /// Segment history being reconstructed.
    history: HistoryWindow,
    /// Compressed bytes not yet fully consumed.
    pending: Vec<u8>,
    /// Bits of `pending[0]` already consumed by a previous call (0-7).
    bit_offset: u8,
}

impl MppcDecompressor {
    /// Create a decompressor at the start of a fresh segment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of compressed bytes waiting for completion.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Decompress one chunk, returning the bytes that became ready.
    pub fn update(&mut self, chunk: &[u8]) -> Result<Vec<u8>> {
        if !chunk.is_empty() {
            self.pending.extend_from_slice(chunk);
        }

        let mut cursor = BitCursor::new(self.bit_offset);
        let mut output = Vec::new();
        // History written since this point still has to reach the output.
        let mut segment_head = self.history.position();

        loop {
            let saved = cursor;
            let window = cursor.peek32(&self.pending);

            match tokens::classify(window) {
                TokenClass::Literal { byte, width } => {
                    // A well-formed stream puts a flush marker at the
                    // window fill, never another literal.
                    if self.history.is_full() || !cursor.advance(&self.pending, width) {
                        break;
                    }
                    self.history.push(byte);
                }
                TokenClass::Copy { offset, width } => {
                    if !cursor.advance(&self.pending, width) {
                        break;
                    }

                    if offset == 0 {
                        // Flush marker: realign, hand the segment's new
                        // bytes to the caller, wrap at the boundary.
                        if !cursor.is_aligned() {
                            let pad = 8 - cursor.bit_offset();
                            if !cursor.advance(&self.pending, pad) {
                                cursor = saved;
                                break;
                            }
                        }
                        output.extend_from_slice(self.history.since(segment_head));
                        if self.history.is_full() {
                            self.history.reset();
                        }
                        segment_head = self.history.position();
                        continue;
                    }

                    let Some((length, len_width)) = tokens::peek_length(cursor.peek32(&self.pending))
                    else {
                        // Twelve or more ones complete no length tier.
                        cursor = saved;
                        break;
                    };
                    if !cursor.advance(&self.pending, len_width) {
                        cursor = saved;
                        break;
                    }

                    let offset = usize::from(offset);
                    let length = usize::from(length);
                    if offset > self.history.position()
                        || self.history.position() + length > WINDOW_SIZE
                    {
                        cursor = saved;
                        break;
                    }
                    self.history.replay_copy(offset, length);
                }
            }
        }

        output.extend_from_slice(self.history.since(segment_head));

        let consumed = cursor.byte_pos();
        if consumed > self.pending.len() {
            return Err(WirepackError::decode_invariant(
                "read cursor walked past the pending buffer",
            ));
        }
        self.pending.drain(..consumed);
        self.bit_offset = cursor.bit_offset();
        Ok(output)
    }
}

impl StreamCodec for MppcDecompressor {
    fn update(&mut self, chunk: &[u8]) -> Result<Vec<u8>> {
        MppcDecompressor::update(self, chunk)
    }

    fn reset(&mut self) {
        self.history.reset();
        self.pending.clear();
        self.bit_offset = 0;
    }
}

/// Decompress a whole buffer in one call on a fresh decompressor.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    MppcDecompressor::new().update(input)
}
