//! `std::io::Write` adapters over the codec.
//!
//! Each adapter owns one codec half: every chunk written to it goes
//! through `update` and the resulting bytes are forwarded to the inner
//! writer. Chunking, ordering and back-pressure stay with the caller,
//! exactly as with the bare codec.

use crate::decode::MppcDecompressor;
use crate::encode::MppcCompressor;
use std::io::{self, Write};
use wirepack_core::error::WirepackError;

fn to_io_error(err: WirepackError) -> io::Error {
    match err {
        WirepackError::Io(inner) => inner,
        other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
    }
}

/// A writer that compresses everything written to it.
///
/// Each `write` call maps to one compressor `update`, so every call
/// ends with a flush marker on the wire; batch writes accordingly when
/// ratio matters.
#[derive(Debug)]
pub struct CompressWriter<W: Write> {
    inner: W,
    compressor: MppcCompressor,
}

impl<W: Write> CompressWriter<W> {
    /// Wrap `inner`, compressing all written bytes into it.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            compressor: MppcCompressor::new(),
        }
    }

    /// Get a reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the inner writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Consume the adapter and return the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CompressWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let compressed = self.compressor.update(buf).map_err(to_io_error)?;
        self.inner.write_all(&compressed)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// A writer that decompresses everything written to it.
#[derive(Debug)]
pub struct DecompressWriter<W: Write> {
    inner: W,
    decompressor: MppcDecompressor,
}

impl<W: Write> DecompressWriter<W> {
    /// Wrap `inner`, decompressing all written bytes into it.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            decompressor: MppcDecompressor::new(),
        }
    }

    /// Get a reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the inner writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Consume the adapter and return the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Compressed bytes buffered while waiting for a token to complete.
    pub fn pending_len(&self) -> usize {
        self.decompressor.pending_len()
    }
}

impl<W: Write> Write for DecompressWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let plain = self.decompressor.update(buf).map_err(to_io_error)?;
        self.inner.write_all(&plain)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
