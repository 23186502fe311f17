//! Output sinks the encoder writes into.

use crate::Result;
use bytes::{BufMut, BytesMut};
use std::io;

/// A destination for encoded bytes.
///
/// Any failure aborts the encode in progress; nothing written before the failure is rolled
/// back.
pub trait Sink {
    /// Writes a single byte.
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_all(&[byte])
    }

    /// Writes all of `bytes`.
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;
}

impl Sink for Vec<u8> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.try_reserve(1)?;
        self.push(byte);
        Ok(())
    }

    #[inline]
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.try_reserve(bytes.len())?;
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl Sink for BytesMut {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.put_u8(byte);
        Ok(())
    }

    #[inline]
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.put_slice(bytes);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        (**self).write_byte(byte)
    }

    #[inline]
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_all(bytes)
    }
}

/// Adapts any [`io::Write`] into a [`Sink`].
///
/// I/O failures surface as [`Error::Sink`](crate::Error::Sink).
#[derive(Debug, Default)]
pub struct IoSink<W> {
    inner: W,
    written: usize,
}

impl<W: io::Write> IoSink<W> {
    /// Wraps the given writer.
    pub const fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Returns the number of bytes accepted by the writer so far.
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Returns a reference to the wrapped writer.
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Flushes the wrapped writer.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(Into::into)
    }

    /// Consumes the sink, returning the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }
}
