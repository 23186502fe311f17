use crate::{
    AbsentPolicy, EncoderConfig, Header, Result, ScratchPool, Sink, header::trim_leading_zeros,
};
use alloy_primitives::U256;

/// A type that has an RLP encoding.
///
/// Implementations describe the value either as a byte string ([`Encoder::bytes`],
/// [`Encoder::uint_be`]) or as an ordered list of children ([`Encoder::list`]).
///
/// `u8` is a byte string element and is not `Encodable` by itself. Use
/// [`alloy_primitives::U8`] for a one-byte integer field.
pub trait Encodable {
    /// Encodes `self` through the given encoder.
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()>;
}

/// Writes RLP items into a sink.
///
/// Nested lists are encoded into scratch buffers taken from a [`ScratchPool`] shared by the
/// whole top-level call.
pub struct Encoder<'a> {
    out: &'a mut dyn Sink,
    pool: &'a ScratchPool,
    config: &'a EncoderConfig,
    depth: usize,
}

impl std::fmt::Debug for Encoder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Encoder")
            .field("config", self.config)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl<'a> Encoder<'a> {
    /// Creates a top-level encoder.
    pub fn new(out: &'a mut dyn Sink, pool: &'a ScratchPool, config: &'a EncoderConfig) -> Self {
        Self { out, pool, config, depth: 0 }
    }

    /// Returns the configuration in use.
    pub const fn config(&self) -> &EncoderConfig {
        self.config
    }

    /// Returns the list nesting depth of this encoder. The top level is `0`.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Encodes `value`.
    #[inline]
    pub fn append<T: Encodable + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.encode(self)
    }

    /// Writes a byte string.
    pub fn bytes(&mut self, payload: &[u8]) -> Result<()> {
        if let Some(header) = Header::for_string(payload) {
            header.encode(self.out)?;
        }
        self.out.write_all(payload)
    }

    /// Writes an unsigned integer given as big-endian bytes of any width.
    ///
    /// Leading zero bytes are stripped, so zero becomes the empty string.
    #[inline]
    pub fn uint_be(&mut self, be: &[u8]) -> Result<()> {
        self.bytes(trim_leading_zeros(be))
    }

    /// Writes an unsigned integer.
    #[inline]
    pub fn uint(&mut self, value: U256) -> Result<()> {
        self.uint_be(&value.to_be_bytes::<32>())
    }

    /// Writes a list whose items are produced by `f`.
    ///
    /// `f` receives a child encoder writing into a scratch buffer. The list header is emitted
    /// once `f` returns and the payload length is known.
    pub fn list<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Encoder<'_>) -> Result<()>,
    {
        let mut scratch = self.pool.acquire()?;
        let mut child = Encoder {
            out: &mut *scratch,
            pool: self.pool,
            config: self.config,
            depth: self.depth + 1,
        };
        f(&mut child)?;

        let header = Header::list(scratch.len());
        trace!(
            target: "rlp::encode",
            depth = self.depth,
            payload_length = header.payload_length,
            header_length = header.length(),
            "encoded list"
        );
        header.encode(self.out)?;
        self.out.write_all(&scratch)
    }

    /// Writes a list holding every item of `iter`, in iteration order.
    pub fn list_iter<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Encodable,
    {
        self.list(|out| iter.into_iter().try_for_each(|item| out.append(&item)))
    }

    /// Signals an absent value. The output depends on [`EncoderConfig::absent`].
    pub fn absent(&mut self) -> Result<()> {
        match self.config.absent {
            AbsentPolicy::Skip => Ok(()),
            AbsentPolicy::EmptyString => self.bytes(&[]),
        }
    }
}

/// Writes the RLP encoding of `value` into `sink` using the default configuration.
pub fn write<T: Encodable + ?Sized>(value: &T, sink: &mut dyn Sink) -> Result<()> {
    write_with(value, sink, &EncoderConfig::default())
}

/// Writes the RLP encoding of `value` into `sink`.
pub fn write_with<T: Encodable + ?Sized>(
    value: &T,
    sink: &mut dyn Sink,
    config: &EncoderConfig,
) -> Result<()> {
    let pool = ScratchPool::new(config.scratch_capacity);
    let mut encoder = Encoder::new(sink, &pool, config);
    value.encode(&mut encoder)?;
    debug!(target: "rlp::encode", scratch_buffers = pool.allocated(), "encoded value");
    Ok(())
}

/// Returns the RLP encoding of `value` using the default configuration.
pub fn write_alloc<T: Encodable + ?Sized>(value: &T) -> Result<Vec<u8>> {
    write_alloc_with(value, &EncoderConfig::default())
}

/// Returns the RLP encoding of `value`.
pub fn write_alloc_with<T: Encodable + ?Sized>(
    value: &T,
    config: &EncoderConfig,
) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_with(value, &mut out, config)?;
    Ok(out)
}
