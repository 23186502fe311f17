use alloy_primitives::hex::FromHexError;
use std::{collections::TryReserveError, io};

/// RLP encoding result type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// RLP encoding error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output sink refused the bytes.
    #[error("failed to write to sink: {0}")]
    Sink(#[from] io::Error),
    /// A scratch or output buffer could not be grown.
    #[error("failed to allocate encoding buffer: {0}")]
    Allocation(#[from] TryReserveError),
    /// The value has no RLP representation.
    #[error("unsupported value: {0}")]
    Unsupported(String),
    /// A byte string input was not valid hex.
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] FromHexError),
    /// Input that looked like JSON could not be parsed.
    #[error("invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl Error {
    /// Creates an [`Error::Unsupported`] from anything that can be displayed.
    pub fn unsupported(reason: impl std::fmt::Display) -> Self {
        Self::Unsupported(reason.to_string())
    }

    /// Returns `true` if the error originated from the output sink.
    pub const fn is_sink(&self) -> bool {
        matches!(self, Self::Sink(_))
    }
}
