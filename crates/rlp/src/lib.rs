//! # rlp-encode
//!
//! Recursive Length Prefix encoding.
//!
//! Values implement [`Encodable`] by describing themselves as a byte string or as an ordered
//! list of encodable children. Dynamic data can be built as an [`Item`] instead.
//!
//! ```
//! use alloy_primitives::hex;
//!
//! assert_eq!(rlp_encode::write_alloc(&1024u64)?, hex!("820400"));
//! assert_eq!(rlp_encode::write_alloc(&("dog", "cat"))?, hex!("c883646f6783636174"));
//! # Ok::<_, rlp_encode::Error>(())
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

pub mod config;
pub use config::{AbsentPolicy, EncoderConfig};

mod encode;
pub use encode::{Encodable, Encoder, write, write_alloc, write_alloc_with, write_with};

mod error;
pub use error::{Error, Result};

mod header;
pub use header::{
    Header, HeaderBytes, MAX_HEADER_LEN, SHORT_PAYLOAD_LIMIT, encode_length, length_of_length,
    trim_leading_zeros,
};

mod impls;

mod item;
pub use item::Item;

#[cfg(test)]
mod properties;

mod scratch;
pub use scratch::{Scratch, ScratchPool};

mod sink;
pub use sink::{IoSink, Sink};

#[cfg(feature = "derive")]
#[doc(inline)]
pub use rlp_encode_macros::RlpEncodable;

/// RLP prefix byte for a 0-length string.
pub const EMPTY_STRING_CODE: u8 = 0x80;

/// RLP prefix byte for a 0-length list.
pub const EMPTY_LIST_CODE: u8 = 0xC0;

/// Initializes tracing for tests.
#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
