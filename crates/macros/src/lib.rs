//! # rlp-encode-macros
//!
//! Derive macros for `rlp-encode`.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

use proc_macro::TokenStream;
use syn::{DeriveInput, Error, parse_macro_input};

mod encodable;
mod utils;

/// Derives `Encodable` for a struct, encoding it as a list of its fields in declaration order.
///
/// Fields marked `#[rlp(skip)]` are left out.
#[proc_macro_derive(RlpEncodable, attributes(rlp))]
pub fn rlp_encodable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    encodable::derive_encodable(&input).unwrap_or_else(Error::into_compile_error).into()
}
