//! [`Encodable`] implementations for standard and primitive types.
//!
//! `u8` has no implementation: it is the element type of byte strings, so `[u8]`, `[u8; N]`
//! and `Vec<u8>` encode as strings while slices, arrays and vectors of any other encodable type
//! encode as lists. A one-byte unsigned integer, such as a signature's y-parity, is written as
//! [`U8`], or through [`Encoder::uint`].

use crate::{Encodable, Encoder, Result};
use alloy_primitives::{Address, FixedBytes, U8, U64, U128, U160, U256};
use std::{
    borrow::Cow,
    collections::VecDeque,
    rc::Rc,
    sync::Arc,
};

impl Encodable for [u8] {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.bytes(self)
    }
}

impl<const N: usize> Encodable for [u8; N] {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.bytes(self)
    }
}

impl Encodable for Vec<u8> {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.bytes(self)
    }
}

impl Encodable for str {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.bytes(self.as_bytes())
    }
}

impl Encodable for String {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.bytes(self.as_bytes())
    }
}

impl Encodable for bytes::Bytes {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.bytes(self)
    }
}

impl Encodable for bytes::BytesMut {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.bytes(self)
    }
}

impl Encodable for alloy_primitives::Bytes {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.bytes(self)
    }
}

impl<const N: usize> Encodable for FixedBytes<N> {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.bytes(self.as_slice())
    }
}

impl Encodable for Address {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.bytes(self.as_slice())
    }
}

macro_rules! uint_impl {
    ($($t:ty),+ $(,)?) => {$(
        impl Encodable for $t {
            #[inline]
            fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
                out.uint_be(&self.to_be_bytes())
            }
        }
    )+};
}

uint_impl!(u16, u32, u64, u128, usize);

// Wider types such as `U512` have no implementation and are rejected at compile time.
macro_rules! ruint_impl {
    ($($t:ident),+ $(,)?) => {$(
        impl Encodable for $t {
            #[inline]
            fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
                out.uint_be(&self.to_be_bytes::<{ $t::BYTES }>())
            }
        }
    )+};
}

ruint_impl!(U8, U64, U128, U160, U256);

impl<T: Encodable> Encodable for [T] {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.list_iter(self)
    }
}

impl<T: Encodable, const N: usize> Encodable for [T; N] {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.list_iter(self)
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.list_iter(self)
    }
}

impl<T: Encodable> Encodable for VecDeque<T> {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.list_iter(self)
    }
}

impl<T: Encodable> Encodable for Option<T> {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        match self {
            Some(value) => value.encode(out),
            None => out.absent(),
        }
    }
}

macro_rules! deref_impl {
    ($($(#[$attr:meta])* [$($gen:tt)*] $t:ty),+ $(,)?) => {$(
        $(#[$attr])*
        impl<$($gen)*> Encodable for $t {
            #[inline]
            fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
                (**self).encode(out)
            }
        }
    )+};
}

deref_impl! {
    [T: ?Sized + Encodable] &T,
    [T: ?Sized + Encodable] &mut T,
    [T: ?Sized + Encodable] Box<T>,
    [T: ?Sized + Encodable] Rc<T>,
    [T: ?Sized + Encodable] Arc<T>,
    [T: ?Sized + ToOwned + Encodable] Cow<'_, T>,
}

impl Encodable for () {
    #[inline]
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        out.list(|_| Ok(()))
    }
}

macro_rules! tuple_impl {
    ($(($($name:ident $idx:tt),+)),+ $(,)?) => {$(
        impl<$($name: Encodable),+> Encodable for ($($name,)+) {
            #[inline]
            fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
                out.list(|out| {
                    $(out.append(&self.$idx)?;)+
                    Ok(())
                })
            }
        }
    )+};
}

tuple_impl! {
    (A 0),
    (A 0, B 1),
    (A 0, B 1, C 2),
    (A 0, B 1, C 2, D 3),
    (A 0, B 1, C 2, D 3, E 4),
    (A 0, B 1, C 2, D 3, E 4, F 5),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11),
}
