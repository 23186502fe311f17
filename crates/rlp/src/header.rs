use crate::{EMPTY_LIST_CODE, EMPTY_STRING_CODE, Result, Sink};
use arrayvec::ArrayVec;

/// Payloads shorter than this get a single-byte header.
pub const SHORT_PAYLOAD_LIMIT: usize = 56;

/// Offset added to the length-of-length for long strings.
const LONG_STRING_OFFSET: u8 = EMPTY_STRING_CODE + 55;

/// Offset added to the length-of-length for long lists.
const LONG_LIST_OFFSET: u8 = EMPTY_LIST_CODE + 55;

/// Maximum size of an encoded header: one prefix byte followed by up to eight length bytes.
pub const MAX_HEADER_LEN: usize = 1 + size_of::<usize>();

/// Encoded header bytes.
pub type HeaderBytes = ArrayVec<u8, MAX_HEADER_LEN>;

/// The header of an RLP item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Header {
    /// True if list, false otherwise.
    pub list: bool,
    /// Length of the payload in bytes.
    pub payload_length: usize,
}

impl Header {
    /// Creates a string header for the given payload length.
    pub const fn string(payload_length: usize) -> Self {
        Self { list: false, payload_length }
    }

    /// Creates a list header for the given payload length.
    pub const fn list(payload_length: usize) -> Self {
        Self { list: true, payload_length }
    }

    /// Returns the header for a byte string payload.
    ///
    /// Returns `None` when the payload is a single byte below `0x80`: such a byte is its own
    /// encoding and takes no header.
    #[inline]
    pub fn for_string(payload: &[u8]) -> Option<Self> {
        match payload {
            [byte] if *byte < EMPTY_STRING_CODE => None,
            _ => Some(Self::string(payload.len())),
        }
    }

    /// Returns the encoded header bytes.
    pub fn to_bytes(&self) -> HeaderBytes {
        let mut out = HeaderBytes::new();
        if self.payload_length < SHORT_PAYLOAD_LIMIT {
            let code = if self.list { EMPTY_LIST_CODE } else { EMPTY_STRING_CODE };
            out.push(code + self.payload_length as u8);
        } else {
            let len_be = self.payload_length.to_be_bytes();
            let len_be = trim_leading_zeros(&len_be);
            let code = if self.list { LONG_LIST_OFFSET } else { LONG_STRING_OFFSET };
            out.push(code + len_be.len() as u8);
            out.extend(len_be.iter().copied());
        }
        out
    }

    /// Encodes the header into the `out` sink.
    #[inline]
    pub fn encode(&self, out: &mut dyn Sink) -> Result<()> {
        out.write_all(&self.to_bytes())
    }

    /// Returns the length of the encoded header.
    #[inline]
    pub const fn length(&self) -> usize {
        length_of_length(self.payload_length)
    }

    /// Returns the total length of the encoded header and payload.
    pub const fn length_with_payload(&self) -> usize {
        self.length() + self.payload_length
    }
}

/// Returns the header bytes for a payload of `length` bytes.
///
/// This never applies the single-byte string shortcut since it only sees the length; see
/// [`Header::for_string`].
#[inline]
pub fn encode_length(length: usize, is_list: bool) -> HeaderBytes {
    Header { list: is_list, payload_length: length }.to_bytes()
}

/// Returns the length of the header for a payload of `payload_length` bytes.
#[inline]
pub const fn length_of_length(payload_length: usize) -> usize {
    if payload_length < SHORT_PAYLOAD_LIMIT {
        1
    } else {
        1 + size_of::<usize>() - payload_length.leading_zeros() as usize / 8
    }
}

/// Strips the leading zero bytes from a big-endian integer representation.
#[inline]
pub fn trim_leading_zeros(be: &[u8]) -> &[u8] {
    let zeros = be.iter().take_while(|&&b| b == 0).count();
    &be[zeros..]
}
