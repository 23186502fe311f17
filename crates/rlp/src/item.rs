use crate::{Encodable, Encoder, Error, Result};
use alloy_primitives::{U256, hex};
use serde_json::Value;
use std::fmt::{self, Display, Formatter, Write};

/// Arbitrary nested data, built at runtime.
///
/// `Item::List(vec![])` is equivalent to `[]`;
/// `Item::List(vec![Item::Bytes(vec![])])` is equivalent to `[""]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Item {
    /// An unsigned integer of at most 256 bits.
    Int(U256),
    /// A raw byte string.
    Bytes(Vec<u8>),
    /// An ordered list of items.
    List(Vec<Item>),
    /// A missing value. See [`AbsentPolicy`](crate::AbsentPolicy).
    Absent,
}

impl Encodable for Item {
    fn encode(&self, out: &mut Encoder<'_>) -> Result<()> {
        match self {
            Self::Int(value) => out.uint(*value),
            Self::Bytes(data) => out.bytes(data),
            Self::List(items) => out.list_iter(items),
            Self::Absent => out.absent(),
        }
    }
}

impl Item {
    /// Parses an item from JSON.
    ///
    /// Input that is not valid JSON is treated as a single hex string, so `0x22` and `"0x22"`
    /// are the same item. Input starting with `[`, `{` or `"` must be valid JSON.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let value = match serde_json::from_str(input) {
            Ok(value) => value,
            Err(err) if input.starts_with(['[', '{', '"']) => return Err(err.into()),
            Err(_) => Value::String(input.to_string()),
        };
        Self::from_json(&value)
    }

    /// Converts a JSON value into an item.
    ///
    /// Strings are hex byte strings, numbers are unsigned integers and arrays are lists.
    /// `null` is [`Item::Absent`]. Booleans, objects, negative or fractional numbers and
    /// integers wider than 256 bits have no RLP representation.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::Absent),
            Value::Bool(_) => Err(Error::unsupported("RLP input should not contain booleans")),
            Value::Number(n) => {
                let n = n.to_string();
                U256::from_str_radix(&n, 10).map(Self::Int).map_err(|err| {
                    Error::Unsupported(format!(
                        "{n} is not an unsigned integer of at most 256 bits: {err}"
                    ))
                })
            }
            Value::String(s) => Ok(Self::Bytes(hex::decode(s)?)),
            Value::Array(values) => values.iter().map(Self::from_json).collect(),
            Value::Object(_) => Err(Error::unsupported("RLP input can not contain objects")),
        }
    }

    /// Returns `true` if this is a list.
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl TryFrom<&Value> for Item {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_json(value)
    }
}

impl From<U256> for Item {
    fn from(value: U256) -> Self {
        Self::Int(value)
    }
}

impl From<Vec<u8>> for Item {
    fn from(data: Vec<u8>) -> Self {
        Self::Bytes(data)
    }
}

impl From<&[u8]> for Item {
    fn from(data: &[u8]) -> Self {
        Self::Bytes(data.to_vec())
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Self::Bytes(s.as_bytes().to_vec())
    }
}

impl<T: Into<Self>> From<Option<T>> for Item {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl FromIterator<Self> for Item {
    fn from_iter<T: IntoIterator<Item = Self>>(iter: T) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

// Display as hex values
impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Bytes(data) => write!(f, "\"{}\"", hex::encode_prefixed(data)),
            Self::List(items) => {
                f.write_char('[')?;
                let mut iter = items.iter().peekable();
                while let Some(item) = iter.next() {
                    write!(f, "{item}")?;
                    if iter.peek().is_some() {
                        f.write_char(',')?;
                    }
                }
                f.write_char(']')
            }
            Self::Absent => f.write_str("null"),
        }
    }
}
