//! Utility functions for reading from [`stdin`](std::io::stdin).

use eyre::{Result, WrapErr};
use std::io::{self, Read};

/// Unwraps the given value or [reads stdin into a String](read).
pub fn unwrap(value: Option<String>) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => read(),
    }
}

/// Reads all of [`stdin`][io::stdin] into a String.
pub fn read() -> Result<String> {
    let mut buf = String::new();
    io::stdin().lock().read_to_string(&mut buf).wrap_err("failed to read stdin")?;
    Ok(buf)
}
