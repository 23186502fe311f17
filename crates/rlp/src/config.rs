//! Encoder configuration.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// What to emit for an absent optional value.
///
/// RLP has no null. Skipping writes no bytes at all, which keeps the behaviour of encoders that
/// drop missing trailing fields but makes a containing list ambiguous when the absent value is
/// not last. Writing an empty string keeps every position self-describing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbsentPolicy {
    /// Write nothing.
    #[default]
    Skip,
    /// Write the empty string, `0x80`.
    EmptyString,
}

impl AbsentPolicy {
    /// Returns the kebab-case name of the policy.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::EmptyString => "empty-string",
        }
    }
}

impl fmt::Display for AbsentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AbsentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip" => Ok(Self::Skip),
            "empty-string" | "empty" => Ok(Self::EmptyString),
            _ => Err(format!("unknown absent policy `{s}`, expected `skip` or `empty-string`")),
        }
    }
}

/// Options that apply to a single top-level encode call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EncoderConfig {
    /// Output for absent optional values.
    pub absent: AbsentPolicy,
    /// Minimum capacity reserved for every scratch buffer.
    pub scratch_capacity: usize,
}

impl EncoderConfig {
    /// Default minimum scratch buffer capacity: a short list payload fits without regrowing.
    pub const DEFAULT_SCRATCH_CAPACITY: usize = 64;

    /// Sets the absent value policy.
    pub const fn with_absent(mut self, absent: AbsentPolicy) -> Self {
        self.absent = absent;
        self
    }

    /// Sets the minimum scratch buffer capacity.
    pub const fn with_scratch_capacity(mut self, scratch_capacity: usize) -> Self {
        self.scratch_capacity = scratch_capacity;
        self
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { absent: AbsentPolicy::Skip, scratch_capacity: Self::DEFAULT_SCRATCH_CAPACITY }
    }
}
