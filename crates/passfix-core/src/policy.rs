// Length policy: the inclusive character-count range of a strong password

use serde::{Deserialize, Serialize};

/// Default minimum password length, in characters.
pub const DEFAULT_MIN_LEN: usize = 6;

/// Default maximum password length, in characters.
pub const DEFAULT_MAX_LEN: usize = 20;

/// Error type for invalid policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// The minimum length exceeds the maximum length.
    #[error("minimum length {min_len} exceeds maximum length {max_len}")]
    InvertedBounds { min_len: usize, max_len: usize },
}

/// Inclusive length bounds `[min_len, max_len]`, counted in characters.
///
/// Always satisfies `min_len <= max_len`, so a password can never be both
/// too short and too long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLengthPolicy")]
pub struct LengthPolicy {
    min_len: usize,
    max_len: usize,
}

impl LengthPolicy {
    /// Create a policy, rejecting `min_len > max_len`.
    pub fn new(min_len: usize, max_len: usize) -> Result<Self, PolicyError> {
        if min_len > max_len {
            return Err(PolicyError::InvertedBounds { min_len, max_len });
        }
        Ok(Self { min_len, max_len })
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Whether a password of `len` characters is within bounds.
    pub fn contains(&self, len: usize) -> bool {
        (self.min_len..=self.max_len).contains(&len)
    }
}

impl Default for LengthPolicy {
    /// 6 to 20 characters.
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

/// Unvalidated wire form; missing fields fall back to the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawLengthPolicy {
    min_len: usize,
    max_len: usize,
}

impl Default for RawLengthPolicy {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl TryFrom<RawLengthPolicy> for LengthPolicy {
    type Error = PolicyError;

    fn try_from(raw: RawLengthPolicy) -> Result<Self, Self::Error> {
        LengthPolicy::new(raw.min_len, raw.max_len)
    }
}
