use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Positive integer key referencing one row of a lookup table.
///
/// Keys are 1-based positions within a dictionary, so zero is never valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SurrogateKey(NonZeroU32);

impl SurrogateKey {
    pub fn new(value: u32) -> Result<Self> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(ModelError::NonPositiveKey(0))
    }

    /// Key for the value stored at the given 0-based position.
    pub fn from_position(position: usize) -> Result<Self> {
        let one_based = position
            .checked_add(1)
            .and_then(|value| u32::try_from(value).ok())
            .ok_or_else(|| ModelError::KeyOutOfRange(position as i64))?;
        Self::new(one_based)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// 0-based position of the value this key references.
    pub fn position(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u32> for SurrogateKey {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<i64> for SurrogateKey {
    type Error = ModelError;

    fn try_from(value: i64) -> Result<Self> {
        if value <= 0 {
            return Err(ModelError::NonPositiveKey(value));
        }
        let value = u32::try_from(value).map_err(|_| ModelError::KeyOutOfRange(value))?;
        Self::new(value)
    }
}

impl From<SurrogateKey> for u32 {
    fn from(key: SurrogateKey) -> Self {
        key.get()
    }
}

impl From<SurrogateKey> for i64 {
    fn from(key: SurrogateKey) -> Self {
        i64::from(key.get())
    }
}

impl fmt::Display for SurrogateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
