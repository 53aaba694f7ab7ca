//! Recursion bound shared by every depth-limited transform.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Depth bounds how far a transform recurses into nested containers.
///
/// `Depth::unlimited()` recurses through the whole tree. `Depth::levels(0)`
/// transforms the top level only and leaves nested containers untouched;
/// each nested call receives one level less.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Depth(Option<u32>);

impl Depth {
    /// Validates a signed depth. Negative values are rejected; values beyond
    /// `u32::MAX` saturate.
    pub fn new(depth: i64) -> Result<Self> {
        if depth < 0 {
            return Err(Error::invalid_depth(depth));
        }
        Ok(Depth(Some(u32::try_from(depth).unwrap_or(u32::MAX))))
    }

    pub fn unlimited() -> Self {
        Depth(None)
    }

    pub fn levels(levels: u32) -> Self {
        Depth(Some(levels))
    }

    /// Returns the bound, or `None` when unlimited.
    pub fn get(self) -> Option<u32> {
        self.0
    }

    /// Returns the depth for the next level down, or `None` when this level
    /// is the last one that may be transformed.
    pub fn descend(self) -> Option<Depth> {
        match self.0 {
            None => Some(self),
            Some(0) => None,
            Some(n) => Some(Depth(Some(n - 1))),
        }
    }
}

impl From<u32> for Depth {
    fn from(levels: u32) -> Self {
        Depth::levels(levels)
    }
}

impl From<Option<u32>> for Depth {
    fn from(depth: Option<u32>) -> Self {
        Depth(depth)
    }
}

impl TryFrom<i64> for Depth {
    type Error = Error;

    fn try_from(depth: i64) -> Result<Self> {
        Depth::new(depth)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "unlimited"),
        }
    }
}
