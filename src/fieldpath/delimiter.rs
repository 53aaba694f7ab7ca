//! The single character that separates path segments.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter is a validated one-character path separator. The default is `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Delimiter(char);

impl Delimiter {
    pub const DOT: Delimiter = Delimiter('.');

    /// Validates that `delimiter` is exactly one character.
    pub fn new(delimiter: &str) -> Result<Self> {
        let mut chars = delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Delimiter(c)),
            _ => Err(Error::invalid_path_delimiter(delimiter)),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::DOT
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        Delimiter(c)
    }
}

impl TryFrom<&str> for Delimiter {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Delimiter::new(s)
    }
}

impl TryFrom<String> for Delimiter {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Delimiter::new(&s)
    }
}

impl From<Delimiter> for String {
    fn from(d: Delimiter) -> Self {
        d.0.to_string()
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
