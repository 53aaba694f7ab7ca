//! Container keys.

use std::cmp::Ordering;
use std::fmt;

/// Key addresses one entry of a [`Container`](super::Container).
///
/// Keys are either non-negative integers or strings. Strings written in
/// canonical decimal form (`"0"`, `"17"`, but not `"017"` or `"-1"`) are
/// normalised into integer keys by [`Key::parse`] and the `From<&str>`
/// conversions, so `"3"` and `3` address the same entry. A `Key::Name`
/// built directly from such a string is normalised when it is stored in or
/// looked up from a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer position or numeric key.
    Index(u64),
    /// String key.
    Name(String),
}

impl Key {
    /// Parses a key from its textual form.
    pub fn parse(s: &str) -> Self {
        if is_canonical_index(s) {
            if let Ok(n) = s.parse::<u64>() {
                return Key::Index(n);
            }
        }
        Key::Name(s.to_string())
    }

    /// Returns the integer this key addresses, including a `Name` holding a
    /// canonical decimal.
    pub fn canonical_index(&self) -> Option<u64> {
        match self {
            Key::Index(n) => Some(*n),
            Key::Name(s) if is_canonical_index(s) => s.parse().ok(),
            Key::Name(_) => None,
        }
    }

    /// Converts a `Name` holding a canonical decimal into an `Index`.
    pub fn normalized(self) -> Self {
        match self {
            Key::Name(s) => Key::from(s),
            index => index,
        }
    }

    /// Returns true if this is an integer key.
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Returns the integer if this is an integer key.
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Key::Index(n) => Some(*n),
            Key::Name(_) => None,
        }
    }

    /// Returns the string if this is a string key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(s) => Some(s),
        }
    }
}

fn is_canonical_index(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && (s == "0" || !s.starts_with('0'))
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Integer keys sort before string keys; each kind compares naturally.
impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Index(a), Key::Index(b)) => a.cmp(b),
            (Key::Name(a), Key::Name(b)) => a.cmp(b),
            (Key::Index(_), Key::Name(_)) => Ordering::Less,
            (Key::Name(_), Key::Index(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(n) => write!(f, "{}", n),
            Key::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for Key {
    fn from(n: u64) -> Self {
        Key::Index(n)
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Index(n as u64)
    }
}

impl From<u32> for Key {
    fn from(n: u32) -> Self {
        Key::Index(u64::from(n))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::parse(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        if is_canonical_index(&s) {
            if let Ok(n) = s.parse::<u64>() {
                return Key::Index(n);
            }
        }
        Key::Name(s)
    }
}

impl From<&Key> for Key {
    fn from(k: &Key) -> Self {
        k.clone()
    }
}
