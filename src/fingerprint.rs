//! Strict, type-discriminating value fingerprints.
//!
//! A fingerprint is a string that is equal for two values exactly when the
//! values are strictly equal: same type, same content. `0`, `"0"`, `0.0` and
//! `false` all fingerprint differently. Fingerprints back every strict
//! membership test in the crate (unique, value filters, intersect, diff).

use crate::error::{Error, Result};
use crate::value::{Container, HandleKind, Key, Value};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt::Write;

/// Payloads longer than this many bytes are replaced by their SHA-256 digest.
pub const HASH_THRESHOLD: usize = 40;

/// Fingerprint is the strict identity key of a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    /// The type tag and canonical payload, e.g. `i:42` or `s:foo`.
    pub key: String,
    /// True when the fingerprint depends only on the value's content and may
    /// be reused across calls. False for identity handles and any container
    /// holding one.
    pub safe: bool,
}

impl Fingerprint {
    fn new(key: String, safe: bool) -> Self {
        Fingerprint { key, safe }
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }
}

/// Computes the fingerprint of a value.
///
/// Fails with `UnsupportedValueType` for handles to released resources,
/// directly or anywhere inside a container.
pub fn fingerprint(value: &Value) -> Result<Fingerprint> {
    let fp = match value {
        Value::Null => Fingerprint::new("n".to_string(), true),
        Value::Bool(b) => Fingerprint::new(format!("b:{}", u8::from(*b)), true),
        Value::Int(i) => Fingerprint::new(format!("i:{}", i), true),
        Value::Float(f) => Fingerprint::new(float_key(*f), true),
        Value::String(s) => Fingerprint::new(tagged('s', s), true),
        Value::Handle(h) => match h.kind() {
            HandleKind::Object => Fingerprint::new(format!("O:{}", h.id()), false),
            HandleKind::Resource => Fingerprint::new(format!("R:{}", h.id()), false),
            HandleKind::ClosedResource => {
                return Err(Error::unsupported_value_type(h.type_name()));
            }
        },
        Value::Container(c) => fingerprint_container(c)?,
    };
    Ok(fp)
}

/// Negative zero shares the key of zero and every NaN shares one key, so
/// floats fingerprint alike exactly when they compare equal.
fn float_key(f: f64) -> String {
    if f == 0.0 {
        "f:0.0".to_string()
    } else if f.is_nan() {
        "f:NaN".to_string()
    } else {
        format!("f:{:?}", f)
    }
}

/// Computes the fingerprint a container would have as a value.
pub fn fingerprint_container(container: &Container) -> Result<Fingerprint> {
    let mut raw = String::new();
    let mut safe = true;
    for (key, value) in container.iter() {
        let element = fingerprint(value)?;
        safe &= element.safe;
        // write! into a String cannot fail.
        let _ = match key {
            Key::Index(n) => write!(raw, "i{}", n),
            Key::Name(s) => write!(raw, "s{}:{}", s.len(), s),
        };
        let _ = write!(raw, "={}:{};", element.key.len(), element.key);
    }
    Ok(Fingerprint::new(tagged('a', &raw), safe))
}

/// Formats `tag:payload`, switching to the upper-case tag and a digest of the
/// payload when it exceeds [`HASH_THRESHOLD`].
fn tagged(tag: char, payload: &str) -> String {
    if payload.len() > HASH_THRESHOLD {
        let mut hasher = Sha256::new();
        hasher.update(payload.as_bytes());
        format!("{}:{}", tag.to_ascii_uppercase(), hex::encode(hasher.finalize()))
    } else {
        format!("{}:{}", tag, payload)
    }
}

/// FingerprintSet answers strict membership queries against a fixed set of
/// values without re-fingerprinting them.
#[derive(Debug, Clone)]
pub struct FingerprintSet {
    keys: HashSet<String>,
    all_safe: bool,
}

impl Default for FingerprintSet {
    fn default() -> Self {
        FingerprintSet::new()
    }
}

impl FingerprintSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        FingerprintSet {
            keys: HashSet::new(),
            all_safe: true,
        }
    }

    /// Fingerprints every value yielded by `values`.
    pub fn from_values<'a, I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut set = FingerprintSet::new();
        for value in values {
            set.insert_value(value)?;
        }
        Ok(set)
    }

    /// Inserts a fingerprint. Returns true if it was not already present.
    pub fn insert(&mut self, fp: Fingerprint) -> bool {
        self.all_safe &= fp.safe;
        self.keys.insert(fp.key)
    }

    /// Fingerprints and inserts a value. Returns true if it was not already present.
    pub fn insert_value(&mut self, value: &Value) -> Result<bool> {
        Ok(self.insert(fingerprint(value)?))
    }

    pub fn contains(&self, fp: &Fingerprint) -> bool {
        self.keys.contains(&fp.key)
    }

    /// Returns true if a value strictly equal to `value` is in the set.
    pub fn contains_value(&self, value: &Value) -> Result<bool> {
        Ok(self.contains(&fingerprint(value)?))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if every inserted fingerprint was safe.
    pub fn all_safe(&self) -> bool {
        self.all_safe
    }
}
