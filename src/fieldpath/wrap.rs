//! Flattening nested containers to a single level of path keys, and back.

use super::access::{lookup, set_in};
use super::delimiter::Delimiter;
use super::path::Path;
use crate::error::{Error, Result};
use crate::value::{Container, Key, Value};
use tracing::trace;

/// Flattens `container` into one level keyed by full paths joined with
/// `delimiter`.
///
/// Non-container values become leaves. Empty nested containers are kept as
/// leaves too, so [`unwrap`] can restore them. Keys are not escaped: a key
/// that already contains `delimiter` cannot be told apart from nesting.
pub fn wrap(container: &Container, delimiter: Delimiter) -> Container {
    trace!(len = container.len(), %delimiter, "wrap");
    let mut out = Container::new();
    flatten(container, &mut Path::new(), delimiter, &mut out);
    out
}

fn flatten(container: &Container, prefix: &mut Path, delimiter: Delimiter, out: &mut Container) {
    for (key, value) in container.iter() {
        prefix.push(key.clone());
        match value {
            Value::Container(child) if !child.is_empty() => flatten(child, prefix, delimiter, out),
            _ => {
                out.insert(Key::parse(&prefix.join(delimiter)), value.clone());
            }
        }
        prefix.pop();
    }
}

/// Expands a flattened container back into nested containers, splitting each
/// key on `delimiter`.
///
/// Fails with `PathTypeMismatch` when one key is a strict prefix of another,
/// such as `a` and `a.b`, whichever comes first.
pub fn unwrap(container: &Container, delimiter: Delimiter) -> Result<Container> {
    trace!(len = container.len(), %delimiter, "unwrap");
    let mut out = Container::new();
    for (key, value) in container.iter() {
        let flat = key.to_string();
        let path = Path::parse(&flat, delimiter);
        if lookup(&out, &path).is_some() {
            let segment = path.last().map(Key::to_string).unwrap_or_default();
            return Err(Error::path_type_mismatch(flat, segment, value.type_name()));
        }
        set_in(&mut out, path.as_slice(), value.clone(), &flat)?;
    }
    Ok(out)
}
