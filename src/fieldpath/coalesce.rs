//! First non-null value lookup.

use crate::value::{Container, Key, Value};
use tracing::trace;

/// Returns the first entry whose value is not null, along with its key.
///
/// With `keys`, only those keys are tried, in the given order; otherwise the
/// container's own order is used. Returns `None` when every candidate is null
/// or missing.
pub fn coalesce<'a>(container: &'a Container, keys: Option<&[Key]>) -> Option<(&'a Key, &'a Value)> {
    trace!(len = container.len(), keys = ?keys.map(<[Key]>::len), "coalesce");
    match keys {
        Some(keys) => keys
            .iter()
            .filter_map(|key| container.get_key_value(key))
            .find(|(_, value)| !value.is_null()),
        None => container.iter().find(|(_, value)| !value.is_null()),
    }
}
