//! Strict duplicate removal.

use super::excluded;
use super::options::UniqueOptions;
use crate::depth::Depth;
use crate::error::Result;
use crate::fingerprint::FingerprintSet;
use crate::value::{Container, Value};
use tracing::{debug, trace};

/// Removes the second and later occurrences of every value, comparing by
/// strict fingerprint so that `0`, `"0"`, `0.0` and `false` never collide.
///
/// Nested containers are recursed into while `depth` allows and are only
/// deduplicated themselves when `containers_as_values` is set. List-like
/// results are reindexed unless `preserve_keys` is set.
pub fn unique(container: &Container, depth: Depth, options: &UniqueOptions) -> Result<Container> {
    trace!(len = container.len(), %depth, ?options, "unique");
    unique_level(container, depth, options)
}

fn unique_level(container: &Container, depth: Depth, options: &UniqueOptions) -> Result<Container> {
    let list_like = container.is_list_like();
    let dedupe = !excluded(container, options.skip_maps, options.skip_lists);
    let next = depth.descend();

    let mut seen = FingerprintSet::new();
    let mut entries = Vec::with_capacity(container.len());
    for (key, value) in container.iter() {
        let value = match (value, next) {
            (Value::Container(child), Some(next)) => {
                Value::Container(unique_level(child, next, options)?)
            }
            _ => value.clone(),
        };
        let comparable = !value.is_container() || options.containers_as_values;
        if dedupe && comparable && !seen.insert_value(&value)? {
            continue;
        }
        entries.push((key.clone(), value));
    }

    let dropped = container.len() - entries.len();
    if dropped > 0 {
        debug!(dropped, list_like, "unique dropped duplicates");
    }
    Ok(Container::from_unique_entries(entries)
        .reindexed_if(list_like && dropped > 0 && !options.preserve_keys))
}
