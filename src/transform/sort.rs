//! Recursive sorting by value, by key, or by a caller-supplied comparator.

use super::excluded;
use super::options::SortOptions;
use crate::depth::Depth;
use crate::value::{Container, Key, Value};
use std::cmp::Ordering;
use tracing::trace;

type Entry = (Key, Value);

/// Sorts entries by value in natural order (see [`Value::natural_cmp`]).
pub fn sort(container: &Container, depth: Depth, options: &SortOptions) -> Container {
    trace!(len = container.len(), %depth, ?options, "sort");
    sort_level(container, depth, options, &mut |a: &Entry, b: &Entry| {
        a.1.natural_cmp(&b.1)
    })
}

/// Sorts entries by key. Integer keys come before string keys.
pub fn key_sort(container: &Container, depth: Depth, options: &SortOptions) -> Container {
    trace!(len = container.len(), %depth, ?options, "key_sort");
    sort_level(container, depth, options, &mut |a: &Entry, b: &Entry| a.0.cmp(&b.0))
}

/// Sorts entries with `comparator(key1, value1, key2, value2)`.
///
/// The same comparator orders every nested level.
pub fn function_sort<F>(
    container: &Container,
    mut comparator: F,
    depth: Depth,
    options: &SortOptions,
) -> Container
where
    F: FnMut(&Key, &Value, &Key, &Value) -> Ordering,
{
    trace!(len = container.len(), %depth, ?options, "function_sort");
    sort_level(container, depth, options, &mut |a: &Entry, b: &Entry| {
        comparator(&a.0, &a.1, &b.0, &b.1)
    })
}

fn sort_level<F>(
    container: &Container,
    depth: Depth,
    options: &SortOptions,
    compare: &mut F,
) -> Container
where
    F: FnMut(&Entry, &Entry) -> Ordering,
{
    let list_like = container.is_list_like();
    let mut entries: Vec<Entry> = match depth.descend() {
        Some(next) => container
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::Container(child) => {
                        Value::Container(sort_level(child, next, options, &mut *compare))
                    }
                    _ => value.clone(),
                };
                (key.clone(), value)
            })
            .collect(),
        None => container.entries().to_vec(),
    };

    if excluded(container, options.skip_maps, options.skip_lists) {
        return Container::from_unique_entries(entries);
    }

    entries.sort_by(|a, b| {
        let ord = compare(a, b);
        if options.reverse {
            ord.reverse()
        } else {
            ord
        }
    });
    Container::from_unique_entries(entries).reindexed_if(list_like && !options.preserve_keys)
}
