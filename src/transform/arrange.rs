//! Reordering without comparison: random shuffle and key alignment.

use super::excluded;
use super::options::{AlignOptions, ShuffleOptions};
use crate::depth::Depth;
use crate::value::{Container, Key, Value};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::trace;

/// Randomly permutes the entries of every container visited, using the
/// thread-local generator.
///
/// Map-like containers keep their keys attached to their values. List-like
/// containers are reindexed unless `associative` is set.
pub fn shuffle(container: &Container, depth: Depth, options: &ShuffleOptions) -> Container {
    shuffle_with(container, depth, options, &mut rand::thread_rng())
}

/// Like [`shuffle`], drawing from the supplied generator.
pub fn shuffle_with<R>(
    container: &Container,
    depth: Depth,
    options: &ShuffleOptions,
    rng: &mut R,
) -> Container
where
    R: Rng + ?Sized,
{
    trace!(len = container.len(), %depth, ?options, "shuffle");
    shuffle_level(container, depth, options, rng)
}

fn shuffle_level<R>(
    container: &Container,
    depth: Depth,
    options: &ShuffleOptions,
    rng: &mut R,
) -> Container
where
    R: Rng + ?Sized,
{
    let list_like = container.is_list_like();
    let mut entries = match depth.descend() {
        Some(next) => {
            let mut entries = Vec::with_capacity(container.len());
            for (key, value) in container.iter() {
                let value = match value {
                    Value::Container(child) => {
                        Value::Container(shuffle_level(child, next, options, rng))
                    }
                    _ => value.clone(),
                };
                entries.push((key.clone(), value));
            }
            entries
        }
        None => container.entries().to_vec(),
    };

    if excluded(container, options.skip_maps, options.skip_lists) {
        return Container::from_unique_entries(entries);
    }

    entries.shuffle(rng);
    Container::from_unique_entries(entries).reindexed_if(list_like && !options.associative)
}

/// Moves the entries whose key appears in `keys` to the front, in the order
/// `keys` lists them. The remaining entries keep their relative order.
pub fn align(container: &Container, keys: &[Key], depth: Depth, options: &AlignOptions) -> Container {
    trace!(len = container.len(), keys = keys.len(), %depth, ?options, "align");
    let mut rank = HashMap::with_capacity(keys.len());
    for (i, key) in keys.iter().enumerate() {
        rank.entry(key).or_insert(i);
    }
    align_level(container, &rank, depth, options)
}

fn align_level(
    container: &Container,
    rank: &HashMap<&Key, usize>,
    depth: Depth,
    options: &AlignOptions,
) -> Container {
    let list_like = container.is_list_like();
    let mut entries = match depth.descend() {
        Some(next) => container
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::Container(child) => {
                        Value::Container(align_level(child, rank, next, options))
                    }
                    _ => value.clone(),
                };
                (key.clone(), value)
            })
            .collect::<Vec<_>>(),
        None => container.entries().to_vec(),
    };

    if excluded(container, options.skip_maps, options.skip_lists) {
        return Container::from_unique_entries(entries);
    }

    // Stable, so unranked entries stay in place relative to each other.
    entries.sort_by_key(|(key, _)| rank.get(key).copied().unwrap_or(usize::MAX));
    Container::from_unique_entries(entries).reindexed_if(list_like && !options.preserve_keys)
}
