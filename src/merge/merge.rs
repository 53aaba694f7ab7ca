//! Recursive container merge.

use super::options::{ListStrategy, MergeOptions};
use crate::depth::Depth;
use crate::error::Result;
use crate::transform::{unique, UniqueOptions};
use crate::value::{Container, Value};
use tracing::{debug, trace};

/// How a key-wise merge resolves collisions and right-only keys.
#[derive(Debug, Clone, Copy)]
struct KeyedRule {
    /// Keep the left value on a collision that is not recursed into.
    keep_left: bool,
    /// Drop keys that only exist on the right.
    left_only: bool,
}

/// Merges `b` into `a` and returns the result.
///
/// Two list-like containers are combined with `options.list_strategy`
/// (unless it is [`ListStrategy::Assoc`]). Anything else is merged key-wise:
/// collisions between two containers recurse while `depth` allows, other
/// collisions take the right value unless `assoc_union` is set, and
/// right-only keys are appended unless `assoc_left` is set.
///
/// Fails only when `list_unique` deduplicates a value that cannot be
/// fingerprinted.
pub fn merge(
    a: &Container,
    b: &Container,
    depth: Depth,
    options: &MergeOptions,
) -> Result<Container> {
    trace!(left = a.len(), right = b.len(), %depth, ?options, "merge");
    merge_level(a, b, depth, options)
}

fn merge_level(
    a: &Container,
    b: &Container,
    depth: Depth,
    options: &MergeOptions,
) -> Result<Container> {
    let lists = options.list_strategy != ListStrategy::Assoc
        && a.is_list_like()
        && b.is_list_like();
    if lists {
        return merge_lists(a, b, depth, options);
    }

    let rule = KeyedRule {
        keep_left: options.assoc_union,
        left_only: options.assoc_left,
    };
    if a.is_empty() || b.is_empty() {
        debug!(left = a.len(), right = b.len(), "merge short-circuit on empty map input");
        return Ok(if b.is_empty() || rule.left_only {
            a.clone()
        } else {
            b.clone()
        });
    }
    merge_keyed(a, b, depth, rule, options)
}

fn merge_lists(
    a: &Container,
    b: &Container,
    depth: Depth,
    options: &MergeOptions,
) -> Result<Container> {
    let merged = match options.list_strategy {
        ListStrategy::Swap => b.clone(),
        ListStrategy::Keep => a.clone(),
        ListStrategy::Left if a.is_empty() || b.is_empty() => a.clone(),
        _ if a.is_empty() => b.clone(),
        _ if b.is_empty() => a.clone(),
        ListStrategy::Append => Container::list(a.values().chain(b.values()).cloned()),
        ListStrategy::Union => {
            let mut merged = a.clone();
            for (key, value) in b.iter().filter(|(key, _)| !a.contains_key(key)) {
                merged.insert(key.clone(), value.clone());
            }
            merged
        }
        ListStrategy::Left => merge_keyed(
            a,
            b,
            depth,
            KeyedRule {
                keep_left: false,
                left_only: true,
            },
            options,
        )?,
        ListStrategy::Assoc => merge_keyed(
            a,
            b,
            depth,
            KeyedRule {
                keep_left: options.assoc_union,
                left_only: options.assoc_left,
            },
            options,
        )?,
    };

    if options.list_unique {
        return unique(&merged, Depth::levels(0), &UniqueOptions::default());
    }
    Ok(merged)
}

fn merge_keyed(
    a: &Container,
    b: &Container,
    depth: Depth,
    rule: KeyedRule,
    options: &MergeOptions,
) -> Result<Container> {
    let next = depth.descend();
    let left_keys = a.index();
    let right = b.index();
    let mut entries = Vec::with_capacity(a.len() + b.len());

    for (key, left) in a.iter() {
        let value = match right.get(key) {
            None => left.clone(),
            Some(&other) => match (left, other, next) {
                (Value::Container(lc), Value::Container(rc), Some(next)) => {
                    Value::Container(merge_level(lc, rc, next, options)?)
                }
                _ if rule.keep_left => left.clone(),
                _ => other.clone(),
            },
        };
        entries.push((key.clone(), value));
    }

    if !rule.left_only {
        for (key, value) in b.iter() {
            if !left_keys.contains_key(key) {
                entries.push((key.clone(), value.clone()));
            }
        }
    }

    Ok(Container::from_unique_entries(entries))
}
