//! Recursive removal of entries by value or by key, everywhere or at the ends.

use super::excluded;
use super::options::{FilterOptions, TrimOptions, TrimSide};
use crate::depth::Depth;
use crate::error::{Error, Result};
use crate::fingerprint::FingerprintSet;
use crate::value::{Container, Key, Value};
use std::collections::HashSet;
use std::convert::Infallible;
use tracing::trace;

/// Decides which entries a filter or trim pass may remove.
trait Matcher {
    type Error;

    /// Returns true if the entry matches the filter set.
    fn matches(&self, key: &Key, value: &Value) -> std::result::Result<bool, Self::Error>;

    /// Whether container values take part in matching at all.
    fn matches_containers(&self) -> bool;

    fn removes(
        &self,
        key: &Key,
        value: &Value,
        inverse: bool,
    ) -> std::result::Result<bool, Self::Error> {
        if value.is_container() && !self.matches_containers() {
            return Ok(false);
        }
        Ok(self.matches(key, value)? != inverse)
    }
}

/// Strict value membership. Container values never match.
struct ValueMatcher(FingerprintSet);

impl Matcher for ValueMatcher {
    type Error = Error;

    fn matches(&self, _: &Key, value: &Value) -> Result<bool> {
        self.0.contains_value(value)
    }

    fn matches_containers(&self) -> bool {
        false
    }
}

/// Key membership. Applies to every entry.
struct KeyMatcher<'a>(HashSet<&'a Key>);

impl Matcher for KeyMatcher<'_> {
    type Error = Infallible;

    fn matches(&self, key: &Key, _: &Value) -> std::result::Result<bool, Infallible> {
        Ok(self.0.contains(key))
    }

    fn matches_containers(&self) -> bool {
        true
    }
}

/// Which entries are candidates for removal.
#[derive(Debug, Clone, Copy)]
enum Scan {
    /// Every entry.
    All,
    /// Contiguous runs at the given ends, stopping at the first survivor.
    Ends(TrimSide),
}

/// Removes every entry whose value strictly matches one of `values`
/// (or, with `inverse`, every entry whose value matches none of them).
///
/// Container-valued entries are never matched; they are recursed into while
/// `depth` allows, and dropped afterwards if they came back empty and
/// `empty_removal` is set.
pub fn filter(
    container: &Container,
    values: &[Value],
    depth: Depth,
    options: &FilterOptions,
) -> Result<Container> {
    trace!(len = container.len(), values = values.len(), %depth, ?options, "filter");
    let matcher = ValueMatcher(FingerprintSet::from_values(values)?);
    filter_level(container, &matcher, depth, options, Scan::All)
}

/// Removes every entry whose key is one of `keys` (or, with `inverse`, every
/// entry whose key is not).
pub fn key_filter(
    container: &Container,
    keys: &[Key],
    depth: Depth,
    options: &FilterOptions,
) -> Container {
    trace!(len = container.len(), keys = keys.len(), %depth, ?options, "key_filter");
    let matcher = KeyMatcher(keys.iter().collect());
    infallible(filter_level(container, &matcher, depth, options, Scan::All))
}

/// Like [`filter`], but only removes matching runs at the ends selected by
/// `options.side`.
pub fn trim(
    container: &Container,
    values: &[Value],
    depth: Depth,
    options: &TrimOptions,
) -> Result<Container> {
    trace!(len = container.len(), values = values.len(), %depth, ?options, "trim");
    let matcher = ValueMatcher(FingerprintSet::from_values(values)?);
    filter_level(container, &matcher, depth, &options.filter, Scan::Ends(options.side))
}

/// Like [`key_filter`], but only removes matching runs at the ends selected
/// by `options.side`.
pub fn key_trim(
    container: &Container,
    keys: &[Key],
    depth: Depth,
    options: &TrimOptions,
) -> Container {
    trace!(len = container.len(), keys = keys.len(), %depth, ?options, "key_trim");
    let matcher = KeyMatcher(keys.iter().collect());
    infallible(filter_level(
        container,
        &matcher,
        depth,
        &options.filter,
        Scan::Ends(options.side),
    ))
}

fn infallible(result: std::result::Result<Container, Infallible>) -> Container {
    match result {
        Ok(container) => container,
        Err(never) => match never {},
    }
}

fn filter_level<M: Matcher>(
    container: &Container,
    matcher: &M,
    depth: Depth,
    options: &FilterOptions,
    scan: Scan,
) -> std::result::Result<Container, M::Error> {
    let list_like = container.is_list_like();
    let skip = excluded(container, options.skip_maps, options.skip_lists);
    let next = depth.descend();

    let mut entries = Vec::with_capacity(container.len());
    for (key, value) in container.iter() {
        match (value, next) {
            (Value::Container(child), Some(next)) => {
                let processed = filter_level(child, matcher, next, options, scan)?;
                if options.empty_removal && !skip && processed.is_empty() {
                    continue;
                }
                entries.push((key.clone(), Value::Container(processed)));
            }
            _ => entries.push((key.clone(), value.clone())),
        }
    }

    if !skip {
        entries = match scan {
            Scan::All => {
                let mut kept = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    if !matcher.removes(&key, &value, options.inverse)? {
                        kept.push((key, value));
                    }
                }
                kept
            }
            Scan::Ends(side) => trim_ends(entries, matcher, side, options.inverse)?,
        };
    }

    let changed = entries.len() != container.len();
    Ok(Container::from_unique_entries(entries)
        .reindexed_if(list_like && changed && !options.preserve_keys))
}

fn trim_ends<M: Matcher>(
    mut entries: Vec<(Key, Value)>,
    matcher: &M,
    side: TrimSide,
    inverse: bool,
) -> std::result::Result<Vec<(Key, Value)>, M::Error> {
    let mut end = entries.len();
    if side.includes_right() {
        while end > 0 {
            let (key, value) = &entries[end - 1];
            if !matcher.removes(key, value, inverse)? {
                break;
            }
            end -= 1;
        }
    }
    entries.truncate(end);

    let mut start = 0;
    if side.includes_left() {
        while start < entries.len() {
            let (key, value) = &entries[start];
            if !matcher.removes(key, value, inverse)? {
                break;
            }
            start += 1;
        }
    }
    entries.drain(..start);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{container, value};
    use pretty_assertions::assert_eq;

    fn values(json: &str) -> Vec<Value> {
        container(json).values().cloned().collect()
    }

    fn keys(names: &[&str]) -> Vec<Key> {
        names.iter().map(|n| Key::from(*n)).collect()
    }

    #[test]
    fn test_filter_map_by_value() {
        let input = container(r#"{"a":123,"b":"f2b","c":"f2b"}"#);
        let out = filter(&input, &[value(r#""f2b""#)], Depth::unlimited(), &FilterOptions::new()).unwrap();
        assert_eq!(out, container(r#"{"a":123}"#));
    }

    #[test]
    fn test_filter_is_strict() {
        let input = container(r#"[0,"0",0.0,false,null,1]"#);
        let out = filter(&input, &values("[0, null]"), Depth::unlimited(), &FilterOptions::new()).unwrap();
        assert_eq!(out, container(r#"["0",0.0,false,1]"#));
    }

    #[test]
    fn test_filter_negative_zero_matches_zero() {
        let input = Container::list([Value::Float(-0.0), Value::Float(1.5)]);
        let out = filter(&input, &[Value::Float(0.0)], Depth::unlimited(), &FilterOptions::new()).unwrap();
        assert_eq!(out, Container::list([Value::Float(1.5)]));
    }

    #[test]
    fn test_filter_inverse() {
        let input = container(r#"[1,2,3,[2,4],2]"#);
        let opts = FilterOptions::new().with_inverse(true);
        let out = filter(&input, &values("[2]"), Depth::unlimited(), &opts).unwrap();
        assert_eq!(out, container("[2,[2],2]"));
    }

    #[test]
    fn test_filter_recurses_with_empty_removal() {
        let input = container(r#"{"a":["x","x"],"b":{"c":"x","d":"y"},"e":[]}"#);
        let x = [Value::from("x")];

        let out = filter(&input, &x, Depth::unlimited(), &FilterOptions::new()).unwrap();
        assert_eq!(out, container(r#"{"a":[],"b":{"d":"y"},"e":[]}"#));

        let opts = FilterOptions::new().with_empty_removal(true);
        let out = filter(&input, &x, Depth::unlimited(), &opts).unwrap();
        assert_eq!(out, container(r#"{"b":{"d":"y"}}"#));
    }

    #[test]
    fn test_empty_removal_cascades_and_reindexes() {
        let input = container(r#"[1,[[1],[1]],2]"#);
        let opts = FilterOptions::new().with_empty_removal(true);
        let out = filter(&input, &values("[1]"), Depth::unlimited(), &opts).unwrap();
        assert_eq!(out, container("[2]"));
    }

    #[test]
    fn test_filter_depth_zero_leaves_children() {
        let input = container(r#"[1,[1,2],1]"#);
        let opts = FilterOptions::new().with_empty_removal(true);
        let out = filter(&input, &values("[1]"), Depth::levels(0), &opts).unwrap();
        assert_eq!(out, container("[[1,2]]"));
    }

    #[test]
    fn test_filter_preserve_keys() {
        let input = container(r#"["a","b","a"]"#);
        let opts = FilterOptions::new().with_preserve_keys(true);
        let out = filter(&input, &values(r#"["a"]"#), Depth::unlimited(), &opts).unwrap();
        assert_eq!(out, container(r#"{"1":"b"}"#));
    }

    #[test]
    fn test_filter_skip_maps() {
        let input = container(r#"{"a":1,"b":[1,2]}"#);
        let opts = FilterOptions::new().with_skip_maps(true);
        let out = filter(&input, &values("[1]"), Depth::unlimited(), &opts).unwrap();
        assert_eq!(out, container(r#"{"a":1,"b":[2]}"#));
    }

    #[test]
    fn test_key_filter() {
        let input = container(r#"{"id":1,"secret":"s","child":{"secret":"t","name":"n"}}"#);
        let out = key_filter(&input, &keys(&["secret"]), Depth::unlimited(), &FilterOptions::new());
        assert_eq!(out, container(r#"{"id":1,"child":{"name":"n"}}"#));
    }

    #[test]
    fn test_key_filter_inverse() {
        let input = container(r#"{"id":1,"secret":"s","name":"n"}"#);
        let opts = FilterOptions::new().with_inverse(true);
        let out = key_filter(&input, &keys(&["id", "name"]), Depth::unlimited(), &opts);
        assert_eq!(out, container(r#"{"id":1,"name":"n"}"#));
    }

    #[test]
    fn test_key_filter_list_indices() {
        let input = container(r#"["a","b","c"]"#);
        let out = key_filter(&input, &[Key::Index(1)], Depth::unlimited(), &FilterOptions::new());
        assert_eq!(out, container(r#"["a","c"]"#));
    }

    #[test]
    fn test_trim_both_ends() {
        let input = container(r#"[null,"",1,null,2,"",null]"#);
        let blanks = values(r#"[null,""]"#);
        let out = trim(&input, &blanks, Depth::unlimited(), &TrimOptions::new()).unwrap();
        assert_eq!(out, container("[1,null,2]"));
    }

    #[test]
    fn test_trim_one_side() {
        let input = container(r#"[0,0,1,0]"#);
        let zero = values("[0]");

        let left = TrimOptions::new().with_side(TrimSide::Left);
        assert_eq!(trim(&input, &zero, Depth::unlimited(), &left).unwrap(), container("[1,0]"));

        let right = TrimOptions::new().with_side(TrimSide::Right);
        assert_eq!(trim(&input, &zero, Depth::unlimited(), &right).unwrap(), container("[0,0,1]"));
    }

    #[test]
    fn test_trim_everything() {
        let input = container("[0,0]");
        let out = trim(&input, &values("[0]"), Depth::unlimited(), &TrimOptions::new()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_trim_stops_at_container_unless_removed() {
        let input = container(r#"[0,[0],0,5]"#);
        let zero = values("[0]");

        let out = trim(&input, &zero, Depth::unlimited(), &TrimOptions::new()).unwrap();
        assert_eq!(out, container("[[],0,5]"));

        let opts = TrimOptions::new().with_empty_removal(true);
        let out = trim(&input, &zero, Depth::unlimited(), &opts).unwrap();
        assert_eq!(out, container("[5]"));
    }

    #[test]
    fn test_trim_inverse() {
        let input = container(r#"["x",1,2,"y",3,"z"]"#);
        let opts = TrimOptions::new().with_inverse(true);
        let out = trim(&input, &values("[1,2,3]"), Depth::unlimited(), &opts).unwrap();
        assert_eq!(out, container(r#"[1,2,"y",3]"#));
    }

    #[test]
    fn test_key_trim() {
        let input = container(r#"{"_a":1,"b":2,"_c":3,"_d":4}"#);
        let opts = TrimOptions::new().with_side(TrimSide::Right);
        let out = key_trim(&input, &keys(&["_a", "_c", "_d"]), Depth::unlimited(), &opts);
        assert_eq!(out, container(r#"{"_a":1,"b":2}"#));
    }
}
