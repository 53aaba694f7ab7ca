//! Two-container comparison: intersect and diff, by value or by key.

use super::options::CompareOptions;
use crate::depth::Depth;
use crate::error::Result;
use crate::fingerprint::{fingerprint, FingerprintSet};
use crate::value::{Container, Value};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Intersect,
    Diff,
}

impl Mode {
    fn keeps(self, found: bool) -> bool {
        match self {
            Mode::Intersect => found,
            Mode::Diff => !found,
        }
    }

    /// Result for a level where one side is empty.
    fn short_circuit(self, a: &Container) -> Container {
        match self {
            Mode::Intersect => Container::new(),
            Mode::Diff => a.clone(),
        }
    }

    fn keeps_empty_child(self) -> bool {
        self == Mode::Diff
    }
}

/// Keeps the entries of `a` whose value strictly exists in `b`.
///
/// For a pair of list-like containers a value may be found anywhere in `b`;
/// otherwise (or with `associative`) it must sit under the same key. Where
/// `a[k]` and `b[k]` are both containers and `depth` allows, the entry is
/// replaced by their intersection, and dropped if that comes back empty.
pub fn intersect(
    a: &Container,
    b: &Container,
    depth: Depth,
    options: &CompareOptions,
) -> Result<Container> {
    trace!(len = a.len(), other = b.len(), %depth, ?options, "intersect");
    value_level(a, b, depth, options, Mode::Intersect)
}

/// Keeps the entries of `a` whose value does not strictly exist in `b`,
/// under the same matching rule as [`intersect`].
pub fn diff(a: &Container, b: &Container, depth: Depth, options: &CompareOptions) -> Result<Container> {
    trace!(len = a.len(), other = b.len(), %depth, ?options, "diff");
    value_level(a, b, depth, options, Mode::Diff)
}

/// Keeps the entries of `a` whose key also exists in `b`.
pub fn key_intersect(a: &Container, b: &Container, depth: Depth, options: &CompareOptions) -> Container {
    trace!(len = a.len(), other = b.len(), %depth, ?options, "key_intersect");
    key_level(a, b, depth, options, Mode::Intersect)
}

/// Keeps the entries of `a` whose key does not exist in `b`. Entries whose
/// key exists on both sides with container values are replaced by the key
/// diff of the two children.
pub fn key_diff(a: &Container, b: &Container, depth: Depth, options: &CompareOptions) -> Container {
    trace!(len = a.len(), other = b.len(), %depth, ?options, "key_diff");
    key_level(a, b, depth, options, Mode::Diff)
}

fn value_level(
    a: &Container,
    b: &Container,
    depth: Depth,
    options: &CompareOptions,
    mode: Mode,
) -> Result<Container> {
    if a.is_empty() || b.is_empty() {
        debug!(?mode, "empty operand");
        return Ok(mode.short_circuit(a));
    }

    let value_only = !options.associative && a.is_list_like() && b.is_list_like();
    let index = b.index();
    // Value-only matching looks anywhere in `b`; otherwise under the same key.
    let anywhere = if value_only {
        Some(FingerprintSet::from_values(b.values())?)
    } else {
        None
    };
    let next = depth.descend();

    let mut entries = Vec::with_capacity(a.len());
    for (key, value) in a.iter() {
        if let (Value::Container(child), Some(Value::Container(other)), Some(next)) =
            (value, index.get(key).copied(), next)
        {
            let processed = value_level(child, other, next, options, mode)?;
            if processed.is_empty() && !mode.keeps_empty_child() {
                continue;
            }
            entries.push((key.clone(), Value::Container(processed)));
            continue;
        }

        let found = match (&anywhere, index.get(key)) {
            (Some(set), _) => set.contains_value(value)?,
            (None, Some(other)) => fingerprint(value)? == fingerprint(other)?,
            (None, None) => false,
        };
        if mode.keeps(found) {
            entries.push((key.clone(), value.clone()));
        }
    }

    let changed = entries.len() != a.len();
    Ok(Container::from_unique_entries(entries).reindexed_if(value_only && changed))
}

fn key_level(
    a: &Container,
    b: &Container,
    depth: Depth,
    options: &CompareOptions,
    mode: Mode,
) -> Container {
    if a.is_empty() || b.is_empty() {
        debug!(?mode, "empty operand");
        return mode.short_circuit(a);
    }

    let list_like = a.is_list_like();
    let index = b.index();
    let next = depth.descend();

    let mut entries = Vec::with_capacity(a.len());
    for (key, value) in a.iter() {
        let Some(other) = index.get(key).copied() else {
            if mode.keeps(false) {
                entries.push((key.clone(), value.clone()));
            }
            continue;
        };
        match (value, other, next) {
            (Value::Container(child), Value::Container(other), Some(next)) => {
                let processed = key_level(child, other, next, options, mode);
                if processed.is_empty() && !mode.keeps_empty_child() {
                    continue;
                }
                entries.push((key.clone(), Value::Container(processed)));
            }
            _ if mode.keeps(true) => entries.push((key.clone(), value.clone())),
            _ => {}
        }
    }

    let changed = entries.len() != a.len();
    Container::from_unique_entries(entries)
        .reindexed_if(list_like && changed && !options.associative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::container;
    use crate::value::Handle;
    use pretty_assertions::assert_eq;

    fn run(
        op: fn(&Container, &Container, Depth, &CompareOptions) -> Result<Container>,
        a: &str,
        b: &str,
        options: CompareOptions,
    ) -> Container {
        op(&container(a), &container(b), Depth::unlimited(), &options)
            .unwrap_or_else(|e| panic!("compare {a} with {b} failed: {e}"))
    }

    #[test]
    fn test_intersect_lists_by_value() {
        let out = run(intersect, r#"[1,2,3,"3"]"#, "[3,1,5]", CompareOptions::new());
        assert_eq!(out, container("[1,3]"));
    }

    #[test]
    fn test_intersect_is_strict() {
        let out = run(intersect, r#"[0,"1",1.0]"#, r#"["0",1,1.0]"#, CompareOptions::new());
        assert_eq!(out, container("[1.0]"));
    }

    #[test]
    fn test_intersect_maps_by_key_and_value() {
        let out = run(
            intersect,
            r#"{"a":1,"b":2,"c":3}"#,
            r#"{"a":1,"b":3,"d":3}"#,
            CompareOptions::new(),
        );
        assert_eq!(out, container(r#"{"a":1}"#));
    }

    #[test]
    fn test_intersect_associative_lists_keep_keys() {
        let opts = CompareOptions::new().with_associative(true);
        let out = run(intersect, "[1,2,3]", "[1,3,3]", opts);
        assert_eq!(out, container(r#"{"0":1,"2":3}"#));
    }

    #[test]
    fn test_intersect_recurses_and_drops_empty() {
        let out = run(
            intersect,
            r#"{"x":{"a":1,"b":2},"y":{"c":1}}"#,
            r#"{"x":{"a":1},"y":{"c":2}}"#,
            CompareOptions::new(),
        );
        assert_eq!(out, container(r#"{"x":{"a":1}}"#));
    }

    #[test]
    fn test_intersect_nested_lists() {
        let out = run(intersect, "[[1,2]]", "[[2,3]]", CompareOptions::new());
        assert_eq!(out, container("[[2]]"));
    }

    #[test]
    fn test_intersect_matches_containers_structurally() {
        let out = run(intersect, "[[1,2],3]", "[3,[1,2]]", CompareOptions::new());
        assert_eq!(out, container("[[1,2],3]"));
    }

    #[test]
    fn test_diff_keeps_empty_children() {
        let out = run(
            diff,
            r#"{"x":{"a":1,"b":2},"y":{"c":1},"z":{"d":1}}"#,
            r#"{"x":{"a":1},"y":{"c":2},"z":{"d":1}}"#,
            CompareOptions::new(),
        );
        assert_eq!(out, container(r#"{"x":{"b":2},"y":{"c":1},"z":{}}"#));
    }

    #[test]
    fn test_diff_lists_reindex() {
        let out = run(diff, "[1,2,3,2]", "[2]", CompareOptions::new());
        assert_eq!(out, container("[1,3]"));
    }

    #[test]
    fn test_empty_operands() {
        let a = r#"{"a":1}"#;
        assert!(run(intersect, a, "[]", CompareOptions::new()).is_empty());
        assert!(run(intersect, "[]", a, CompareOptions::new()).is_empty());
        assert_eq!(run(diff, a, "[]", CompareOptions::new()), container(a));
        assert!(run(diff, "[]", a, CompareOptions::new()).is_empty());
    }

    #[test]
    fn test_depth_zero_compares_children_whole() {
        let a = container(r#"{"x":{"a":1,"b":2}}"#);
        let b = container(r#"{"x":{"a":1}}"#);
        let opts = CompareOptions::new();
        assert!(intersect(&a, &b, Depth::levels(0), &opts).unwrap().is_empty());
        assert_eq!(diff(&a, &b, Depth::levels(0), &opts).unwrap(), a);
    }

    #[test]
    fn test_closed_resource_fails() {
        let a = Container::list([Value::Handle(Handle::closed_resource(1))]);
        let b = Container::list([Value::Int(1)]);
        assert_eq!(
            intersect(&a, &b, Depth::unlimited(), &CompareOptions::new()),
            Err(Error::unsupported_value_type("resource (closed)"))
        );
    }

    #[test]
    fn test_key_intersect_and_diff() {
        let a = container(r#"{"a":1,"b":{"x":1,"y":2},"c":3}"#);
        let b = container(r#"{"a":"other","b":{"y":0},"d":1}"#);
        let opts = CompareOptions::new();

        let out = key_intersect(&a, &b, Depth::unlimited(), &opts);
        assert_eq!(out, container(r#"{"a":1,"b":{"y":2}}"#));

        let out = key_diff(&a, &b, Depth::unlimited(), &opts);
        assert_eq!(out, container(r#"{"b":{"x":1},"c":3}"#));
    }

    #[test]
    fn test_key_intersect_keeps_container_against_scalar() {
        let a = container(r#"{"a":{"x":1}}"#);
        let b = container(r#"{"a":5}"#);
        let out = key_intersect(&a, &b, Depth::unlimited(), &CompareOptions::new());
        assert_eq!(out, a);
    }

    #[test]
    fn test_key_diff_lists() {
        let a = container(r#"["a","b","c"]"#);
        let b = container(r#"["x","y"]"#);

        let out = key_intersect(&a, &b, Depth::unlimited(), &CompareOptions::new());
        assert_eq!(out, container(r#"["a","b"]"#));

        let out = key_diff(&a, &b, Depth::unlimited(), &CompareOptions::new());
        assert_eq!(out, container(r#"["c"]"#));

        let opts = CompareOptions::new().with_associative(true);
        let out = key_diff(&a, &b, Depth::unlimited(), &opts);
        assert_eq!(out, container(r#"{"2":"c"}"#));
    }
}
