//! Reading, writing and removing values along a path.

use super::delimiter::Delimiter;
use super::path::Path;
use crate::error::{Error, Result};
use crate::value::{Container, Key, Value};
use tracing::{debug, trace};

/// Returns true if `path` resolves to a value.
pub fn has(container: &Container, path: &str, delimiter: Delimiter) -> bool {
    trace!(path, %delimiter, "has");
    lookup(container, &Path::parse(path, delimiter)).is_some()
}

/// Returns the value at `path`.
///
/// Fails with `PathNotFound` when a segment is missing or an intermediate
/// value is not a container.
pub fn get<'a>(container: &'a Container, path: &str, delimiter: Delimiter) -> Result<&'a Value> {
    trace!(path, %delimiter, "get");
    lookup(container, &Path::parse(path, delimiter)).ok_or_else(|| Error::path_not_found(path))
}

/// Returns a copy of `container` with `value` stored at `path`, creating
/// missing intermediate containers.
///
/// Fails with `PathTypeMismatch` when an existing intermediate value is not a
/// container.
pub fn set(
    container: &Container,
    path: &str,
    value: impl Into<Value>,
    delimiter: Delimiter,
) -> Result<Container> {
    trace!(path, %delimiter, "set");
    let mut out = container.clone();
    set_in(&mut out, Path::parse(path, delimiter).as_slice(), value.into(), path)?;
    Ok(out)
}

/// Returns a copy of `container` with the value at `path` removed, along with
/// the removed value. A missing path leaves the copy unchanged and yields
/// `None`.
///
/// Intermediate containers left empty by the removal are removed as well.
/// Fails with `PathTypeMismatch` when an existing intermediate value is not a
/// container.
pub fn delete(
    container: &Container,
    path: &str,
    delimiter: Delimiter,
) -> Result<(Container, Option<Value>)> {
    trace!(path, %delimiter, "delete");
    let mut out = container.clone();
    let removed = delete_in(&mut out, Path::parse(path, delimiter).as_slice(), path)?;
    if removed.is_none() {
        debug!(path, "delete found nothing");
    }
    Ok((out, removed))
}

pub(crate) fn lookup<'a>(container: &'a Container, path: &Path) -> Option<&'a Value> {
    let (last, parents) = path.as_slice().split_last()?;
    let mut current = container;
    for segment in parents {
        current = current.get(segment)?.as_container()?;
    }
    current.get(last)
}

/// Stores `value` under `segments`, creating intermediates. `path` is only
/// used for error reporting.
pub(crate) fn set_in(
    container: &mut Container,
    segments: &[Key],
    value: Value,
    path: &str,
) -> Result<()> {
    let Some((last, parents)) = segments.split_last() else {
        return Ok(());
    };
    let mut current = container;
    for segment in parents {
        current = match current.get_or_insert_with(segment.clone(), || Container::new().into()) {
            Value::Container(child) => child,
            other => {
                return Err(Error::path_type_mismatch(
                    path,
                    segment.to_string(),
                    other.type_name(),
                ))
            }
        };
    }
    current.insert(last.clone(), value);
    Ok(())
}

fn delete_in(container: &mut Container, segments: &[Key], path: &str) -> Result<Option<Value>> {
    let Some((first, rest)) = segments.split_first() else {
        return Ok(None);
    };
    if rest.is_empty() {
        return Ok(container.remove(first));
    }

    let child = match container.get_mut(first) {
        None => return Ok(None),
        Some(Value::Container(child)) => child,
        Some(other) => {
            return Err(Error::path_type_mismatch(
                path,
                first.to_string(),
                other.type_name(),
            ))
        }
    };
    let removed = delete_in(child, rest, path)?;
    if removed.is_some() && child.is_empty() {
        container.remove(first);
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::container;
    use pretty_assertions::assert_eq;

    const DOT: Delimiter = Delimiter::DOT;

    #[test]
    fn test_get() {
        let c = container(r#"{"foo":{"bar":42}}"#);
        assert_eq!(get(&c, "foo.bar", DOT), Ok(&Value::Int(42)));

        let c = container(r#"{"foo":{}}"#);
        assert_eq!(get(&c, "foo.bar", DOT), Err(Error::path_not_found("foo.bar")));
    }

    #[test]
    fn test_get_through_scalar_is_not_found() {
        let c = container(r#"{"foo":"text"}"#);
        let err = get(&c, "foo.bar", DOT).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_has() {
        let c = container(r#"{"a":[{"b":null}]}"#);
        assert!(has(&c, "a.0.b", DOT));
        assert!(has(&c, "a", DOT));
        assert!(!has(&c, "a.1.b", DOT));
        assert!(!has(&c, "a.0.b.c", DOT));
    }

    #[test]
    fn test_set_creates_intermediates() {
        let c = container(r#"{"a":1}"#);
        let out = set(&c, "b.c.d", "x", DOT).unwrap();
        assert_eq!(out, container(r#"{"a":1,"b":{"c":{"d":"x"}}}"#));
        assert_eq!(c, container(r#"{"a":1}"#));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let c = container(r#"{"a":{"x":1,"y":2},"b":3}"#);
        let out = set(&c, "a.x", Value::Null, DOT).unwrap();
        assert_eq!(out, container(r#"{"a":{"x":null,"y":2},"b":3}"#));
    }

    #[test]
    fn test_set_into_list() {
        let c = container(r#"{"items":["a","b"]}"#);
        let out = set(&c, "items.2", "c", DOT).unwrap();
        assert_eq!(out, container(r#"{"items":["a","b","c"]}"#));
    }

    #[test]
    fn test_set_through_scalar_fails() {
        let c = container(r#"{"a":{"b":5}}"#);
        assert_eq!(
            set(&c, "a.b.c", 1, DOT),
            Err(Error::path_type_mismatch("a.b.c", "b", "int"))
        );
    }

    #[test]
    fn test_delete_prunes_emptied_parents() {
        let c = container(r#"{"a":{"b":{"c":1}},"d":2}"#);
        let (out, removed) = delete(&c, "a.b.c", DOT).unwrap();
        assert_eq!(removed, Some(Value::Int(1)));
        assert_eq!(out, container(r#"{"d":2}"#));
    }

    #[test]
    fn test_delete_stops_pruning_at_non_empty_parent() {
        let c = container(r#"{"a":{"b":{"c":1},"keep":true}}"#);
        let (out, _) = delete(&c, "a.b.c", DOT).unwrap();
        assert_eq!(out, container(r#"{"a":{"keep":true}}"#));
    }

    #[test]
    fn test_delete_keeps_already_empty_siblings() {
        let c = container(r#"{"a":{"b":1,"e":{}}}"#);
        let (out, _) = delete(&c, "a.b", DOT).unwrap();
        assert_eq!(out, container(r#"{"a":{"e":{}}}"#));
    }

    #[test]
    fn test_delete_root_entry_leaves_empty_root() {
        let c = container(r#"{"a":1}"#);
        let (out, removed) = delete(&c, "a", DOT).unwrap();
        assert!(out.is_empty());
        assert_eq!(removed, Some(Value::Int(1)));
    }

    #[test]
    fn test_delete_missing() {
        let c = container(r#"{"a":{"b":1}}"#);
        let (out, removed) = delete(&c, "a.x.y", DOT).unwrap();
        assert_eq!(removed, None);
        assert_eq!(out, c);
    }

    #[test]
    fn test_delete_through_scalar_fails() {
        let c = container(r#"{"a":"s"}"#);
        let err = delete(&c, "a.b", DOT).unwrap_err();
        assert_eq!(err, Error::path_type_mismatch("a.b", "a", "string"));
    }

    #[test]
    fn test_custom_delimiter() {
        let c = container(r#"{"a.b":{"c":1}}"#);
        let slash = Delimiter::from('/');
        assert_eq!(get(&c, "a.b/c", slash), Ok(&Value::Int(1)));
        assert!(!has(&c, "a.b.c", DOT));
    }
}
