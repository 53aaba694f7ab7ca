//! Key paths.

use super::delimiter::Delimiter;
use crate::value::Key;

/// Path is a sequence of keys, one per nesting level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Key>,
}

impl Path {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    pub fn from_segments(segments: Vec<Key>) -> Self {
        Path { segments }
    }

    /// Splits `path` on `delimiter`, normalising each segment with
    /// [`Key::parse`]. Empty segments are kept as empty string keys.
    pub fn parse(path: &str, delimiter: Delimiter) -> Self {
        path.split(delimiter.as_char()).map(Key::parse).collect()
    }

    /// Joins the segments with `delimiter`.
    pub fn join(&self, delimiter: Delimiter) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(delimiter.as_char());
            }
            out.push_str(&segment.to_string());
        }
        out
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.segments.iter()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Key) {
        self.segments.push(segment);
    }

    /// Removes and returns the last segment.
    pub fn pop(&mut self) -> Option<Key> {
        self.segments.pop()
    }

    pub fn last(&self) -> Option<&Key> {
        self.segments.last()
    }

    /// Creates a new path with the given segment appended.
    pub fn with(&self, segment: Key) -> Self {
        let mut path = self.clone();
        path.push(segment);
        path
    }

    pub fn as_slice(&self) -> &[Key] {
        &self.segments
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Path {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.join(Delimiter::default()))
    }
}
