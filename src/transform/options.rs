//! Option sets for the transform families.
//!
//! Every struct is a plain set of named switches. All switches default to
//! off, and each struct deserializes from a partial JSON/YAML object.

use serde::{Deserialize, Serialize};

macro_rules! switches {
    ($ty:ident { $($field:ident => $setter:ident),* $(,)? }) => {
        impl $ty {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, enabled: bool) -> Self {
                    self.$field = enabled;
                    self
                }
            )*
        }
    };
}

/// UniqueOptions configures [`unique`](super::unique).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniqueOptions {
    /// Keep original keys of list-like containers instead of reindexing.
    pub preserve_keys: bool,
    /// Treat nested containers as comparable values, collapsing duplicates.
    pub containers_as_values: bool,
    /// Leave map-like containers undeduplicated (their children still are).
    pub skip_maps: bool,
    /// Leave list-like containers undeduplicated (their children still are).
    pub skip_lists: bool,
}

switches!(UniqueOptions {
    preserve_keys => with_preserve_keys,
    containers_as_values => with_containers_as_values,
    skip_maps => with_skip_maps,
    skip_lists => with_skip_lists,
});

/// SortOptions configures [`sort`](super::sort), [`key_sort`](super::key_sort)
/// and [`function_sort`](super::function_sort).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// Invert the comparison.
    pub reverse: bool,
    /// Keep original keys of list-like containers instead of reindexing.
    pub preserve_keys: bool,
    pub skip_maps: bool,
    pub skip_lists: bool,
}

switches!(SortOptions {
    reverse => with_reverse,
    preserve_keys => with_preserve_keys,
    skip_maps => with_skip_maps,
    skip_lists => with_skip_lists,
});

/// FilterOptions configures [`filter`](super::filter) and
/// [`key_filter`](super::key_filter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Remove entries that do not match instead of those that do.
    pub inverse: bool,
    /// Remove nested containers that end up empty.
    pub empty_removal: bool,
    /// Keep original keys of list-like containers instead of reindexing.
    pub preserve_keys: bool,
    pub skip_maps: bool,
    pub skip_lists: bool,
}

switches!(FilterOptions {
    inverse => with_inverse,
    empty_removal => with_empty_removal,
    preserve_keys => with_preserve_keys,
    skip_maps => with_skip_maps,
    skip_lists => with_skip_lists,
});

/// TrimSide selects which ends of a container a trim scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimSide {
    Left,
    Right,
    #[default]
    Both,
}

impl TrimSide {
    pub fn includes_left(self) -> bool {
        matches!(self, TrimSide::Left | TrimSide::Both)
    }

    pub fn includes_right(self) -> bool {
        matches!(self, TrimSide::Right | TrimSide::Both)
    }
}

/// TrimOptions configures [`trim`](super::trim) and [`key_trim`](super::key_trim).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimOptions {
    pub side: TrimSide,
    #[serde(flatten)]
    pub filter: FilterOptions,
}

impl TrimOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_side(mut self, side: TrimSide) -> Self {
        self.side = side;
        self
    }

    pub fn with_inverse(mut self, enabled: bool) -> Self {
        self.filter.inverse = enabled;
        self
    }

    pub fn with_empty_removal(mut self, enabled: bool) -> Self {
        self.filter.empty_removal = enabled;
        self
    }

    pub fn with_preserve_keys(mut self, enabled: bool) -> Self {
        self.filter.preserve_keys = enabled;
        self
    }

    pub fn with_skip_maps(mut self, enabled: bool) -> Self {
        self.filter.skip_maps = enabled;
        self
    }

    pub fn with_skip_lists(mut self, enabled: bool) -> Self {
        self.filter.skip_lists = enabled;
        self
    }
}

/// CompareOptions configures the intersect and diff families.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Match list-like pairs by key and value, and keep their keys.
    pub associative: bool,
}

switches!(CompareOptions {
    associative => with_associative,
});

pub type IntersectOptions = CompareOptions;
pub type DiffOptions = CompareOptions;

/// ShuffleOptions configures [`shuffle`](super::shuffle).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShuffleOptions {
    /// Permute list-like containers with their keys instead of reindexing.
    pub associative: bool,
    pub skip_maps: bool,
    pub skip_lists: bool,
}

switches!(ShuffleOptions {
    associative => with_associative,
    skip_maps => with_skip_maps,
    skip_lists => with_skip_lists,
});

/// AlignOptions configures [`align`](super::align).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignOptions {
    pub preserve_keys: bool,
    pub skip_maps: bool,
    pub skip_lists: bool,
}

switches!(AlignOptions {
    preserve_keys => with_preserve_keys,
    skip_maps => with_skip_maps,
    skip_lists => with_skip_lists,
});
