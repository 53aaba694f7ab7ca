//! Merge strategy selection.

use serde::{Deserialize, Serialize};

/// ListStrategy selects how two list-like containers are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStrategy {
    /// Concatenate, recomputing indices.
    #[default]
    Append,
    /// Keep the left entries at shared positions, then add the right remainder.
    /// Shared positions are not merged recursively.
    Union,
    /// Keep only the left positions; right values replace left ones there.
    Left,
    /// Take the right container verbatim.
    Swap,
    /// Take the left container verbatim.
    Keep,
    /// Merge key-wise, exactly like map-like containers.
    Assoc,
}

/// MergeOptions configures [`merge`](super::merge).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// On a key collision between map-like containers keep the left value.
    pub assoc_union: bool,
    /// Drop keys that only exist in the right map-like container.
    pub assoc_left: bool,
    /// Strategy for two list-like containers.
    pub list_strategy: ListStrategy,
    /// Deduplicate a merged list at that level.
    pub list_unique: bool,
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assoc_union(mut self, enabled: bool) -> Self {
        self.assoc_union = enabled;
        self
    }

    pub fn with_assoc_left(mut self, enabled: bool) -> Self {
        self.assoc_left = enabled;
        self
    }

    pub fn with_list_strategy(mut self, strategy: ListStrategy) -> Self {
        self.list_strategy = strategy;
        self
    }

    pub fn with_list_unique(mut self, enabled: bool) -> Self {
        self.list_unique = enabled;
        self
    }
}
