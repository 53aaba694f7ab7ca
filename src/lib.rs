//! # Structured Transform
//!
//! Recursive merge, dedupe, sort, filter, intersect and diff operations over
//! ordered key-value containers.
//!
//! Every operation works on a [`Container`]: an ordered sequence of unique
//! `(Key, Value)` pairs that plays both the list and the map role. Whether a
//! container is list-like (keys exactly `0..n-1`) is recomputed wherever an
//! operation needs it. Operations are pure: they return a new container and
//! leave their inputs untouched. Recursion into nested containers is bounded
//! by a [`Depth`].
//!
//! ## Modules
//!
//! - [`value`] - Keys, values, containers, natural ordering and JSON/YAML conversion
//! - [`fingerprint`] - Strict, type-discriminating value fingerprints
//! - [`merge`] - Recursive two-container merge with list and map strategies
//! - [`transform`] - Unique, sort, filter/trim, intersect/diff, shuffle and align
//! - [`fieldpath`] - Path get/set/delete, wrap/unwrap and coalesce
//! - [`depth`] - The validated recursion bound
//! - [`error`] - The crate error type

pub mod depth;
pub mod error;
pub mod fieldpath;
pub mod fingerprint;
pub mod merge;
pub mod transform;
pub mod value;

#[cfg(test)]
mod testing;

pub use depth::Depth;
pub use error::{Error, Result};
pub use fieldpath::{coalesce, Delimiter, Path};
pub use fingerprint::{fingerprint, Fingerprint, FingerprintSet};
pub use merge::{merge, ListStrategy, MergeOptions};
pub use transform::{
    AlignOptions, CompareOptions, DiffOptions, FilterOptions, IntersectOptions, ShuffleOptions,
    SortOptions, TrimOptions, TrimSide, UniqueOptions,
};
pub use value::{Container, Handle, HandleKind, Key, Value};
