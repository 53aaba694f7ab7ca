//! Field path module - Addresses nested values by delimiter-joined key paths.
//!
//! A path such as `spec.containers.0.name` names one key per level. This
//! module reads, writes and removes values along such paths, flattens a
//! nested container into a single level keyed by full paths (and back), and
//! picks the first non-null value out of a container.

mod access;
mod coalesce;
mod delimiter;
mod path;
mod wrap;


pub use access::*;
pub use coalesce::*;
pub use delimiter::*;
pub use path::*;
pub use wrap::*;
