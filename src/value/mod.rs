//! Value module - In-memory representation of nested containers.
//!
//! This module provides the value sum type, container keys, the ordered
//! container with its list-like/map-like classifier, and JSON/YAML conversion.

mod container;
mod convert;
mod key;
mod value;

pub use container::*;
pub use convert::*;
pub use key::*;
pub use value::*;
