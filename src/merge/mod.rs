//! Merge module - Recursive combination of two containers.
//!
//! This module provides the merge engine and its strategy options.

mod merge;
mod options;


pub use merge::*;
pub use options::*;
