//! Transform module - Recursive single- and two-container transforms.
//!
//! Every transform returns a new container and leaves its inputs untouched.
//! Each recurses into nested containers while the supplied [`Depth`] allows,
//! and classifies every container it visits afresh as list-like or map-like.
//!
//! [`Depth`]: crate::depth::Depth

mod arrange;
mod compare;
mod filter;
mod options;
mod sort;
mod unique;

#[cfg(test)]
mod unique_test;

pub use arrange::*;
pub use compare::*;
pub use filter::*;
pub use options::*;
pub use sort::*;
pub use unique::*;

use crate::value::Container;

/// Returns true when the options exclude this container's kind from being
/// transformed at its own level.
fn excluded(container: &Container, skip_maps: bool, skip_lists: bool) -> bool {
    if container.is_list_like() {
        skip_lists
    } else {
        skip_maps
    }
}
