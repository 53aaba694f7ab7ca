//! Shared helpers for unit tests.

use crate::value::{from_json, Container, Value};

/// Builds a container from a JSON array or object literal.
pub(crate) fn container(json: &str) -> Container {
    from_json(json)
        .unwrap_or_else(|e| panic!("invalid JSON literal {json}: {e}"))
        .into_container()
        .unwrap_or_else(|| panic!("JSON literal is not a container: {json}"))
}

/// Builds a value from a JSON literal.
pub(crate) fn value(json: &str) -> Value {
    from_json(json).unwrap_or_else(|e| panic!("invalid JSON literal {json}: {e}"))
}

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
