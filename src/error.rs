//! Error types for container transforms.

use thiserror::Error;

/// Error represents every failure a transform can surface.
///
/// All failures are local and synchronous: a failing call returns before
/// producing any output, and errors from nested recursion propagate unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid depth {depth}: depth must be non-negative")]
    InvalidDepth { depth: i64 },

    #[error("invalid path delimiter {delimiter:?}: expected exactly one character")]
    InvalidPathDelimiter { delimiter: String },

    #[error("path not found: {path}")]
    PathNotFound { path: String },

    #[error("{path}: cannot index into {actual} value at segment {segment:?}")]
    PathTypeMismatch {
        path: String,
        segment: String,
        actual: String,
    },

    #[error("unsupported value type: {type_name}")]
    UnsupportedValueType { type_name: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an invalid depth error.
    pub fn invalid_depth(depth: i64) -> Self {
        Error::InvalidDepth { depth }
    }

    /// Creates an invalid delimiter error.
    pub fn invalid_path_delimiter(delimiter: impl Into<String>) -> Self {
        Error::InvalidPathDelimiter {
            delimiter: delimiter.into(),
        }
    }

    /// Creates a path not found error.
    pub fn path_not_found(path: impl Into<String>) -> Self {
        Error::PathNotFound { path: path.into() }
    }

    /// Creates a path type mismatch error.
    pub fn path_type_mismatch(
        path: impl Into<String>,
        segment: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Error::PathTypeMismatch {
            path: path.into(),
            segment: segment.into(),
            actual: actual.into(),
        }
    }

    /// Creates an unsupported value type error.
    pub fn unsupported_value_type(type_name: impl Into<String>) -> Self {
        Error::UnsupportedValueType {
            type_name: type_name.into(),
        }
    }

    /// Returns true if the error reports a missing path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::PathNotFound { .. })
    }

    /// Returns true if the error came from path addressing.
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            Error::PathNotFound { .. }
                | Error::PathTypeMismatch { .. }
                | Error::InvalidPathDelimiter { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::path_type_mismatch("foo.bar", "bar", "int");
        assert_eq!(format!("{}", err), "foo.bar: cannot index into int value at segment \"bar\"");

        let err = Error::invalid_depth(-2);
        assert!(format!("{}", err).contains("-2"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(Error::path_not_found("a.b").is_not_found());
        assert!(Error::path_not_found("a.b").is_path_error());
        assert!(Error::invalid_path_delimiter("::").is_path_error());
        assert!(!Error::invalid_depth(-1).is_path_error());
        assert!(!Error::unsupported_value_type("resource (closed)").is_not_found());
    }
}
