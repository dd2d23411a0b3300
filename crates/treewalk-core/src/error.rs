//! Error types for document model access, traversal, and rendering.

use thiserror::Error;

use crate::value::ValueKind;

/// Errors produced by treewalk-core operations.
#[derive(Error, Debug)]
pub enum TreeError {
    /// A narrowing accessor was asked for a variant the value does not hold.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The input text was not valid JSON (tree construction path).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Container nesting went past the navigator's configured limit.
    #[error("maximum nesting depth of {limit} exceeded")]
    DepthExceeded { limit: usize },

    /// A renderer failed to write its output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TreeError {
    pub(crate) fn mismatch(expected: &'static str, found: ValueKind) -> Self {
        TreeError::TypeMismatch {
            expected,
            found: found.as_str(),
        }
    }
}

impl From<std::convert::Infallible> for TreeError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Failure of a single [`Navigator::navigate`](crate::Navigator::navigate) call.
///
/// `E` is the visitor's own error type, so a visitor's abort reason reaches the
/// caller unchanged.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigateError<E> {
    /// A visitor callback returned an error; traversal stopped at that call.
    #[error("visitor aborted traversal: {0}")]
    Visitor(E),

    /// The tree nests containers deeper than the navigator allows.
    #[error("maximum nesting depth of {limit} exceeded")]
    DepthExceeded { limit: usize },
}

impl<E> NavigateError<E> {
    /// Returns the visitor error, if this failure came from the visitor.
    pub fn into_visitor_error(self) -> Option<E> {
        match self {
            NavigateError::Visitor(e) => Some(e),
            NavigateError::DepthExceeded { .. } => None,
        }
    }
}

impl<E> From<NavigateError<E>> for TreeError
where
    E: Into<TreeError>,
{
    fn from(err: NavigateError<E>) -> Self {
        match err {
            NavigateError::Visitor(e) => e.into(),
            NavigateError::DepthExceeded { limit } => TreeError::DepthExceeded { limit },
        }
    }
}

/// Convenience alias used throughout treewalk-core.
pub type Result<T> = std::result::Result<T, TreeError>;
