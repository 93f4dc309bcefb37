//! Error types for dispatch, build, and configuration failures.
//!
//! "Nothing matched" and "the chosen handler failed" are separate signals.
//! [`NoMatch`] is an ordinary, recoverable outcome that callers branch on by
//! type; a handler's own error travels inside [`DispatchError::Handler`]
//! exactly as the handler returned it.

use thiserror::Error;

/// No case accepted the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no case matched the input ({cases} cases tried)")]
pub struct NoMatch {
    cases: usize,
}

impl NoMatch {
    /// Creates a no-match signal for a dispatcher holding `cases` cases.
    #[must_use]
    pub const fn new(cases: usize) -> Self {
        Self { cases }
    }

    /// Returns the number of cases that were tried.
    #[must_use]
    pub const fn cases(&self) -> usize {
        self.cases
    }
}

/// Failure of a dispatcher's `apply` operation.
#[derive(Debug, Error)]
pub enum DispatchError<E> {
    /// No case accepted the input.
    #[error(transparent)]
    NoMatch(#[from] NoMatch),

    /// The selected handler failed; the error is the handler's own value.
    #[error("{0}")]
    Handler(E),
}

impl<E> DispatchError<E> {
    /// Returns `true` when no case matched.
    #[must_use]
    pub const fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch(_))
    }

    /// Returns the no-match signal, if that is what this error is.
    #[must_use]
    pub const fn no_match(&self) -> Option<&NoMatch> {
        match self {
            Self::NoMatch(no_match) => Some(no_match),
            Self::Handler(_) => None,
        }
    }

    /// Borrows the handler's error, if a handler failed.
    #[must_use]
    pub const fn handler_error(&self) -> Option<&E> {
        match self {
            Self::NoMatch(_) => None,
            Self::Handler(error) => Some(error),
        }
    }

    /// Extracts the handler's error, if a handler failed.
    #[must_use]
    pub fn into_handler_error(self) -> Option<E> {
        match self {
            Self::NoMatch(_) => None,
            Self::Handler(error) => Some(error),
        }
    }
}

/// Failure to compile a builder under a strict configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A case was declared after a catch-all case and can never run.
    #[error(
        "case {index} ({label}) is unreachable after the catch-all case at {catch_all_index}"
    )]
    UnreachableCase {
        /// Position of the unreachable case.
        index: usize,
        /// Label of the unreachable case.
        label: String,
        /// Position of the catch-all case that shadows it.
        catch_all_index: usize,
    },
}

impl BuildError {
    /// Creates an unreachable case error.
    pub fn unreachable_case(index: usize, label: impl Into<String>, catch_all_index: usize) -> Self {
        Self::UnreachableCase {
            index,
            label: label.into(),
            catch_all_index,
        }
    }
}

/// Errors encountered while loading a [`DispatchConfig`](crate::DispatchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON or has unknown fields.
    #[error("invalid dispatch configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
