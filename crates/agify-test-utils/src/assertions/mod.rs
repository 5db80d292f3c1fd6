//! Assertion utilities for "then" steps.
//!
//! Every check is a predicate plus a message; [`ensure`] turns a failed
//! predicate into an [`AssertionError`] that cucumber reports verbatim.

mod batch;
mod group;
mod status;

pub use batch::*;
pub use group::*;
pub use status::*;

use crate::error::StateError;

/// Failure raised by a "then" step
#[derive(Debug, thiserror::Error)]
pub enum AssertionError {
    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("Unexpected response format: {0}")]
    Shape(#[from] serde_json::Error),
}

pub type AssertionResult = Result<(), AssertionError>;

/// Fails with `message` unless `condition` holds
pub fn ensure(condition: bool, message: impl Into<String>) -> AssertionResult {
    if condition {
        Ok(())
    } else {
        Err(AssertionError::Failed(message.into()))
    }
}

/// Fails unconditionally
pub fn fail(message: impl Into<String>) -> AssertionError {
    AssertionError::Failed(message.into())
}
