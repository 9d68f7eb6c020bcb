//! Assertion helpers for test bodies.
//!
//! Each helper returns `Result<(), AssertionError>` so test bodies can use `?` and stop at the first failed check.

use std::any::{Any, type_name};
use std::fmt::Debug;

use thiserror::Error;

use super::truthy::Truthy;

/// A failed check inside a test body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    #[error("assert_true failed: {what} is not truthy (got {repr})")]
    NotTruthy { what: String, repr: String },

    #[error("assert_instance_of failed: {what} is not an instance of {expected}")]
    WrongType { what: String, expected: &'static str },

    #[error("assert_equal failed: {what}: {left} != {right}")]
    NotEqual { what: String, left: String, right: String },

    #[error("panicked: {0}")]
    Panicked(String),
}

/// Result type returned by test bodies.
pub type TestOutcome = Result<(), AssertionError>;

/// Check that `value` evaluates to true.
pub fn assert_true<T: Truthy + Debug + ?Sized>(value: &T, what: &str) -> TestOutcome {
    if value.is_truthy() {
        Ok(())
    } else {
        Err(AssertionError::NotTruthy {
            what: what.to_string(),
            repr: format!("{:?}", value),
        })
    }
}

/// Check that `value` is a `T`.
pub fn assert_instance_of<T: Any>(value: &dyn Any, what: &str) -> TestOutcome {
    if value.is::<T>() {
        Ok(())
    } else {
        Err(AssertionError::WrongType {
            what: what.to_string(),
            expected: type_name::<T>(),
        })
    }
}

/// Check that `left == right`.
pub fn assert_equal<T: PartialEq + Debug + ?Sized>(left: &T, right: &T, what: &str) -> TestOutcome {
    if left == right {
        Ok(())
    } else {
        Err(AssertionError::NotEqual {
            what: what.to_string(),
            left: format!("{:?}", left),
            right: format!("{:?}", right),
        })
    }
}
