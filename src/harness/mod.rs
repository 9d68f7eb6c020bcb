//! Test harness (pytest-style)
//!
//! ## Modules
//!
//! - `truthy` - What it means for a value to "evaluate to true"
//! - `assertions` - Assertion helpers returning `AssertionError`
//! - `case` - Test cases, markers and results
//! - `suite` - Registration-ordered collection of test cases
//! - `runner` - Execution and summary
//! - `reporter` - `TestReporter` trait with console and JSON implementations
//!
//! ## Design
//!
//! Test cases are plain closures registered on a `TestSuite`. The runner executes them in registration order on the
//! calling thread and hands every event to a `TestReporter`, which keeps output format separate from execution.

pub mod assertions;
pub mod case;
pub mod reporter;
pub mod runner;
pub mod suite;
pub mod truthy;

use std::io;

use thiserror::Error;

pub use assertions::{AssertionError, TestOutcome, assert_equal, assert_instance_of, assert_true};
pub use case::{TestCase, TestInfo, TestMarker, TestResult};
pub use reporter::{ConsoleReporter, JsonReporter, TestReporter};
pub use runner::{TestSummary, run_suite};
pub use suite::TestSuite;
pub use truthy::Truthy;

/// Errors raised by the harness itself (as opposed to failing tests)
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("test name must not be empty (suite '{suite}')")]
    EmptyTestName { suite: String },

    #[error("duplicate test '{name}' in suite '{suite}'")]
    DuplicateTest { suite: String, name: String },

    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}
