//! Built-in test suite for `LedgerForge`.

use crate::forge::LedgerForge;
use crate::harness::{HarnessError, TestCase, TestSuite, assert_instance_of, assert_true};

/// Name of the built-in suite, used as the node id prefix in reports.
pub const SUITE_NAME: &str = "test_ledgerforge";

/// Build the built-in suite: construction and `run`.
pub fn ledgerforge_suite() -> Result<TestSuite, HarnessError> {
    TestSuite::new(SUITE_NAME)
        .with(TestCase::new("test_initialization", || {
            let instance = LedgerForge::new();
            assert_instance_of::<LedgerForge>(&instance, "LedgerForge::new()")
        }))?
        .with(TestCase::new("test_run_method", || {
            let instance = LedgerForge::new();
            assert_true(&instance.run(), "LedgerForge::run()")
        }))
}
