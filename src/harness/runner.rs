//! Test execution
//!
//! `run_suite` executes the collected tests of a suite one after another on the calling thread. Panics inside a
//! test body are caught and turned into failures, so one broken test never aborts the session.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::HarnessError;
use super::assertions::AssertionError;
use super::case::{TestCase, TestInfo, TestResult};
use super::reporter::TestReporter;
use super::suite::TestSuite;
use crate::config::RunConfig;

/// Summary of test run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSummary {
    /// Tests selected by collection
    pub collected: usize,
    /// Tests that produced a result (executed or skipped)
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub xfailed: usize,
    pub xpassed: usize,
    pub duration: Duration,
}

impl TestSummary {
    /// A run succeeds when nothing failed and nothing unexpectedly passed.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.xpassed == 0
    }

    /// Process exit status for this run: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    fn record(&mut self, result: &TestResult) {
        self.total += 1;
        match result {
            TestResult::Passed(_) => self.passed += 1,
            TestResult::Failed(_, _) => self.failed += 1,
            TestResult::Skipped(_) => self.skipped += 1,
            TestResult::XFailed(_, _) => self.xfailed += 1,
            TestResult::XPassed(_) => self.xpassed += 1,
        }
    }
}

/// Run all collected tests of `suite`, reporting every event to `reporter`.
///
/// Returns `Err` only when the harness itself fails (the reporter could not write). Failing tests are part of the
/// returned summary.
pub fn run_suite(
    suite: &TestSuite,
    config: &RunConfig,
    reporter: &mut dyn TestReporter,
) -> Result<TestSummary, HarnessError> {
    let start_time = Instant::now();

    let selected = suite.collect(config);
    let infos: Vec<TestInfo> = selected.iter().map(|case| case.info(suite.name())).collect();

    info!(suite = suite.name(), collected = infos.len(), "collected tests");
    reporter.on_collection_complete(suite.name(), infos.len())?;

    let mut summary = TestSummary {
        collected: infos.len(),
        ..TestSummary::default()
    };

    if config.collect_only {
        for test in &infos {
            reporter.on_test_collected(test)?;
        }
        summary.duration = start_time.elapsed();
        reporter.on_run_complete(&summary)?;
        return Ok(summary);
    }

    if selected.is_empty() {
        // "no tests collected" is not a failure
        summary.duration = start_time.elapsed();
        reporter.on_run_complete(&summary)?;
        return Ok(summary);
    }

    for (case, test) in selected.into_iter().zip(&infos) {
        reporter.on_test_start(test)?;
        let result = run_single_test(case);
        debug!(test = %test.node_id(), status = result.status(), "test finished");

        reporter.on_test_complete(test, &result)?;
        summary.record(&result);

        if config.stop_on_fail && result.is_failure() {
            info!(test = %test.node_id(), "stopping after first failure");
            break;
        }
    }

    summary.duration = start_time.elapsed();
    reporter.on_run_complete(&summary)?;
    Ok(summary)
}

/// Run one test, applying its skip and xfail markers.
fn run_single_test(case: &TestCase) -> TestResult {
    if let Some(reason) = case.skip_reason() {
        return TestResult::Skipped(reason.to_string());
    }

    let start = Instant::now();
    let outcome = match panic::catch_unwind(AssertUnwindSafe(|| case.call())) {
        Ok(outcome) => outcome,
        Err(payload) => Err(AssertionError::Panicked(panic_message(payload.as_ref()))),
    };
    let duration = start.elapsed();

    match (outcome, case.xfail_reason()) {
        (Ok(()), None) => TestResult::Passed(duration),
        (Err(e), None) => TestResult::Failed(duration, e.to_string()),
        (Ok(()), Some(_)) => TestResult::XPassed(duration),
        (Err(_), Some(reason)) => TestResult::XFailed(duration, reason.to_string()),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
