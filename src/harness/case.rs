//! Test cases, markers and per-test results.

use std::fmt;
use std::time::Duration;

use super::assertions::TestOutcome;

/// Markers that change how a test is collected or judged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestMarker {
    /// Do not run; report as skipped with the given reason
    Skip(String),
    /// Expected to fail; a pass is reported as XPASS
    XFail(String),
    /// Only collected when slow tests are included
    Slow,
}

impl fmt::Display for TestMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestMarker::Skip(reason) if reason.is_empty() => write!(f, "skip"),
            TestMarker::Skip(reason) => write!(f, "skip({})", reason),
            TestMarker::XFail(reason) if reason.is_empty() => write!(f, "xfail"),
            TestMarker::XFail(reason) => write!(f, "xfail({})", reason),
            TestMarker::Slow => write!(f, "slow"),
        }
    }
}

type TestBody = Box<dyn Fn() -> TestOutcome + Send + Sync>;

/// A registered test: a name, its markers and the body to run.
pub struct TestCase {
    name: String,
    markers: Vec<TestMarker>,
    body: TestBody,
}

impl TestCase {
    pub fn new(name: impl Into<String>, body: impl Fn() -> TestOutcome + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
            body: Box::new(body),
        }
    }

    /// Mark the test as skipped.
    pub fn skip(mut self, reason: impl Into<String>) -> Self {
        self.markers.push(TestMarker::Skip(reason.into()));
        self
    }

    /// Mark the test as expected to fail.
    pub fn xfail(mut self, reason: impl Into<String>) -> Self {
        self.markers.push(TestMarker::XFail(reason.into()));
        self
    }

    /// Mark the test as slow.
    pub fn slow(mut self) -> Self {
        self.markers.push(TestMarker::Slow);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn markers(&self) -> &[TestMarker] {
        &self.markers
    }

    pub fn is_slow(&self) -> bool {
        self.markers.contains(&TestMarker::Slow)
    }

    pub fn skip_reason(&self) -> Option<&str> {
        self.markers.iter().find_map(|m| match m {
            TestMarker::Skip(reason) => Some(reason.as_str()),
            _ => None,
        })
    }

    pub fn xfail_reason(&self) -> Option<&str> {
        self.markers.iter().find_map(|m| match m {
            TestMarker::XFail(reason) => Some(reason.as_str()),
            _ => None,
        })
    }

    /// Run the body once. Panics are not caught here; see `runner`.
    pub(crate) fn call(&self) -> TestOutcome {
        (self.body)()
    }

    /// Describe this test for reporters.
    pub fn info(&self, suite: &str) -> TestInfo {
        TestInfo {
            suite: suite.to_string(),
            name: self.name.clone(),
            markers: self.markers.clone(),
        }
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}

/// Information about a collected test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestInfo {
    pub suite: String,
    pub name: String,
    pub markers: Vec<TestMarker>,
}

impl TestInfo {
    /// `suite::name`, the node id printed by reporters
    pub fn node_id(&self) -> String {
        format!("{}::{}", self.suite, self.name)
    }
}

/// Result of running a single test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed(Duration),
    Failed(Duration, String),
    Skipped(String),
    XFailed(Duration, String),
    XPassed(Duration),
}

impl TestResult {
    /// Short status word used by reporters
    pub fn status(&self) -> &'static str {
        match self {
            TestResult::Passed(_) => "PASSED",
            TestResult::Failed(_, _) => "FAILED",
            TestResult::Skipped(_) => "SKIPPED",
            TestResult::XFailed(_, _) => "XFAIL",
            TestResult::XPassed(_) => "XPASS",
        }
    }

    /// Whether this result makes the run fail
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failed(_, _) | TestResult::XPassed(_))
    }

    pub fn duration(&self) -> Option<Duration> {
        match self {
            TestResult::Passed(d) | TestResult::Failed(d, _) | TestResult::XFailed(d, _) | TestResult::XPassed(d) => {
                Some(*d)
            }
            TestResult::Skipped(_) => None,
        }
    }
}
