//! Test suites
//!
//! A suite is the unit of discovery: tests are collected in the order they were registered.

use tracing::debug;

use super::HarnessError;
use super::case::TestCase;
use crate::config::RunConfig;

/// A named, ordered collection of test cases
#[derive(Debug)]
pub struct TestSuite {
    name: String,
    cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Register a test case. Names must be non-empty and unique within the suite.
    pub fn add(&mut self, case: TestCase) -> Result<(), HarnessError> {
        if case.name().is_empty() {
            return Err(HarnessError::EmptyTestName {
                suite: self.name.clone(),
            });
        }
        if self.cases.iter().any(|c| c.name() == case.name()) {
            return Err(HarnessError::DuplicateTest {
                suite: self.name.clone(),
                name: case.name().to_string(),
            });
        }
        debug!(suite = %self.name, test = case.name(), "registered test");
        self.cases.push(case);
        Ok(())
    }

    /// Builder form of `add`.
    pub fn with(mut self, case: TestCase) -> Result<Self, HarnessError> {
        self.add(case)?;
        Ok(self)
    }

    /// Select the tests a run would execute: keyword filter first, then slow tests unless included.
    pub fn collect(&self, config: &RunConfig) -> Vec<&TestCase> {
        self.cases
            .iter()
            .filter(|case| config.matches(case.name()))
            .filter(|case| config.include_slow || !case.is_slow())
            .collect()
    }
}
