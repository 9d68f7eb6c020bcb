//! Test reporters
//!
//! The runner uses a `TestReporter` trait to separate reporting from execution. `ConsoleReporter` prints
//! pytest-style output; `JsonReporter` writes one JSON object per event, one per line.

use std::io::{self, Write};

use serde_json::{Value, json};

use super::case::{TestInfo, TestResult};
use super::runner::TestSummary;

/// Trait for reporting test execution results.
pub trait TestReporter {
    /// Called once collection is complete
    fn on_collection_complete(&mut self, suite: &str, test_count: usize) -> io::Result<()>;

    /// Called for every collected test when only collecting
    fn on_test_collected(&mut self, _test: &TestInfo) -> io::Result<()> {
        Ok(())
    }

    /// Called when a test run begins
    fn on_test_start(&mut self, test: &TestInfo) -> io::Result<()>;

    /// Called when a test completes
    fn on_test_complete(&mut self, test: &TestInfo, result: &TestResult) -> io::Result<()>;

    /// Called when all tests have completed
    fn on_run_complete(&mut self, summary: &TestSummary) -> io::Result<()>;
}

// ============================================================================
// Console
// ============================================================================

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const BOLD_RED: &str = "\x1b[1;31m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// Default console reporter (pytest-style)
pub struct ConsoleReporter<W: Write> {
    out: W,
    verbose: bool,
    color: bool,
    failures: Vec<(TestInfo, TestResult)>,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to stdout
    pub fn stdout(verbose: bool, color: bool) -> Self {
        Self::new(io::stdout(), verbose, color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, verbose: bool, color: bool) -> Self {
        Self {
            out,
            verbose,
            color,
            failures: Vec::new(),
        }
    }

    /// Consume the reporter, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn status_text(&self, result: &TestResult) -> String {
        let (color, word) = match result {
            TestResult::Passed(_) => (GREEN, "PASSED"),
            TestResult::Failed(_, _) | TestResult::XPassed(_) => (RED, result.status()),
            TestResult::Skipped(_) | TestResult::XFailed(_, _) => (YELLOW, result.status()),
        };
        let mut status = self.paint(color, word);

        match result {
            TestResult::Skipped(reason) | TestResult::XFailed(_, reason) if !reason.is_empty() => {
                status.push_str(&format!(" ({})", reason));
            }
            _ => {
                if self.verbose {
                    if let Some(d) = result.duration() {
                        status.push_str(&format!(" ({:.0}ms)", d.as_millis()));
                    }
                }
            }
        }
        status
    }
}

impl<W: Write> TestReporter for ConsoleReporter<W> {
    fn on_collection_complete(&mut self, _suite: &str, test_count: usize) -> io::Result<()> {
        let banner = self.paint(BOLD, "=================== test session starts ===================");
        writeln!(self.out, "{}", banner)?;
        if test_count == 0 {
            writeln!(self.out, "No tests collected")
        } else {
            writeln!(self.out, "collected {} item(s)", test_count)?;
            writeln!(self.out)
        }
    }

    fn on_test_collected(&mut self, test: &TestInfo) -> io::Result<()> {
        if test.markers.is_empty() {
            writeln!(self.out, "  {}", test.node_id())
        } else {
            let markers: Vec<String> = test.markers.iter().map(ToString::to_string).collect();
            writeln!(self.out, "  {} [{}]", test.node_id(), markers.join(", "))
        }
    }

    fn on_test_start(&mut self, _test: &TestInfo) -> io::Result<()> {
        Ok(())
    }

    fn on_test_complete(&mut self, test: &TestInfo, result: &TestResult) -> io::Result<()> {
        let status = self.status_text(result);
        writeln!(self.out, "{} {}", test.node_id(), status)?;
        if result.is_failure() {
            self.failures.push((test.clone(), result.clone()));
        }
        Ok(())
    }

    fn on_run_complete(&mut self, summary: &TestSummary) -> io::Result<()> {
        // Nothing ran: either nothing was collected (already reported) or only collecting
        if summary.total == 0 {
            if summary.collected > 0 {
                writeln!(self.out)?;
                writeln!(
                    self.out,
                    "{} test(s) collected in {:.2}s",
                    summary.collected,
                    summary.duration.as_secs_f64()
                )?;
            }
            return self.out.flush();
        }

        if !self.failures.is_empty() {
            writeln!(self.out)?;
            let header = self.paint(BOLD_RED, "=================== FAILURES ===================");
            writeln!(self.out, "{}", header)?;
            for (test, result) in &self.failures {
                writeln!(self.out)?;
                let title = self.paint(BOLD, &format!("___________ {} ___________", test.name));
                writeln!(self.out, "{}", title)?;
                writeln!(self.out)?;
                match result {
                    TestResult::Failed(_, msg) => writeln!(self.out, "    {}", msg)?,
                    _ => {
                        let note = self.paint(YELLOW, "Test passed but was expected to fail (xfail)");
                        writeln!(self.out, "    {}", note)?
                    }
                }
                writeln!(self.out)?;
                writeln!(self.out, "    {}", test.node_id())?;
            }
        }

        let mut parts = Vec::new();
        if summary.passed > 0 {
            parts.push(format!("{} passed", summary.passed));
        }
        if summary.failed > 0 {
            parts.push(format!("{} failed", summary.failed));
        }
        if summary.skipped > 0 {
            parts.push(format!("{} skipped", summary.skipped));
        }
        if summary.xfailed > 0 {
            parts.push(format!("{} xfailed", summary.xfailed));
        }
        if summary.xpassed > 0 {
            parts.push(format!("{} xpassed", summary.xpassed));
        }

        let line = format!(
            "=================== {} in {:.2}s ===================",
            parts.join(", "),
            summary.duration.as_secs_f64()
        );
        let color = if summary.is_success() { BOLD_GREEN } else { BOLD_RED };
        writeln!(self.out)?;
        let line = self.paint(color, &line);
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }
}

// ============================================================================
// JSON lines
// ============================================================================

/// Machine-readable reporter: one JSON object per line.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl JsonReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, value: Value) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &value)?;
        writeln!(self.out)
    }
}

fn marker_names(test: &TestInfo) -> Vec<String> {
    test.markers.iter().map(ToString::to_string).collect()
}

impl<W: Write> TestReporter for JsonReporter<W> {
    fn on_collection_complete(&mut self, suite: &str, test_count: usize) -> io::Result<()> {
        self.emit(json!({
            "event": "collected",
            "suite": suite,
            "count": test_count,
        }))
    }

    fn on_test_collected(&mut self, test: &TestInfo) -> io::Result<()> {
        self.emit(json!({
            "event": "item",
            "node_id": test.node_id(),
            "markers": marker_names(test),
        }))
    }

    fn on_test_start(&mut self, _test: &TestInfo) -> io::Result<()> {
        Ok(())
    }

    fn on_test_complete(&mut self, test: &TestInfo, result: &TestResult) -> io::Result<()> {
        let message = match result {
            TestResult::Failed(_, msg) => Some(msg.as_str()),
            TestResult::Skipped(reason) | TestResult::XFailed(_, reason) if !reason.is_empty() => {
                Some(reason.as_str())
            }
            _ => None,
        };
        self.emit(json!({
            "event": "test",
            "node_id": test.node_id(),
            "status": result.status().to_ascii_lowercase(),
            "markers": marker_names(test),
            "duration_ms": result.duration().map(|d| d.as_millis() as u64),
            "message": message,
        }))
    }

    fn on_run_complete(&mut self, summary: &TestSummary) -> io::Result<()> {
        self.emit(json!({
            "event": "summary",
            "collected": summary.collected,
            "total": summary.total,
            "passed": summary.passed,
            "failed": summary.failed,
            "skipped": summary.skipped,
            "xfailed": summary.xfailed,
            "xpassed": summary.xpassed,
            "duration_ms": summary.duration.as_millis() as u64,
            "success": summary.is_success(),
        }))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::harness::case::TestMarker;

    fn info_with(name: &str, markers: Vec<TestMarker>) -> TestInfo {
        TestInfo {
            suite: "test_ledgerforge".to_string(),
            name: name.to_string(),
            markers,
        }
    }

    fn info(name: &str) -> TestInfo {
        TestInfo {
            suite: "test_ledgerforge".to_string(),
            name: name.to_string(),
            markers: Vec::new(),
        }
    }

    fn console_output(f: impl FnOnce(&mut ConsoleReporter<Vec<u8>>)) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new(), false, false);
        f(&mut reporter);
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_console_pass_line() {
        let out = console_output(|r| {
            r.on_collection_complete("test_ledgerforge", 1).unwrap();
            r.on_test_complete(&info("test_run_method"), &TestResult::Passed(Duration::ZERO))
                .unwrap();
        });
        assert!(out.contains("collected 1 item(s)"));
        assert!(out.contains("test_ledgerforge::test_run_method PASSED\n"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_console_failure_section_and_summary() {
        let summary = TestSummary {
            collected: 2,
            total: 2,
            passed: 1,
            failed: 1,
            ..TestSummary::default()
        };
        let out = console_output(|r| {
            r.on_test_complete(&info("test_ok"), &TestResult::Passed(Duration::ZERO))
                .unwrap();
            r.on_test_complete(&info("test_bad"), &TestResult::Failed(Duration::ZERO, "nope".into()))
                .unwrap();
            r.on_run_complete(&summary).unwrap();
        });
        assert!(out.contains("=================== FAILURES ==================="));
        assert!(out.contains("___________ test_bad ___________"));
        assert!(out.contains("    nope\n"));
        assert!(out.contains("1 passed, 1 failed in 0.00s"));
    }

    #[test]
    fn test_console_skip_reason() {
        let out = console_output(|r| {
            r.on_test_complete(&info("test_later"), &TestResult::Skipped("not yet".into()))
                .unwrap();
        });
        assert!(out.contains("test_ledgerforge::test_later SKIPPED (not yet)"));
    }

    #[test]
    fn test_console_color_codes() {
        let mut reporter = ConsoleReporter::new(Vec::new(), false, true);
        reporter
            .on_test_complete(&info("test_ok"), &TestResult::Passed(Duration::ZERO))
            .unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(out.contains("\x1b[32mPASSED\x1b[0m"));
    }

    #[test]
    fn test_json_lines() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter.on_collection_complete("test_ledgerforge", 1).unwrap();
        reporter
            .on_test_complete(&info("test_bad"), &TestResult::Failed(Duration::from_millis(3), "nope".into()))
            .unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<Value> = out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "collected");
        assert_eq!(lines[0]["count"], 1);
        assert_eq!(lines[1]["node_id"], "test_ledgerforge::test_bad");
        assert_eq!(lines[1]["status"], "failed");
        assert_eq!(lines[1]["duration_ms"], 3);
        assert_eq!(lines[1]["message"], "nope");
    }

    #[test]
    fn test_json_events_carry_markers() {
        let mut reporter = JsonReporter::new(Vec::new());
        let pending = info_with("test_pending", vec![TestMarker::Skip("no fixture".into()), TestMarker::Slow]);
        reporter.on_test_collected(&pending).unwrap();
        reporter
            .on_test_complete(&pending, &TestResult::Skipped("no fixture".into()))
            .unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<Value> = out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

        assert_eq!(lines[0]["event"], "item");
        assert_eq!(lines[0]["markers"], json!(["skip(no fixture)", "slow"]));
        assert_eq!(lines[1]["markers"], json!(["skip(no fixture)", "slow"]));
        assert_eq!(lines[1]["message"], "no fixture");
    }

    #[test]
    fn test_json_summary_after_empty_collection() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter.on_collection_complete("test_ledgerforge", 0).unwrap();
        reporter.on_run_complete(&TestSummary::default()).unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        let last: Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();

        assert_eq!(last["event"], "summary");
        assert_eq!(last["collected"], 0);
        assert_eq!(last["success"], true);
    }

    #[test]
    fn test_console_collect_only_lists_markers_and_count() {
        let summary = TestSummary {
            collected: 1,
            ..TestSummary::default()
        };
        let out = console_output(|r| {
            r.on_test_collected(&info_with("test_later", vec![TestMarker::XFail("tracked".into())]))
                .unwrap();
            r.on_run_complete(&summary).unwrap();
        });
        assert!(out.contains("  test_ledgerforge::test_later [xfail(tracked)]\n"));
        assert!(out.contains("1 test(s) collected in"));
        assert!(!out.contains("passed"));
    }

    #[test]
    fn test_console_empty_run_prints_no_summary_rule() {
        let out = console_output(|r| {
            r.on_collection_complete("test_ledgerforge", 0).unwrap();
            r.on_run_complete(&TestSummary::default()).unwrap();
        });
        assert!(out.contains("No tests collected"));
        assert!(!out.contains(" in 0.00s ==="));
    }
}
