#![forbid(unsafe_code)]
//! LedgerForge
//!
//! This crate provides the `LedgerForge` component together with a small
//! pytest-style harness that collects, runs, and reports test cases against it.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Test bodies**: Panics raised inside a registered test case are caught by the harness and reported as
//!   failures, never propagated.

pub mod cli;
pub mod config;
pub mod forge;
pub mod harness;
pub mod selftest;
pub mod version;

pub use config::{OutputFormat, RunConfig};
pub use forge::LedgerForge;
pub use harness::{HarnessError, TestCase, TestSuite, TestSummary, run_suite};
