//! The `LedgerForge` component.
//!
//! `LedgerForge` carries no state. Construction cannot fail and `run` always reports success.

use tracing::debug;

/// The subject exercised by the built-in suite.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LedgerForge;

impl LedgerForge {
    /// Create a new instance.
    pub const fn new() -> Self {
        Self
    }

    /// Run the forge. Returns `true` on every call.
    pub fn run(&self) -> bool {
        debug!("ledgerforge run");
        true
    }
}
