use serde::{Deserialize, Serialize};
use tracing::info;

/// Accumulated results of one validation run.
///
/// Errors are hard failures and always bump `failed`; warnings are
/// advisories that never fail a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Checks that passed.
    pub passed: u32,
    /// Checks that failed.
    pub failed: u32,
    /// Error messages, one per failure.
    pub errors: Vec<String>,
    /// Advisory messages.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a passing check.
    pub fn pass(&mut self) {
        self.passed += 1;
    }

    /// Records a failing check.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.failed += 1;
        self.errors.push(message.into());
    }

    /// Records an advisory.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Records a pass when `ok`, otherwise a failure with the lazily built message.
    pub fn expect(&mut self, ok: bool, message: impl FnOnce() -> String) {
        if ok {
            self.pass();
        } else {
            self.fail(message());
        }
    }

    /// True when nothing failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errors.is_empty()
    }

    /// Appends another report's results to this one.
    pub fn merge(mut self, other: ValidationReport) -> Self {
        self.passed += other.passed;
        self.failed += other.failed;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self
    }

    pub(crate) fn finish(self, check: &str) -> Self {
        info!(
            check,
            passed = self.passed,
            failed = self.failed,
            warnings = self.warnings.len(),
            "check finished"
        );
        self
    }
}
