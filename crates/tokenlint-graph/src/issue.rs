use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Hard failure: the token set is broken.
    Error,
    /// Advisory: worth fixing, does not fail a run.
    Warning,
}

/// Document the offending token lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    /// Alias document.
    Alias,
    /// Semantic document.
    Semantic,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueCategory::Alias => write!(f, "ALIAS"),
            IssueCategory::Semantic => write!(f, "SEMANTIC"),
        }
    }
}

/// One problem found by the linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Error or warning.
    pub severity: Severity,
    /// Document the token belongs to.
    pub category: IssueCategory,
    /// Dotted path of the offending token record.
    pub token_path: String,
    /// Human-readable description.
    pub message: String,
}

impl Issue {
    /// Creates an error-severity issue.
    pub fn error(category: IssueCategory, token_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category,
            token_path: token_path.into(),
            message: message.into(),
        }
    }

    /// Creates a warning-severity issue.
    pub fn warning(category: IssueCategory, token_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            token_path: token_path.into(),
            message: message.into(),
        }
    }

    /// True for error severity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.category, self.token_path, self.message)
    }
}
