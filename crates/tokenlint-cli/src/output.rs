//! Output formatting utilities.

use serde::Serialize;
use tokenlint_rules::ValidationReport;

/// One validation's result as emitted with `--json`.
#[derive(Debug, Serialize)]
pub struct CheckOutput<'a> {
    pub check: &'a str,
    pub success: bool,
    #[serde(flatten)]
    pub report: Option<&'a ValidationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> CheckOutput<'a> {
    pub fn completed(check: &'a str, report: &'a ValidationReport) -> Self {
        Self {
            check,
            success: report.is_success(),
            report: Some(report),
            error: None,
        }
    }

    pub fn aborted(check: &'a str, error: String) -> Self {
        Self {
            check,
            success: false,
            report: None,
            error: Some(error),
        }
    }
}

/// Formats a value as pretty JSON.
pub fn format_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Formats a report as a titled block: counts, then errors, then warnings.
pub fn format_report(check: &str, report: &ValidationReport) -> String {
    let mut out = format!(
        "{}\n{}\n{:<10}{}\n{:<10}{}\n{:<10}{}\n",
        check,
        "-".repeat(40),
        "passed",
        report.passed,
        "failed",
        report.failed,
        "warnings",
        report.warnings.len()
    );
    push_list(&mut out, "errors", &report.errors);
    push_list(&mut out, "warnings", &report.warnings);
    out.push_str(if report.is_success() { "PASS\n" } else { "FAIL\n" });
    out
}

/// Formats the closing summary of `all`.
pub fn format_summary(passed: &[&str], failed: &[&str]) -> String {
    format!(
        "summary\n{}\n{:<10}{}\n{:<10}{}\n",
        "-".repeat(40),
        "passed",
        join_or_dash(passed),
        "failed",
        join_or_dash(failed)
    )
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(title);
    out.push_str(":\n");
    for item in items {
        out.push_str("  - ");
        out.push_str(item);
        out.push('\n');
    }
}

fn join_or_dash(names: &[&str]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}
