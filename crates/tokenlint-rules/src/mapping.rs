use crate::report::ValidationReport;
use serde_json::Value;
use tokenlint_graph::{lint_token_set, MappingReport, Severity};

/// Lints the primitive/alias/semantic token set into the report.
pub fn check_token_mapping(
    primitives: &Value,
    aliases: &Value,
    semantic: &Value,
    report: ValidationReport,
) -> ValidationReport {
    let mapping = lint_token_set(primitives, aliases, semantic);
    record_mapping(&mapping, report)
}

/// Folds an existing mapping report into a validation report.
///
/// Each resolved reference is a pass, each error issue a failure and each
/// warning issue (stale cached value) a warning.
pub fn record_mapping(mapping: &MappingReport, mut report: ValidationReport) -> ValidationReport {
    for _ in 0..mapping.total_valid() {
        report.pass();
    }
    for issue in &mapping.issues {
        match issue.severity {
            Severity::Error => report.fail(issue.to_string()),
            Severity::Warning => report.warn(issue.to_string()),
        }
    }
    report.finish("mapping")
}
