use crate::config::ExpectedValues;
use crate::report::ValidationReport;
use serde_json::Value;
use tokenlint_graph::resolve_path;

/// Looks up a dotted path with no prefix stripping.
pub fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    resolve_path(doc, path, &[])
}

/// Looks up a dotted path and keeps it only when it carries a value.
pub fn present<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    lookup(doc, path).filter(|v| is_truthy(v))
}

/// Child of an object node that carries a value.
pub fn child<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    node.get(key).filter(|v| is_truthy(v))
}

/// Null, `false`, `0` and `""` count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a scalar the way it is written in the token file, strings unquoted.
pub fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Compares a section's entries against expected values.
///
/// A missing section is one failure; otherwise each expected key passes or
/// fails on its own.
pub fn check_expected(
    mut report: ValidationReport,
    section: Option<&Value>,
    name: &str,
    expected: &ExpectedValues,
) -> ValidationReport {
    let Some(section) = section else {
        report.fail(format!("Missing \"{name}\" section"));
        return report;
    };
    for (key, want) in expected {
        match child(section, key) {
            None => report.fail(format!("Missing {name}.{key}")),
            Some(actual) if as_text(actual) == *want => report.pass(),
            Some(actual) => report.fail(format!(
                "{name}.{key} should be \"{want}\" but got \"{}\"",
                as_text(actual)
            )),
        }
    }
    report
}
