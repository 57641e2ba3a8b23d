use crate::config::{ColorRules, ContrastPair};
use crate::lookup::{child, lookup, present};
use crate::report::ValidationReport;
use serde_json::Value;
use tokenlint_color::{check_contrast, format_ratio, is_valid_color};
use tokenlint_graph::TokenPath;

/// Validates the colors document.
///
/// 1. Every string leaf is a valid color.
/// 2. Required tokens are present.
/// 3. Configured pairs meet the contrast level.
/// 4. Every scale defines every required shade.
pub fn check_colors(colors: &Value, rules: &ColorRules, report: ValidationReport) -> ValidationReport {
    let mut report = check_format(colors, &TokenPath::root(), report);

    for token in &rules.required_tokens {
        report.expect(present(colors, token).is_some(), || {
            format!("Missing required token: {token}")
        });
    }

    for pair in &rules.contrast_pairs {
        report = check_pair(colors, pair, rules, report);
    }

    for scale in &rules.scales {
        match lookup(colors, scale) {
            Some(shades @ Value::Object(_)) => {
                let missing: Vec<&str> = rules
                    .required_shades
                    .iter()
                    .filter(|shade| child(shades, shade).is_none())
                    .map(String::as_str)
                    .collect();
                report.expect(missing.is_empty(), || {
                    format!("{scale}: missing shades: {}", missing.join(", "))
                });
            }
            _ => report.fail(format!("{scale}: color scale not found")),
        }
    }

    report.finish("colors")
}

fn check_format(value: &Value, path: &TokenPath, mut report: ValidationReport) -> ValidationReport {
    match value {
        Value::Object(map) => {
            for (key, node) in map {
                report = check_format(node, &path.push_field(key), report);
            }
        }
        Value::String(s) => {
            report.expect(is_valid_color(s), || format!("Invalid HEX format at {path}: {s}"));
        }
        _ => {}
    }
    report
}

fn check_pair(
    colors: &Value,
    pair: &ContrastPair,
    rules: &ColorRules,
    mut report: ValidationReport,
) -> ValidationReport {
    let (Some(fg), Some(bg)) = (
        operand(colors, &pair.foreground),
        operand(colors, &pair.background),
    ) else {
        report.fail(format!("{}: color not found", pair.name));
        return report;
    };
    match check_contrast(fg, bg, rules.level) {
        Ok(check) => report.expect(check.passes, || {
            format!(
                "{}: {} (fails {})",
                pair.name,
                format_ratio(check.ratio),
                check.level.label()
            )
        }),
        Err(err) => report.fail(format!("{}: {}", pair.name, err)),
    }
    report
}

/// A literal color, or the string found at a dotted path.
fn operand<'a>(colors: &'a Value, token: &'a str) -> Option<&'a str> {
    if token.starts_with('#') || is_valid_color(token) {
        Some(token)
    } else {
        lookup(colors, token).and_then(Value::as_str)
    }
}
