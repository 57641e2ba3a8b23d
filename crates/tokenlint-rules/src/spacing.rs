use crate::config::SpacingRules;
use crate::lookup::{as_text, check_expected};
use crate::patterns::parse_leading_int;
use crate::report::ValidationReport;
use serde_json::Value;

/// Runs the spacing, border radius and shadow checks in order.
pub fn check_spacing(
    spacing: &Value,
    borders: &Value,
    shadows: &Value,
    rules: &SpacingRules,
    report: ValidationReport,
) -> ValidationReport {
    let report = check_spacing_scale(spacing, rules, report);
    let report = check_border_radius(borders, rules, report);
    check_box_shadows(shadows, rules, report).finish("spacing")
}

/// Expected spacing scale plus grid compliance for every non-zero key.
pub fn check_spacing_scale(
    spacing: &Value,
    rules: &SpacingRules,
    report: ValidationReport,
) -> ValidationReport {
    let section = spacing.get("spacing");
    let mut report = check_expected(report, section, "spacing", &rules.spacing);

    if let Some(Value::Object(scale)) = section {
        for (key, value) in scale.iter().filter(|(key, _)| key.as_str() != "0") {
            let text = as_text(value);
            let on_grid =
                parse_leading_int(&text).and_then(|px| px.checked_rem(rules.grid_px)) == Some(0);
            report.expect(on_grid, || {
                format!(
                    "spacing.{key} = {text} does not follow {}px grid system",
                    rules.grid_px
                )
            });
        }
    }
    report
}

/// Expected border radius values.
pub fn check_border_radius(
    borders: &Value,
    rules: &SpacingRules,
    report: ValidationReport,
) -> ValidationReport {
    check_expected(
        report,
        borders.get("borderRadius"),
        "borderRadius",
        &rules.border_radius,
    )
}

/// Expected shadows plus a syntax check that each shadow carries a color.
pub fn check_box_shadows(
    shadows: &Value,
    rules: &SpacingRules,
    report: ValidationReport,
) -> ValidationReport {
    let section = shadows.get("boxShadow");
    let mut report = check_expected(report, section, "boxShadow", &rules.box_shadow);

    if let Some(Value::Object(entries)) = section {
        for (key, value) in entries {
            let has_color = value.as_str().is_some_and(|s| s.contains("rgb"));
            report.expect(has_color, || {
                format!(
                    "boxShadow.{key} has invalid CSS shadow syntax: {}",
                    as_text(value)
                )
            });
        }
    }
    report
}
