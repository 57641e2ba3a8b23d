use crate::config::TypographyRules;
use crate::lookup::{as_text, child};
use crate::patterns::parse_leading_float;
use crate::report::ValidationReport;
use serde_json::Value;

/// Validates the typography document.
///
/// Line heights outside the recommended range are warnings; everything else
/// is an error.
pub fn check_typography(
    typography: &Value,
    rules: &TypographyRules,
    mut report: ValidationReport,
) -> ValidationReport {
    match typography.get("fontFamily") {
        Some(families) => {
            for family in &rules.font_families {
                report.expect(child(families, family).is_some(), || {
                    format!("Missing font family: {family}")
                });
            }
        }
        None => report.fail("Missing \"fontFamily\" section"),
    }

    let Some(sizes) = typography.get("fontSize") else {
        report.fail("Missing \"fontSize\" section");
        return report.finish("typography");
    };

    for key in &rules.font_sizes {
        let Some(size) = child(sizes, key) else {
            report.fail(format!("Missing fontSize: {key}"));
            continue;
        };
        let missing: Vec<&str> = rules
            .size_properties
            .iter()
            .filter(|prop| size.get(prop.as_str()).is_none())
            .map(String::as_str)
            .collect();
        report.expect(missing.is_empty(), || {
            format!("{key} missing properties: {}", missing.join(", "))
        });
    }

    report = check_body_size(sizes, rules, report);

    let (low, high) = rules.line_height_range;
    for (key, size) in defined_sizes(sizes, &rules.font_sizes) {
        let Some(raw) = size.get("lineHeight") else {
            continue;
        };
        match parse_leading_float(&as_text(raw)) {
            Some(line_height) if (low..=high).contains(&line_height) => report.pass(),
            _ => report.warn(format!(
                "{key}: line-height {} is outside recommended range ({low}-{high})",
                as_text(raw)
            )),
        }
    }

    for (key, size) in defined_sizes(sizes, &rules.font_sizes) {
        let weight = size.get("fontWeight").map(as_text).unwrap_or_default();
        report.expect(rules.font_weights.contains(&weight), || {
            format!("{key}: font-weight {weight} is invalid")
        });
    }

    let headings: Vec<(&str, Option<f64>)> = defined_sizes(sizes, &rules.heading_order)
        .map(|(key, size)| (key, size.get("value").and_then(rem_value)))
        .collect();
    for pair in headings.windows(2) {
        let ((larger, a), (smaller, b)) = (pair[0], pair[1]);
        match (a, b) {
            (Some(a), Some(b)) if a > b => report.pass(),
            (Some(a), Some(b)) => report.fail(format!(
                "{larger} ({a}rem) should be larger than {smaller} ({b}rem)"
            )),
            _ => report.fail(format!(
                "{larger} and {smaller} font sizes must be numeric to compare"
            )),
        }
    }

    report.finish("typography")
}

fn check_body_size(
    sizes: &Value,
    rules: &TypographyRules,
    mut report: ValidationReport,
) -> ValidationReport {
    let Some(raw) = child(sizes, &rules.body_size).and_then(|s| s.get("value")) else {
        report.fail(format!("Body text size ({}) has no value", rules.body_size));
        return report;
    };
    match rem_value(raw) {
        Some(rem) => {
            let px = rem * rules.base_font_px;
            report.expect(px >= rules.min_body_px, || {
                format!(
                    "Body text size ({} = {:.1}px) is too small for accessibility",
                    as_text(raw),
                    px
                )
            });
        }
        None => report.fail(format!(
            "Body text size ({}) is not a number",
            as_text(raw)
        )),
    }
    report
}

fn rem_value(raw: &Value) -> Option<f64> {
    parse_leading_float(&as_text(raw))
}

/// Entries of `sizes` named in `keys` that are present, in `keys` order.
fn defined_sizes<'a>(
    sizes: &'a Value,
    keys: &'a [String],
) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
    keys.iter()
        .filter_map(move |key| child(sizes, key).map(|size| (key.as_str(), size)))
}
