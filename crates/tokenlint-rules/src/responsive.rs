use crate::config::ResponsiveRules;
use crate::lookup::{as_text, check_expected, child, lookup};
use crate::patterns::parse_leading_int;
use crate::report::ValidationReport;
use serde_json::Value;

/// Validates breakpoints and containers, their alignment with the spacing
/// scale, and (when given) the Tailwind config that consumes them.
pub fn check_responsive(
    responsive: &Value,
    spacing: &Value,
    tailwind_config: Option<&str>,
    rules: &ResponsiveRules,
    report: ValidationReport,
) -> ValidationReport {
    let breakpoints = responsive.get("breakpoints");
    let mut report = check_expected(report, breakpoints, "breakpoints", &rules.breakpoints);

    // Mobile first: each breakpoint wider than the one declared before it.
    if let Some(Value::Object(entries)) = breakpoints {
        let widths: Vec<(&str, Option<i64>)> = entries
            .iter()
            .map(|(key, value)| (key.as_str(), parse_leading_int(&as_text(value))))
            .collect();
        for pair in widths.windows(2) {
            if let ((prev_key, Some(prev)), (key, Some(width))) = (pair[0], pair[1]) {
                report.expect(width > prev, || {
                    format!(
                        "Breakpoint {key} ({width}px) should be larger than {prev_key} ({prev}px)"
                    )
                });
            }
        }
    }

    let max_widths = lookup(responsive, "container.maxWidth");
    report = check_expected(report, max_widths, "container.maxWidth", &rules.max_widths);
    let padding = lookup(responsive, "container.padding");
    report = check_expected(report, padding, "container.padding", &rules.padding);

    let scale: Vec<String> = match spacing.get("spacing") {
        Some(Value::Object(entries)) => entries.values().map(as_text).collect(),
        _ => Vec::new(),
    };
    if let Some(Value::Object(entries)) = padding {
        for (key, value) in entries {
            let text = as_text(value);
            report.expect(scale.contains(&text), || {
                format!("container.padding.{key} ({text}) does not align with spacing system")
            });
        }
    }

    match tailwind_config {
        Some(source) => {
            for marker in &rules.tailwind_markers {
                let found = marker.needles.iter().all(|needle| source.contains(needle.as_str()));
                report.expect(found, || format!("Tailwind config: {} missing", marker.description));
            }
        }
        None => report.fail("tailwind.config.js not found"),
    }

    if let Some(Value::Object(entries)) = max_widths {
        for (key, value) in entries {
            let text = as_text(value);
            if text == "100%" {
                continue;
            }
            let within = parse_leading_int(&text).map_or(true, |px| px <= rules.max_width_limit_px);
            report.expect(within, || {
                format!(
                    "container.maxWidth.{key} ({text}) exceeds recommended {}px limit for readability",
                    rules.max_width_limit_px
                )
            });
        }
    }

    let small = padding
        .and_then(|p| child(p, &rules.small_screen_padding))
        .and_then(|v| parse_leading_int(&as_text(v)));
    report.expect(small.is_some_and(|px| px >= rules.min_padding_px), || {
        format!(
            "Minimum padding (container.padding.{}) should be at least {}px",
            rules.small_screen_padding, rules.min_padding_px
        )
    });

    report.finish("responsive")
}
