use crate::config::StateRules;
use crate::lookup::{as_text, child};
use crate::patterns::{is_duration_ms, is_unsigned_cubic_bezier};
use crate::report::ValidationReport;
use serde_json::Value;
use tokenlint_color::{contrast_ratio, format_ratio, is_valid_color, ContrastLevel};

const MODES: [&str; 2] = ["light", "dark"];

/// Validates the interaction-state document.
///
/// Low contrast is advisory here: focus rings below 3:1 and state text below
/// 4.5:1 are warnings, while malformed or missing values are errors.
pub fn check_states(states: &Value, rules: &StateRules, report: ValidationReport) -> ValidationReport {
    let report = check_focus_ring(states, rules, report);
    let report = check_components(states, rules, report);
    check_motion(states, rules, report).finish("states")
}

fn check_focus_ring(states: &Value, rules: &StateRules, mut report: ValidationReport) -> ValidationReport {
    let Some(ring) = child(states, "focusRing") else {
        report.fail("Missing focusRing configuration");
        return report;
    };

    let width = ring.get("width").map(as_text).unwrap_or_default();
    report.expect(width == rules.focus_ring_width, || {
        format!("Focus ring width should be {}, got {width}", rules.focus_ring_width)
    });
    let offset = ring.get("offset").map(as_text).unwrap_or_default();
    report.expect(offset == rules.focus_ring_offset, || {
        format!("Focus ring offset should be {}, got {offset}", rules.focus_ring_offset)
    });

    let Some(colors) = child(ring, "color") else {
        report.fail("Missing focus ring color configuration");
        return report;
    };

    for (mode, backdrop, backdrop_name) in [
        ("light", &rules.light_backdrop, "white"),
        ("dark", &rules.dark_backdrop, "dark"),
    ] {
        let Some(value) = child(colors, mode) else {
            report.fail(format!("Missing {mode} mode focus ring color"));
            continue;
        };
        let color = as_text(value);
        if !is_valid_color(&color) {
            report.fail(format!("Invalid {mode} mode focus ring color: {color}"));
            continue;
        }
        report.pass();
        if let Ok(ratio) = contrast_ratio(&color, backdrop) {
            if !ContrastLevel::AaNonText.is_met_by(ratio) {
                report.warn(format!(
                    "Focus ring {mode} color has low contrast ({}) on {backdrop_name} background",
                    format_ratio(ratio)
                ));
            }
        }
    }
    report
}

fn check_components(states: &Value, rules: &StateRules, mut report: ValidationReport) -> ValidationReport {
    for component in &rules.components {
        let name = &component.name;
        let Some(config) = child(states, name) else {
            report.fail(format!("Missing {name} state configuration"));
            continue;
        };
        for state in &component.states {
            let Some(state_config) = child(config, state) else {
                report.fail(format!("Missing {state} state for {name}"));
                continue;
            };
            for mode in MODES {
                match child(state_config, mode) {
                    Some(mode_config) => {
                        report.pass();
                        let location = format!("{name}.{state}.{mode}");
                        report = check_mode_colors(&location, mode_config, rules, report);
                    }
                    None => report.fail(format!("Missing {mode} mode for {name}.{state}")),
                }
            }
        }
    }
    report
}

fn check_mode_colors(
    location: &str,
    config: &Value,
    rules: &StateRules,
    mut report: ValidationReport,
) -> ValidationReport {
    for prop in &rules.color_properties {
        if let Some(value) = config.get(prop.as_str()) {
            let text = as_text(value);
            report.expect(value.is_string() && is_valid_color(&text), || {
                format!("Invalid {prop} color for {location}: {text}")
            });
        }
    }

    let foreground = child(config, "foreground").and_then(Value::as_str);
    let background = child(config, "background").and_then(Value::as_str);
    if let (Some(fg), Some(bg)) = (foreground, background) {
        if fg == "transparent" || bg == "transparent" {
            return report;
        }
        if let Ok(ratio) = contrast_ratio(fg, bg) {
            if !ContrastLevel::AaNormalText.is_met_by(ratio) {
                report.warn(format!(
                    "Low contrast ({}) for {location} (foreground: {fg}, background: {bg}). \
                     WCAG AA requires 4.5:1 for normal text.",
                    format_ratio(ratio)
                ));
            }
        }
    }
    report
}

fn check_motion(states: &Value, rules: &StateRules, mut report: ValidationReport) -> ValidationReport {
    match child(states, "transition") {
        Some(transition) => {
            for key in &rules.transitions {
                match child(transition, key) {
                    None => report.fail(format!("Missing transition.{key}")),
                    Some(value) => {
                        let text = as_text(value);
                        report.expect(is_duration_ms(&text), || {
                            format!("Invalid transition.{key} format: {text}")
                        });
                    }
                }
            }
        }
        None => report.fail("Missing transition configuration"),
    }

    match child(states, "easing") {
        Some(easing) => {
            for key in &rules.easings {
                match child(easing, key) {
                    None => report.fail(format!("Missing easing.{key}")),
                    Some(value) => {
                        let text = as_text(value);
                        report.expect(is_unsigned_cubic_bezier(&text), || {
                            format!("Invalid easing.{key} format: {text}")
                        });
                    }
                }
            }
        }
        None => report.fail("Missing easing configuration"),
    }
    report
}
