use crate::config::AnimationRules;
use crate::lookup::{as_text, check_expected, child};
use crate::patterns::is_cubic_bezier;
use crate::report::ValidationReport;
use serde_json::Value;

/// Validates the animations document and, when given, the keyframe stylesheet.
///
/// A missing stylesheet (`None`) is a failure: the keyframes the tokens
/// name must exist somewhere.
pub fn check_animations(
    animations: &Value,
    stylesheet: Option<&str>,
    rules: &AnimationRules,
    report: ValidationReport,
) -> ValidationReport {
    let mut report = check_expected(
        report,
        animations.get("transitionDuration"),
        "transitionDuration",
        &rules.durations,
    );

    let easings = animations.get("transitionTimingFunction");
    report = check_expected(report, easings, "transitionTimingFunction", &rules.easings);
    if let Some(Value::Object(entries)) = easings {
        for (key, value) in entries {
            let text = as_text(value);
            report.expect(is_cubic_bezier(&text), || {
                format!("transitionTimingFunction.{key} has invalid cubic-bezier format: {text}")
            });
        }
    }

    match animations.get("transitionProperty") {
        Some(properties) => {
            for key in &rules.properties {
                report.expect(child(properties, key).is_some(), || {
                    format!("Missing transitionProperty.{key}")
                });
            }
        }
        None => report.fail("Missing \"transitionProperty\" section"),
    }

    match stylesheet {
        Some(css) => {
            for name in &rules.keyframes {
                report.expect(css.contains(&format!("@keyframes {name}")), || {
                    format!("Missing @keyframes {name} in animations.css")
                });
            }
            report.expect(css.contains(&rules.reduced_motion_query), || {
                format!("Missing {} in animations.css", rules.reduced_motion_query)
            });
        }
        None => report.fail("Missing animations.css stylesheet"),
    }

    report.finish("animations")
}
