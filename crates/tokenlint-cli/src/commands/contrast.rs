//! Contrast command implementation.

use crate::output;
use serde::Serialize;
use tokenlint_color::{contrast_ratio, format_ratio, ContrastLevel};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContrastOutput<'a> {
    foreground: &'a str,
    background: &'a str,
    ratio: f64,
    aa_normal_text: bool,
    aa_non_text: bool,
}

/// Prints the ratio and both AA verdicts. Succeeds only when the pair is
/// readable as normal text; an invalid color is an error.
pub fn run(
    foreground: &str,
    background: &str,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let ratio = contrast_ratio(foreground, background)?;
    let result = ContrastOutput {
        foreground,
        background,
        ratio,
        aa_normal_text: ContrastLevel::AaNormalText.is_met_by(ratio),
        aa_non_text: ContrastLevel::AaNonText.is_met_by(ratio),
    };

    if json {
        println!("{}", output::format_json(&result)?);
    } else {
        println!("{} on {}: {}", foreground, background, format_ratio(ratio));
        for (level, passes) in [
            (ContrastLevel::AaNormalText, result.aa_normal_text),
            (ContrastLevel::AaNonText, result.aa_non_text),
        ] {
            println!(
                "{:<22}{:<8}{}",
                level.label(),
                format!("{}:1", level.min_ratio()),
                if passes { "PASS" } else { "FAIL" }
            );
        }
    }
    Ok(result.aa_normal_text)
}
