//! All command implementation.

use super::{Context, Validation};
use crate::output::{self, CheckOutput};
use serde::Serialize;
use tracing::warn;

#[derive(Serialize)]
struct Summary<'a> {
    validations: Vec<CheckOutput<'a>>,
    passed: Vec<&'a str>,
    failed: Vec<&'a str>,
}

/// Runs every validation, continuing past failures, then prints a summary.
pub fn run(ctx: &Context) -> Result<bool, Box<dyn std::error::Error>> {
    let results: Vec<_> = Validation::ALL
        .iter()
        .map(|validation| (validation.name(), validation.validate(ctx)))
        .collect();

    let mut summary = Summary {
        validations: Vec::with_capacity(results.len()),
        passed: Vec::new(),
        failed: Vec::new(),
    };
    for (name, result) in &results {
        let name = *name;
        let entry = match result {
            Ok(report) => CheckOutput::completed(name, report),
            Err(e) => {
                warn!(check = name, error = %e, "validation aborted");
                CheckOutput::aborted(name, e.to_string())
            }
        };
        if entry.success {
            summary.passed.push(name);
        } else {
            summary.failed.push(name);
        }
        summary.validations.push(entry);
    }

    if ctx.json {
        println!("{}", output::format_json(&summary)?);
    } else {
        for entry in &summary.validations {
            match (entry.report, &entry.error) {
                (Some(report), _) => print!("{}", output::format_report(entry.check, report)),
                (None, Some(error)) => print!("{}\n{}\nERROR: {}\n", entry.check, "-".repeat(40), error),
                (None, None) => {}
            }
            println!();
        }
        print!("{}", output::format_summary(&summary.passed, &summary.failed));
    }
    Ok(summary.failed.is_empty())
}
