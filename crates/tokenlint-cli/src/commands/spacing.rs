//! Spacing command implementation.

use super::Context;
use crate::loader::LoadError;
use tokenlint_rules::{check_spacing, ValidationReport};

/// Spacing, border radius and shadows are validated together; all three files must load.
pub fn validate(ctx: &Context) -> Result<ValidationReport, LoadError> {
    let spacing = ctx.sources.document("spacing.json")?;
    let borders = ctx.sources.document("borders.json")?;
    let shadows = ctx.sources.document("shadows.json")?;
    Ok(check_spacing(
        &spacing,
        &borders,
        &shadows,
        &ctx.rules.spacing,
        ValidationReport::new(),
    ))
}
