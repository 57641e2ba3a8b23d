//! Responsive command implementation.

use super::Context;
use crate::loader::LoadError;
use tokenlint_rules::{check_responsive, ValidationReport};

pub fn validate(ctx: &Context) -> Result<ValidationReport, LoadError> {
    let responsive = ctx.sources.document("responsive.json")?;
    let spacing = ctx.sources.document("spacing.json")?;
    let tailwind = ctx.sources.tailwind_config()?;
    Ok(check_responsive(
        &responsive,
        &spacing,
        tailwind.as_deref(),
        &ctx.rules.responsive,
        ValidationReport::new(),
    ))
}
