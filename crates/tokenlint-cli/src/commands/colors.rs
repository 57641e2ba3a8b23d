//! Colors command implementation.

use super::Context;
use crate::loader::LoadError;
use tokenlint_rules::{check_colors, ValidationReport};

pub fn validate(ctx: &Context) -> Result<ValidationReport, LoadError> {
    let colors = ctx.sources.document("colors.json")?;
    Ok(check_colors(&colors, &ctx.rules.colors, ValidationReport::new()))
}
