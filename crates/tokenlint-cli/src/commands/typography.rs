//! Typography command implementation.

use super::Context;
use crate::loader::LoadError;
use tokenlint_rules::{check_typography, ValidationReport};

pub fn validate(ctx: &Context) -> Result<ValidationReport, LoadError> {
    let typography = ctx.sources.document("typography.json")?;
    Ok(check_typography(
        &typography,
        &ctx.rules.typography,
        ValidationReport::new(),
    ))
}
