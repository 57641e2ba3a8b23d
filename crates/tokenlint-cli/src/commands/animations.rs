//! Animations command implementation.

use super::Context;
use crate::loader::LoadError;
use tokenlint_rules::{check_animations, ValidationReport};

pub fn validate(ctx: &Context) -> Result<ValidationReport, LoadError> {
    let animations = ctx.sources.document("animations.json")?;
    let stylesheet = ctx.sources.stylesheet()?;
    Ok(check_animations(
        &animations,
        stylesheet.as_deref(),
        &ctx.rules.animations,
        ValidationReport::new(),
    ))
}
