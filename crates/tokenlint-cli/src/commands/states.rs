//! States command implementation.

use super::Context;
use crate::loader::LoadError;
use tokenlint_rules::{check_states, ValidationReport};

pub fn validate(ctx: &Context) -> Result<ValidationReport, LoadError> {
    let states = ctx.sources.document("states.json")?;
    Ok(check_states(&states, &ctx.rules.states, ValidationReport::new()))
}
