//! Mapping command implementation.

use super::Context;
use crate::loader::LoadError;
use tokenlint_graph::lint_token_set;
use tokenlint_rules::{record_mapping, ValidationReport};
use tracing::info;

pub fn validate(ctx: &Context) -> Result<ValidationReport, LoadError> {
    let primitives = ctx.sources.document("primitives.json")?;
    let aliases = ctx.sources.document("aliases.json")?;
    let semantic = ctx.sources.document("semantic.json")?;

    let mapping = lint_token_set(&primitives, &aliases, &semantic);
    info!(
        alias_checked = mapping.alias.checked,
        semantic_checked = mapping.semantic.checked,
        invalid = mapping.total_invalid(),
        "reference mapping linted"
    );
    Ok(record_mapping(&mapping, ValidationReport::new()))
}
