//! Command implementations.

pub mod all;
pub mod animations;
pub mod colors;
pub mod contrast;
pub mod mapping;
pub mod responsive;
pub mod spacing;
pub mod states;
pub mod typography;

use crate::loader::{self, LoadError, TokenSources};
use crate::output::{self, CheckOutput};
use std::path::Path;
use tokenlint_rules::{RulesConfig, ValidationReport};
use tracing::info;

/// What every validation command needs: where the files are, the rules and the output mode.
pub struct Context {
    pub sources: TokenSources,
    pub rules: RulesConfig,
    pub json: bool,
}

impl Context {
    pub fn new(
        root: &Path,
        tokens_dir: Option<&Path>,
        config: Option<&Path>,
        json: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let rules = match config {
            Some(path) => {
                let raw = loader::read_text(path)?;
                info!(path = %path.display(), "using rules configuration");
                RulesConfig::from_json(&raw)
                    .map_err(|e| format!("Invalid rules config {}: {}", path.display(), e))?
            }
            None => RulesConfig::default(),
        };
        Ok(Self {
            sources: TokenSources::new(root, tokens_dir),
            rules,
            json,
        })
    }
}

/// The token-file validations, in the order `all` runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Colors,
    Typography,
    Spacing,
    Animations,
    States,
    Responsive,
    Mapping,
}

impl Validation {
    pub const ALL: [Validation; 7] = [
        Validation::Colors,
        Validation::Typography,
        Validation::Spacing,
        Validation::Animations,
        Validation::States,
        Validation::Responsive,
        Validation::Mapping,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Validation::Colors => "colors",
            Validation::Typography => "typography",
            Validation::Spacing => "spacing",
            Validation::Animations => "animations",
            Validation::States => "states",
            Validation::Responsive => "responsive",
            Validation::Mapping => "mapping",
        }
    }

    /// Loads this validation's files and runs its checks.
    pub fn validate(self, ctx: &Context) -> Result<ValidationReport, LoadError> {
        match self {
            Validation::Colors => colors::validate(ctx),
            Validation::Typography => typography::validate(ctx),
            Validation::Spacing => spacing::validate(ctx),
            Validation::Animations => animations::validate(ctx),
            Validation::States => states::validate(ctx),
            Validation::Responsive => responsive::validate(ctx),
            Validation::Mapping => mapping::validate(ctx),
        }
    }
}

/// Runs one validation and prints its report. A load failure is fatal.
pub fn run(validation: Validation, ctx: &Context) -> Result<bool, Box<dyn std::error::Error>> {
    let name = validation.name();
    let report = validation
        .validate(ctx)
        .map_err(|e| format!("{} validation aborted: {}", name, e))?;

    if ctx.json {
        println!("{}", output::format_json(&CheckOutput::completed(name, &report))?);
    } else {
        print!("{}", output::format_report(name, &report));
    }
    Ok(report.is_success())
}
