//! tokenlint - validates design-token JSON files against the design system rules.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod loader;
mod output;

use commands::{all, contrast, Context, Validation};

#[derive(Parser)]
#[command(name = "tokenlint")]
#[command(about = "Design-token validation: WCAG contrast, scales, states and reference mapping")]
struct Cli {
    /// Project root holding src/styles and tailwind.config.js
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
    /// Token directory (default: <root>/src/styles/tokens)
    #[arg(long, global = true)]
    tokens_dir: Option<PathBuf>,
    /// Rules configuration JSON overriding the built-in rules
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate colors.json: format, required tokens, contrast, shade scales
    Colors,
    /// Validate typography.json: families, size scale, line heights, hierarchy
    Typography,
    /// Validate spacing.json, borders.json and shadows.json
    Spacing,
    /// Validate animations.json and animations.css
    Animations,
    /// Validate states.json: focus ring, component states, transitions
    States,
    /// Validate responsive.json against spacing.json and tailwind.config.js
    Responsive,
    /// Validate primitive/alias/semantic references
    Mapping,
    /// Run every validation and print a summary
    All,
    /// Show the WCAG contrast ratio of two colors
    Contrast {
        /// Foreground color (#RRGGBB)
        foreground: String,
        /// Background color (#RRGGBB)
        background: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("TOKENLINT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_logging();
    let Cli {
        root,
        tokens_dir,
        config,
        json,
        command,
    } = Cli::parse();
    let context = || Context::new(&root, tokens_dir.as_deref(), config.as_deref(), json);
    let validate = |validation| context().and_then(|ctx| commands::run(validation, &ctx));

    let result = match command {
        Commands::Colors => validate(Validation::Colors),
        Commands::Typography => validate(Validation::Typography),
        Commands::Spacing => validate(Validation::Spacing),
        Commands::Animations => validate(Validation::Animations),
        Commands::States => validate(Validation::States),
        Commands::Responsive => validate(Validation::Responsive),
        Commands::Mapping => validate(Validation::Mapping),
        Commands::All => context().and_then(|ctx| all::run(&ctx)),
        Commands::Contrast {
            foreground,
            background,
        } => contrast::run(&foreground, &background, json),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
