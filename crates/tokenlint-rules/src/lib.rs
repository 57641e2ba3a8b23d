//! Design-system rule checks for token documents.
//!
//! Each check takes already-parsed JSON documents, the relevant section of
//! [`RulesConfig`], and a [`ValidationReport`], and returns the report with
//! its own results added. Checks never perform I/O and never abort on bad
//! content: a missing section is recorded as an error and the check moves on.
//!
//! Contrast math comes from `tokenlint-color`; path lookup and reference
//! linting come from `tokenlint-graph`.

#![deny(missing_docs)]

/// Duration, easing, transition property and keyframe checks.
pub mod animations;
/// Color format, required tokens, contrast pairs and shade scales.
pub mod colors;
/// Rules configuration and its defaults.
pub mod config;
/// Shared lookup and unit-parsing helpers.
pub mod lookup;
/// Primitive/alias/semantic reference mapping.
pub mod mapping;
/// Regex patterns for CSS value syntax.
pub mod patterns;
/// The pass/fail/warning accumulator.
pub mod report;
/// Breakpoint, container and Tailwind integration checks.
pub mod responsive;
/// Spacing scale, border radius and shadow checks.
pub mod spacing;
/// Focus ring, component state and transition checks.
pub mod states;
/// Font family, size scale and hierarchy checks.
pub mod typography;

pub use animations::check_animations;
pub use colors::check_colors;
pub use config::{
    AnimationRules, ColorRules, ComponentStates, ConfigError, ContrastPair, ExpectedValues,
    ResponsiveRules, RulesConfig, SpacingRules, StateRules, TailwindMarker, TypographyRules,
};
pub use mapping::{check_token_mapping, record_mapping};
pub use report::ValidationReport;
pub use responsive::check_responsive;
pub use spacing::{check_border_radius, check_box_shadows, check_spacing, check_spacing_scale};
pub use states::check_states;
pub use typography::check_typography;
