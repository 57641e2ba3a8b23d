//! Rules configuration.
//!
//! Every expected constant the checks compare against lives here. The
//! `Default` impls carry the theme's design rules; a JSON file can override
//! any section, and any field left out keeps its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokenlint_color::ContrastLevel;

/// Ordered `(key, expected value)` pairs.
pub type ExpectedValues = Vec<(String, String)>;

/// Errors loading a rules configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON or has the wrong shape.
    #[error("invalid rules configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Complete rules configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RulesConfig {
    /// `colors.json` rules.
    pub colors: ColorRules,
    /// `typography.json` rules.
    pub typography: TypographyRules,
    /// `spacing.json`, `borders.json` and `shadows.json` rules.
    pub spacing: SpacingRules,
    /// `animations.json` and stylesheet rules.
    pub animations: AnimationRules,
    /// `states.json` rules.
    pub states: StateRules,
    /// `responsive.json` and Tailwind integration rules.
    pub responsive: ResponsiveRules,
}

impl RulesConfig {
    /// Parses a configuration, filling omitted fields with defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// A foreground/background pair that must meet a contrast level.
///
/// Each side is either a literal color (`#RRGGBB`, `transparent`, `none`) or
/// a dotted path into the colors document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastPair {
    /// Label used in report messages.
    pub name: String,
    /// Foreground color or path.
    pub foreground: String,
    /// Background color or path.
    pub background: String,
}

impl ContrastPair {
    fn new(name: &str, foreground: &str, background: &str) -> Self {
        Self {
            name: name.to_string(),
            foreground: foreground.to_string(),
            background: background.to_string(),
        }
    }
}

/// Rules for the colors document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorRules {
    /// Dotted paths that must be present.
    pub required_tokens: Vec<String>,
    /// Dotted paths of shade scales.
    pub scales: Vec<String>,
    /// Shades every scale must define.
    pub required_shades: Vec<String>,
    /// Pairs checked against `level`.
    pub contrast_pairs: Vec<ContrastPair>,
    /// Contrast level the pairs must meet.
    pub level: ContrastLevel,
}

impl Default for ColorRules {
    fn default() -> Self {
        Self {
            required_tokens: strings(&[
                "primitive.primary",
                "primitive.secondary",
                "primitive.accent",
                "primitive.neutral",
                "semantic.success",
                "semantic.error",
                "semantic.warning",
                "semantic.info",
                "surface.light",
                "surface.dark",
            ]),
            scales: strings(&[
                "primitive.primary",
                "primitive.secondary",
                "primitive.accent",
                "primitive.neutral",
            ]),
            required_shades: default_shades(),
            contrast_pairs: vec![
                ContrastPair::new(
                    "Light: background + foreground",
                    "surface.light.foreground",
                    "surface.light.background",
                ),
                ContrastPair::new(
                    "Light: card + cardForeground",
                    "surface.light.cardForeground",
                    "surface.light.card",
                ),
                ContrastPair::new(
                    "Dark: background + foreground",
                    "surface.dark.foreground",
                    "surface.dark.background",
                ),
                ContrastPair::new(
                    "Dark: card + cardForeground",
                    "surface.dark.cardForeground",
                    "surface.dark.card",
                ),
                ContrastPair::new("Primary 500 + white", "#FFFFFF", "primitive.primary.500"),
                ContrastPair::new("Secondary 500 + white", "#FFFFFF", "primitive.secondary.500"),
                ContrastPair::new("Success + white", "#FFFFFF", "semantic.success.DEFAULT"),
                ContrastPair::new("Error + white", "#FFFFFF", "semantic.error.DEFAULT"),
            ],
            level: ContrastLevel::AaNormalText,
        }
    }
}

/// Rules for the typography document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyRules {
    /// Keys required under `fontFamily`.
    pub font_families: Vec<String>,
    /// Keys required under `fontSize`.
    pub font_sizes: Vec<String>,
    /// Properties every font size entry must carry.
    pub size_properties: Vec<String>,
    /// Font size key used for body text.
    pub body_size: String,
    /// Root font size used to convert rem to px.
    pub base_font_px: f64,
    /// Smallest readable body size in px.
    pub min_body_px: f64,
    /// Recommended line-height range, inclusive.
    pub line_height_range: (f64, f64),
    /// Accepted font weights.
    pub font_weights: Vec<String>,
    /// Heading keys, largest first.
    pub heading_order: Vec<String>,
}

impl Default for TypographyRules {
    fn default() -> Self {
        Self {
            font_families: strings(&["heading", "body", "mono"]),
            font_sizes: strings(&[
                "display", "h1", "h2", "h3", "h4", "h5", "h6", "body-xl", "body-lg", "body",
                "body-sm", "caption", "overline",
            ]),
            size_properties: strings(&["value", "lineHeight", "fontWeight", "letterSpacing"]),
            body_size: "body".to_string(),
            base_font_px: 16.0,
            min_body_px: 14.0,
            line_height_range: (1.2, 1.8),
            font_weights: strings(&["400", "500", "600", "700", "800", "900"]),
            heading_order: strings(&["display", "h1", "h2", "h3", "h4", "h5", "h6"]),
        }
    }
}

/// Rules for spacing, border radius and shadow documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacingRules {
    /// Expected `spacing` scale.
    pub spacing: ExpectedValues,
    /// Grid every non-zero spacing value must be a multiple of, in px.
    pub grid_px: i64,
    /// Expected `borderRadius` values.
    pub border_radius: ExpectedValues,
    /// Expected `boxShadow` values.
    pub box_shadow: ExpectedValues,
}

impl Default for SpacingRules {
    fn default() -> Self {
        Self {
            spacing: expected(&[
                ("0", "0px"),
                ("1", "4px"),
                ("2", "8px"),
                ("3", "12px"),
                ("4", "16px"),
                ("5", "20px"),
                ("6", "24px"),
                ("8", "32px"),
                ("10", "40px"),
                ("12", "48px"),
                ("16", "64px"),
                ("20", "80px"),
                ("24", "96px"),
            ]),
            grid_px: 4,
            border_radius: expected(&[
                ("none", "0px"),
                ("sm", "2px"),
                ("md", "4px"),
                ("lg", "8px"),
                ("xl", "12px"),
                ("full", "9999px"),
            ]),
            box_shadow: expected(&[
                ("sm", "0 1px 2px 0 rgba(30, 34, 40, 0.04)"),
                ("md", "0 2px 8px 0 rgba(30, 34, 40, 0.08)"),
                ("lg", "0 4px 16px 0 rgba(30, 34, 40, 0.12)"),
                ("xl", "0 8px 32px 0 rgba(30, 34, 40, 0.16)"),
            ]),
        }
    }
}

/// Rules for the animations document and keyframe stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationRules {
    /// Expected `transitionDuration` values.
    pub durations: ExpectedValues,
    /// Expected `transitionTimingFunction` values.
    pub easings: ExpectedValues,
    /// Keys required under `transitionProperty`.
    pub properties: Vec<String>,
    /// `@keyframes` names the stylesheet must define.
    pub keyframes: Vec<String>,
    /// Media query the stylesheet must contain.
    pub reduced_motion_query: String,
}

impl Default for AnimationRules {
    fn default() -> Self {
        Self {
            durations: expected(&[("fast", "120ms"), ("normal", "220ms"), ("slow", "420ms")]),
            easings: expected(&[
                ("default", "cubic-bezier(0.4, 0, 0.2, 1)"),
                ("in", "cubic-bezier(0.4, 0, 1, 1)"),
                ("out", "cubic-bezier(0, 0, 0.2, 1)"),
                ("inOut", "cubic-bezier(0.4, 0, 0.2, 1)"),
                ("spring", "cubic-bezier(0.22, 1, 0.36, 1)"),
            ]),
            properties: strings(&["colors", "opacity", "shadow", "transform", "all"]),
            keyframes: strings(&["fadeIn", "fadeOut", "slideUp", "slideDown", "scaleIn"]),
            reduced_motion_query: "@media (prefers-reduced-motion: reduce)".to_string(),
        }
    }
}

/// A component and the interaction states it must define.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentStates {
    /// Component key in `states.json`.
    pub name: String,
    /// Required state keys.
    pub states: Vec<String>,
}

impl ComponentStates {
    fn new(name: &str, states: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            states: strings(states),
        }
    }
}

/// Rules for the states document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StateRules {
    /// Required `focusRing.width`.
    pub focus_ring_width: String,
    /// Required `focusRing.offset`.
    pub focus_ring_offset: String,
    /// Backdrop the light focus ring is measured against.
    pub light_backdrop: String,
    /// Backdrop the dark focus ring is measured against.
    pub dark_backdrop: String,
    /// Components and their required states.
    pub components: Vec<ComponentStates>,
    /// Properties of a state mode that must hold valid colors.
    pub color_properties: Vec<String>,
    /// Keys required under `transition`.
    pub transitions: Vec<String>,
    /// Keys required under `easing`.
    pub easings: Vec<String>,
}

impl Default for StateRules {
    fn default() -> Self {
        Self {
            focus_ring_width: "2px".to_string(),
            focus_ring_offset: "2px".to_string(),
            light_backdrop: "#ffffff".to_string(),
            dark_backdrop: "#0a0a0a".to_string(),
            components: vec![
                ComponentStates::new("button", &["default", "hover", "active", "disabled", "loading"]),
                ComponentStates::new(
                    "input",
                    &["default", "hover", "focus", "disabled", "error", "success"],
                ),
                ComponentStates::new("card", &["default", "hover", "active"]),
                ComponentStates::new(
                    "badge",
                    &["default", "hover", "success", "error", "warning", "info"],
                ),
                ComponentStates::new("link", &["default", "hover", "active", "visited"]),
            ],
            color_properties: strings(&[
                "background",
                "foreground",
                "border",
                "placeholder",
                "underline",
            ]),
            transitions: strings(&["fast", "normal", "slow"]),
            easings: strings(&["default", "in", "out", "inOut", "spring"]),
        }
    }
}

/// Text markers proving the Tailwind config consumes the responsive tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailwindMarker {
    /// What the marker proves, used in messages.
    pub description: String,
    /// Substrings that must all appear.
    pub needles: Vec<String>,
}

impl TailwindMarker {
    fn new(description: &str, needles: &[&str]) -> Self {
        Self {
            description: description.to_string(),
            needles: strings(needles),
        }
    }
}

/// Rules for the responsive document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponsiveRules {
    /// Expected `breakpoints`.
    pub breakpoints: ExpectedValues,
    /// Expected `container.maxWidth`.
    pub max_widths: ExpectedValues,
    /// Expected `container.padding`.
    pub padding: ExpectedValues,
    /// Tailwind config markers.
    pub tailwind_markers: Vec<TailwindMarker>,
    /// Largest readable container width in px.
    pub max_width_limit_px: i64,
    /// Padding key used on the smallest screens.
    pub small_screen_padding: String,
    /// Minimum padding on the smallest screens in px.
    pub min_padding_px: i64,
}

impl Default for ResponsiveRules {
    fn default() -> Self {
        Self {
            breakpoints: expected(&[
                ("sm", "480px"),
                ("md", "768px"),
                ("lg", "1024px"),
                ("xl", "1280px"),
            ]),
            max_widths: expected(&[
                ("sm", "100%"),
                ("md", "720px"),
                ("lg", "960px"),
                ("xl", "1140px"),
            ]),
            padding: expected(&[
                ("default", "24px"),
                ("sm", "16px"),
                ("md", "24px"),
                ("lg", "32px"),
                ("xl", "40px"),
            ]),
            tailwind_markers: vec![
                TailwindMarker::new(
                    "responsive tokens imported in tailwind.config.js",
                    &["import responsive from './src/styles/tokens/responsive.json'"],
                ),
                TailwindMarker::new(
                    "breakpoints configured in theme.screens",
                    &["screens: responsive.breakpoints"],
                ),
                TailwindMarker::new(
                    "container configured with center alignment",
                    &["container:", "center: true"],
                ),
            ],
            max_width_limit_px: 1140,
            small_screen_padding: "sm".to_string(),
            min_padding_px: 16,
        }
    }
}

fn default_shades() -> Vec<String> {
    strings(&["50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"])
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn expected(pairs: &[(&str, &str)]) -> ExpectedValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
