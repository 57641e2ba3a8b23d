use crate::color::Color;
use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// Relative luminance of a token color string.
///
/// Fails with [`ColorError::InvalidColor`] unless the value passes
/// [`crate::is_valid_color`].
pub fn relative_luminance(value: &str) -> Result<f64, ColorError> {
    Ok(Color::parse(value)?.luminance())
}

/// WCAG 2.1 contrast ratio between two token colors, in `[1, 21]`.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`; argument order does not matter.
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64, ColorError> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    let lighter = la.max(lb);
    let darker = la.min(lb);
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// WCAG AA contrast thresholds applied by validation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContrastLevel {
    /// Normal body text: at least 4.5:1.
    AaNormalText,
    /// UI components, focus rings and large text: at least 3:1.
    AaNonText,
}

impl ContrastLevel {
    /// Minimum ratio required by this level.
    pub fn min_ratio(self) -> f64 {
        match self {
            ContrastLevel::AaNormalText => 4.5,
            ContrastLevel::AaNonText => 3.0,
        }
    }

    /// Returns true if `ratio` meets this level.
    pub fn is_met_by(self, ratio: f64) -> bool {
        ratio >= self.min_ratio()
    }

    /// Human-readable label used in report messages.
    pub fn label(self) -> &'static str {
        match self {
            ContrastLevel::AaNormalText => "WCAG AA normal text",
            ContrastLevel::AaNonText => "WCAG AA non-text",
        }
    }
}

/// Outcome of checking one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastCheck {
    /// Computed contrast ratio.
    pub ratio: f64,
    /// Level the pair was checked against.
    pub level: ContrastLevel,
    /// Whether the ratio meets the level.
    pub passes: bool,
}

/// Computes the contrast of `fg` on `bg` and evaluates it against `level`.
pub fn check_contrast(fg: &str, bg: &str, level: ContrastLevel) -> Result<ContrastCheck, ColorError> {
    let ratio = contrast_ratio(fg, bg)?;
    Ok(ContrastCheck {
        ratio,
        level,
        passes: level.is_met_by(ratio),
    })
}

/// Formats a ratio as `N.NN:1`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}:1", ratio)
}
