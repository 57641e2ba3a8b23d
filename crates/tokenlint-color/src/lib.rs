//! Color primitives for design-token validation.
//!
//! Implements the WCAG 2.1 relative luminance and contrast ratio definitions
//! over the color notation used by token documents: `#RRGGBB` hex values and
//! the permissive sentinels `transparent` / `none`.
//!
//! Everything in this crate is a pure function. Invalid colors fail fast with
//! [`ColorError`]; callers are expected to validate format separately with
//! [`is_valid_color`] when they want to report rather than abort.
//!
#![deny(missing_docs)]

/// Parsed color values.
pub mod color;
/// Luminance, contrast ratio and WCAG threshold policy.
pub mod contrast;
/// Error types for color parsing.
pub mod error;

pub use color::{is_valid_color, Color};
pub use contrast::{
    check_contrast, contrast_ratio, format_ratio, relative_luminance, ContrastCheck, ContrastLevel,
};
pub use error::ColorError;
