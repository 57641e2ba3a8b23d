use thiserror::Error;

/// Errors raised when a string cannot be used as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The value is neither `#RRGGBB` nor one of `transparent` / `none`.
    #[error("invalid color '{value}': expected #RRGGBB, transparent or none")]
    InvalidColor {
        /// Offending value.
        value: String,
    },
}
