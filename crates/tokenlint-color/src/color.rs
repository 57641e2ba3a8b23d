use crate::error::ColorError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("invalid regex"));

/// Sentinel spellings accepted in place of a hex value.
const TRANSPARENT_SENTINELS: [&str; 2] = ["transparent", "none"];

/// Returns true iff `value` is `transparent`, `none`, or a 6-digit hex color.
///
/// Shorthand (`#ABC`), alpha (`#RRGGBBAA`) and named colors are rejected.
pub fn is_valid_color(value: &str) -> bool {
    TRANSPARENT_SENTINELS.contains(&value) || HEX_COLOR.is_match(value)
}

/// A color as it appears in a token document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// An opaque sRGB color.
    Rgb {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
    },
    /// `transparent` or `none`. Treated as maximally light, not alpha-blended.
    Transparent,
}

impl Color {
    /// Parses a token color value.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        if TRANSPARENT_SENTINELS.contains(&value) {
            return Ok(Color::Transparent);
        }
        if !HEX_COLOR.is_match(value) {
            return Err(ColorError::InvalidColor {
                value: value.to_string(),
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&value[range], 16).map_err(|_| ColorError::InvalidColor {
                value: value.to_string(),
            })
        };
        Ok(Color::Rgb {
            r: channel(1..3)?,
            g: channel(3..5)?,
            b: channel(5..7)?,
        })
    }

    /// WCAG 2.1 relative luminance in `[0, 1]`.
    ///
    /// `Transparent` is defined as exactly `1.0`, so it never blocks a
    /// contrast check against either end of the spectrum.
    pub fn luminance(&self) -> f64 {
        match *self {
            Color::Transparent => 1.0,
            Color::Rgb { r, g, b } => {
                let r_lin = linearize(r);
                let g_lin = linearize(g);
                let b_lin = linearize(b);
                0.2126 * r_lin + 0.7152 * g_lin + 0.0722 * b_lin
            }
        }
    }
}

/// sRGB channel linearization with the WCAG 2.1 threshold of 0.03928.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Transparent => write!(f, "transparent"),
        }
    }
}
