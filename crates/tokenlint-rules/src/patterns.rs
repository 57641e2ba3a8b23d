use regex::Regex;
use std::sync::LazyLock;

static DURATION_MS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+ms$").expect("invalid regex"));

static CUBIC_BEZIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^cubic-bezier\(\s*-?\d+(\.\d+)?\s*,\s*-?\d+(\.\d+)?\s*,\s*-?\d+(\.\d+)?\s*,\s*-?\d+(\.\d+)?\s*\)$",
    )
    .expect("invalid regex")
});

static UNSIGNED_CUBIC_BEZIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^cubic-bezier\([\d.]+,\s*[\d.]+,\s*[\d.]+,\s*[\d.]+\)$").expect("invalid regex")
});

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("invalid regex")
});

static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("invalid regex"));

/// Whole milliseconds such as `220ms`.
pub fn is_duration_ms(value: &str) -> bool {
    DURATION_MS.is_match(value)
}

/// `cubic-bezier(x1, y1, x2, y2)` with optional signs and free spacing.
pub fn is_cubic_bezier(value: &str) -> bool {
    CUBIC_BEZIER.is_match(value)
}

/// `cubic-bezier(...)` with unsigned arguments and no space after `(`.
pub fn is_unsigned_cubic_bezier(value: &str) -> bool {
    UNSIGNED_CUBIC_BEZIER.is_match(value)
}

/// Leading integer of a CSS length (`"16px"` is 16), ignoring leading spaces.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    LEADING_INT
        .find(value.trim_start())
        .and_then(|m| m.as_str().parse().ok())
}

/// Leading decimal of a CSS length (`"1.125rem"` is 1.125), ignoring leading spaces.
pub fn parse_leading_float(value: &str) -> Option<f64> {
    LEADING_FLOAT
        .find(value.trim_start())
        .and_then(|m| m.as_str().parse().ok())
}
