use serde_json::Value;
use std::fmt;

/// Dotted path to a node inside a token document, built during a walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPath {
    segments: Vec<String>,
}

impl TokenPath {
    /// The document root (renders as the empty string).
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns a new path extended by an object key.
    pub fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    /// Returns a new path extended by an array index.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(index.to_string());
        Self { segments }
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Which document a reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// The primitive (raw value) document.
    Primitive,
    /// The alias document.
    Alias,
}

impl DocumentKind {
    /// Redundant top-level prefixes authors may put in front of a path.
    pub fn prefixes(self) -> &'static [&'static str] {
        match self {
            DocumentKind::Primitive => &["primitive.", "primitives."],
            DocumentKind::Alias => &["alias.", "aliases."],
        }
    }

    /// Resolves `dotted` against `doc` using this kind's prefix rule.
    pub fn resolve<'a>(self, doc: &'a Value, dotted: &str) -> Option<&'a Value> {
        resolve_path(doc, dotted, self.prefixes())
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Primitive => write!(f, "primitive"),
            DocumentKind::Alias => write!(f, "alias"),
        }
    }
}

/// Looks up a dotted path in a document.
///
/// At most one leading prefix from `strip_prefixes` is removed first. Returns
/// `None` when a segment is missing or an intermediate node is not an object.
/// A present `null` counts as existing.
pub fn resolve_path<'a>(doc: &'a Value, dotted: &str, strip_prefixes: &[&str]) -> Option<&'a Value> {
    let clean = strip_prefixes
        .iter()
        .find_map(|prefix| dotted.strip_prefix(*prefix))
        .unwrap_or(dotted);

    clean
        .split('.')
        .try_fold(doc, |current, segment| current.as_object()?.get(segment))
}
