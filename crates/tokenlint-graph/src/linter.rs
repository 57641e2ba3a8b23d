use crate::issue::{Issue, IssueCategory};
use crate::path::DocumentKind;
use crate::reference::{extract_references, RefKind, Reference, VALUE_KEY};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Where a `_primitiveRef` (or an alias-document `_ref`) may resolve.
const PRIMITIVE_ONLY: &[DocumentKind] = &[DocumentKind::Primitive];
/// Where a semantic `_ref` may resolve, in lookup order.
const ALIAS_THEN_PRIMITIVE: &[DocumentKind] = &[DocumentKind::Alias, DocumentKind::Primitive];

/// Reference counters for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCounts {
    /// References extracted from the document, of either kind.
    ///
    /// `_primitiveRef` entries in the alias document are counted here but
    /// not validated, so `checked` can exceed `valid + invalid` there.
    pub checked: usize,
    /// References that resolved.
    pub valid: usize,
    /// References that did not resolve.
    pub invalid: usize,
}

/// Result of linting a whole primitive/alias/semantic token set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingReport {
    /// Counters for the alias document.
    pub alias: ReferenceCounts,
    /// Counters for the semantic document.
    pub semantic: ReferenceCounts,
    /// Every issue found, alias issues first.
    pub issues: Vec<Issue>,
}

impl MappingReport {
    /// True if any issue has error severity.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }

    /// Valid references across both documents.
    pub fn total_valid(&self) -> usize {
        self.alias.valid + self.semantic.valid
    }

    /// Invalid references across both documents.
    pub fn total_invalid(&self) -> usize {
        self.alias.invalid + self.semantic.invalid
    }
}

/// Checks that every `_ref` in the alias document names an existing primitive.
pub fn lint_alias_document(aliases: &Value, primitives: &Value) -> Vec<Issue> {
    check_aliases(aliases, primitives).1
}

/// Checks every reference in the semantic document.
///
/// A `_ref` may resolve against aliases or, failing that, primitives. A
/// `_primitiveRef` must resolve against primitives.
pub fn lint_semantic_document(semantic: &Value, aliases: &Value, primitives: &Value) -> Vec<Issue> {
    check_semantic(semantic, aliases, primitives).1
}

/// Lints both reference documents and checks cached `_value`s.
pub fn lint_token_set(primitives: &Value, aliases: &Value, semantic: &Value) -> MappingReport {
    let (alias, mut issues) = check_aliases(aliases, primitives);
    let (semantic_counts, semantic_issues) = check_semantic(semantic, aliases, primitives);
    issues.extend(semantic_issues);
    issues.extend(lint_cached_values(IssueCategory::Alias, aliases, aliases, primitives));
    issues.extend(lint_cached_values(IssueCategory::Semantic, semantic, aliases, primitives));

    debug!(
        alias_valid = alias.valid,
        alias_invalid = alias.invalid,
        semantic_valid = semantic_counts.valid,
        semantic_invalid = semantic_counts.invalid,
        "linted token set"
    );

    MappingReport {
        alias,
        semantic: semantic_counts,
        issues,
    }
}

/// Warns where a record's cached `_value` disagrees with its reference target.
///
/// Only one hop is followed: when the target is itself a reference record,
/// its own `_value` is compared. Unresolved references are skipped since the
/// reference lints already report them.
pub fn lint_cached_values(
    category: IssueCategory,
    doc: &Value,
    aliases: &Value,
    primitives: &Value,
) -> Vec<Issue> {
    let mut issues = Vec::new();
    for reference in extract_references(doc) {
        let Some(cached) = &reference.cached_value else {
            continue;
        };
        let target = match (category, reference.kind) {
            (IssueCategory::Semantic, RefKind::Alias) => {
                resolve_alias_or_primitive(&reference.ref_path, aliases, primitives)
            }
            _ => DocumentKind::Primitive.resolve(primitives, &reference.ref_path),
        };
        let Some(resolved) = target.map(cached_value_of) else {
            continue;
        };
        if resolved != cached {
            issues.push(Issue::warning(
                category,
                reference.token_path.clone(),
                format!(
                    "cached _value {} differs from {} ({})",
                    cached, reference.ref_path, resolved
                ),
            ));
        }
    }
    issues
}

fn check_aliases(aliases: &Value, primitives: &Value) -> (ReferenceCounts, Vec<Issue>) {
    let refs = extract_references(aliases);
    let mut counts = ReferenceCounts {
        checked: refs.len(),
        ..ReferenceCounts::default()
    };
    let mut issues = Vec::new();

    for reference in refs.iter().filter(|r| r.kind == RefKind::Alias) {
        if DocumentKind::Primitive.resolve(primitives, &reference.ref_path).is_some() {
            counts.valid += 1;
        } else {
            counts.invalid += 1;
            issues.push(unresolved(IssueCategory::Alias, reference, PRIMITIVE_ONLY));
        }
    }

    (counts, issues)
}

fn check_semantic(semantic: &Value, aliases: &Value, primitives: &Value) -> (ReferenceCounts, Vec<Issue>) {
    let refs = extract_references(semantic);
    let mut counts = ReferenceCounts {
        checked: refs.len(),
        ..ReferenceCounts::default()
    };
    let mut issues = Vec::new();

    for reference in &refs {
        let (found, expected) = match reference.kind {
            RefKind::Alias => (
                resolve_alias_or_primitive(&reference.ref_path, aliases, primitives).is_some(),
                ALIAS_THEN_PRIMITIVE,
            ),
            RefKind::PrimitiveRef => (
                DocumentKind::Primitive
                    .resolve(primitives, &reference.ref_path)
                    .is_some(),
                PRIMITIVE_ONLY,
            ),
        };
        if found {
            counts.valid += 1;
        } else {
            counts.invalid += 1;
            issues.push(unresolved(IssueCategory::Semantic, reference, expected));
        }
    }

    (counts, issues)
}

fn resolve_alias_or_primitive<'a>(
    ref_path: &str,
    aliases: &'a Value,
    primitives: &'a Value,
) -> Option<&'a Value> {
    DocumentKind::Alias
        .resolve(aliases, ref_path)
        .or_else(|| DocumentKind::Primitive.resolve(primitives, ref_path))
}

fn unresolved(category: IssueCategory, reference: &Reference, targets: &[DocumentKind]) -> Issue {
    let expected = targets
        .iter()
        .map(DocumentKind::to_string)
        .collect::<Vec<_>>()
        .join("/");
    debug!(
        token = %reference.token_path,
        target = %reference.ref_path,
        expected = %expected,
        "unresolved reference"
    );
    Issue::error(
        category,
        reference.token_path.clone(),
        format!("references non-existent {}: {}", expected, reference.ref_path),
    )
}

/// A reference record stands for its cached value; a literal for itself.
fn cached_value_of(target: &Value) -> &Value {
    target.get(VALUE_KEY).unwrap_or(target)
}
