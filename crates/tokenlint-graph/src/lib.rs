//! Reference linting for layered design-token documents.
//!
//! A token set is three JSON documents:
//! - primitives: raw literal values reachable by dotted path
//! - aliases: records whose `_ref` points into primitives
//! - semantic: records whose `_ref` points into aliases (or, as a fallback,
//!   primitives) and whose `_primitiveRef` points into primitives
//!
//! This crate extracts those references and checks that each one resolves.
//! Resolution is fixed at one hop per reference: chains are never chased.
//!
//! The linter never performs I/O and never fails on content. It always walks
//! the whole document and returns every [`Issue`] it found.
//!
#![deny(missing_docs)]

/// Issue and severity types.
pub mod issue;
/// Alias and semantic document linting.
pub mod linter;
/// Dotted-path building and resolution.
pub mod path;
/// Reference extraction from token documents.
pub mod reference;

pub use issue::{Issue, IssueCategory, Severity};
pub use linter::{
    lint_alias_document, lint_cached_values, lint_semantic_document, lint_token_set,
    MappingReport, ReferenceCounts,
};
pub use path::{resolve_path, DocumentKind, TokenPath};
pub use reference::{extract_references, RefKind, Reference};
