use crate::path::TokenPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved key holding a reference one layer down.
pub const REF_KEY: &str = "_ref";
/// Reserved key holding a reference straight into primitives.
pub const PRIMITIVE_REF_KEY: &str = "_primitiveRef";
/// Reserved key holding the cached resolved value.
pub const VALUE_KEY: &str = "_value";

/// Kind of reference declared by a token record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RefKind {
    /// Declared with `_ref`.
    Alias,
    /// Declared with `_primitiveRef`.
    PrimitiveRef,
}

/// A reference found in a token document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Dotted path of the record that declares the reference.
    pub token_path: String,
    /// Dotted path the reference points to, as written.
    pub ref_path: String,
    /// Which reserved key declared it.
    pub kind: RefKind,
    /// The record's `_value`, if it caches one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_value: Option<Value>,
}

/// Collects every `_ref` / `_primitiveRef` in declaration order.
///
/// A reserved key with a non-string value is not a reference; it is walked
/// like any other nested node.
pub fn extract_references(doc: &Value) -> Vec<Reference> {
    let mut refs = Vec::new();
    collect(doc, &TokenPath::root(), &mut refs);
    refs
}

fn collect(value: &Value, path: &TokenPath, refs: &mut Vec<Reference>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let kind = match key.as_str() {
                    REF_KEY => RefKind::Alias,
                    PRIMITIVE_REF_KEY => RefKind::PrimitiveRef,
                    _ => {
                        collect(child, &path.push_field(key), refs);
                        continue;
                    }
                };
                match child {
                    Value::String(target) => refs.push(Reference {
                        token_path: path.to_string(),
                        ref_path: target.clone(),
                        kind,
                        cached_value: map.get(VALUE_KEY).cloned(),
                    }),
                    _ => collect(child, &path.push_field(key), refs),
                }
            }
        }
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                collect(item, &path.push_index(idx), refs);
            }
        }
        _ => {}
    }
}
