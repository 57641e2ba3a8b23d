use serde_json::json;
use tokenlint_graph::{
    extract_references, lint_alias_document, lint_cached_values, lint_semantic_document,
    lint_token_set, resolve_path, DocumentKind, IssueCategory, RefKind, Severity,
};

#[test]
fn alias_resolving_to_primitive_is_clean() {
    let primitives = json!({"a": {"b": "1px"}});
    let aliases = json!({"x": {"_ref": "a.b"}});
    assert!(lint_alias_document(&aliases, &primitives).is_empty());
}

#[test]
fn alias_to_missing_primitive_is_one_error() {
    let primitives = json!({"a": {"b": "1px"}});
    let aliases = json!({"x": {"_ref": "a.c"}});
    let issues = lint_alias_document(&aliases, &primitives);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);
    assert_eq!(issues[0].category, IssueCategory::Alias);
    assert_eq!(issues[0].token_path, "x");
    assert!(issues[0].message.contains("a.c"));
    assert_eq!(issues[0].message, "references non-existent primitive: a.c");
}

#[test]
fn semantic_ref_falls_back_to_primitives() {
    let primitives = json!({"colors": {"primary": {"500": "#3B82F6"}}});
    let aliases = json!({"color": {}});
    let semantic = json!({"button": {"bg": {"_ref": "colors.primary.500"}}});
    assert!(lint_semantic_document(&semantic, &aliases, &primitives).is_empty());
}

#[test]
fn semantic_ref_prefers_aliases() {
    let primitives = json!({});
    let aliases = json!({"color": {"brand": {"_ref": "colors.primary.500"}}});
    let semantic = json!({"button": {"bg": {"_ref": "aliases.color.brand"}}});
    assert!(lint_semantic_document(&semantic, &aliases, &primitives).is_empty());
}

#[test]
fn semantic_primitive_ref_ignores_aliases() {
    let primitives = json!({"colors": {}});
    let aliases = json!({"color": {"brand": "#000000"}});
    let semantic = json!({"button": {"bg": {"_primitiveRef": "color.brand"}}});
    let issues = lint_semantic_document(&semantic, &aliases, &primitives);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].token_path, "button.bg");
    assert_eq!(issues[0].message, "references non-existent primitive: color.brand");
}

#[test]
fn semantic_unresolved_names_both_targets() {
    let semantic = json!({"card": {"border": {"_ref": "color.border.subtle"}}});
    let issues = lint_semantic_document(&semantic, &json!({}), &json!({}));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].category, IssueCategory::Semantic);
    assert_eq!(
        issues[0].message,
        "references non-existent alias/primitive: color.border.subtle"
    );
}

#[test]
fn one_bad_reference_does_not_hide_others() {
    let primitives = json!({"spacing": {"4": "16px"}});
    let aliases = json!({
        "a": {"_ref": "spacing.3"},
        "b": {"_ref": "spacing.4"},
        "c": {"_ref": "spacing.5"}
    });
    let issues = lint_alias_document(&aliases, &primitives);
    let paths: Vec<_> = issues.iter().map(|i| i.token_path.as_str()).collect();
    assert_eq!(paths, vec!["a", "c"]);
}

#[test]
fn prefix_stripping_is_uniform() {
    let doc = json!({"colors": {"primary": "#3B82F6"}});
    let prefixes = DocumentKind::Primitive.prefixes();
    let bare = resolve_path(&doc, "colors.primary", prefixes);
    assert!(bare.is_some());
    assert_eq!(resolve_path(&doc, "primitive.colors.primary", prefixes), bare);
    assert_eq!(resolve_path(&doc, "primitives.colors.primary", prefixes), bare);
    // alias prefixes do not apply to primitive lookups
    assert_eq!(resolve_path(&doc, "alias.colors.primary", prefixes), None);
}

#[test]
fn end_to_end_primary_brand() {
    let primitives = json!({"colors": {"primary": {"500": "#3B82F6"}}});
    let aliases = json!({"brand": {"primary": {"_ref": "colors.primary.500", "_value": "#3B82F6"}}});
    let report = lint_token_set(&primitives, &aliases, &json!({}));
    assert!(!report.has_errors());
    assert!(report.issues.is_empty());
    assert_eq!(report.alias.valid, 1);

    let broken = json!({"brand": {"primary": {"_ref": "colors.primary.999", "_value": "#3B82F6"}}});
    let report = lint_token_set(&primitives, &broken, &json!({}));
    let errors: Vec<_> = report.issues.iter().filter(|i| i.is_error()).collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("colors.primary.999"));
    assert_eq!(report.total_invalid(), 1);
}

#[test]
fn references_come_out_in_declaration_order() {
    let doc = json!({
        "z": {"_ref": "z"},
        "a": {"_primitiveRef": "a"},
        "m": {"inner": {"_ref": "m"}}
    });
    let refs = extract_references(&doc);
    let order: Vec<_> = refs.iter().map(|r| (r.token_path.as_str(), r.kind)).collect();
    assert_eq!(
        order,
        vec![
            ("z", RefKind::Alias),
            ("a", RefKind::PrimitiveRef),
            ("m.inner", RefKind::Alias)
        ]
    );
}

#[test]
fn stale_cached_value_is_a_warning() {
    let primitives = json!({"colors": {"primary": {"500": "#3B82F6", "600": "#2563EB"}}});
    let aliases = json!({"brand": {"_ref": "colors.primary.600", "_value": "#3B82F6"}});
    let issues = lint_cached_values(IssueCategory::Alias, &aliases, &aliases, &primitives);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].token_path, "brand");

    let report = lint_token_set(&primitives, &aliases, &json!({}));
    assert!(!report.has_errors());
    assert_eq!(report.issues.len(), 1);
}

#[test]
fn semantic_cache_compares_against_alias_cache() {
    let primitives = json!({"colors": {"primary": {"500": "#3B82F6"}}});
    let aliases = json!({"brand": {"_ref": "colors.primary.500", "_value": "#3B82F6"}});
    let semantic = json!({"button": {"_ref": "brand", "_primitiveRef": "colors.primary.500", "_value": "#3B82F6"}});
    assert!(lint_cached_values(IssueCategory::Semantic, &semantic, &aliases, &primitives).is_empty());
}

#[test]
fn mapping_report_serializes_issues() {
    let report = lint_token_set(&json!({}), &json!({"x": {"_ref": "y"}}), &json!({}));
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(
        value["issues"][0],
        json!({
            "severity": "error",
            "category": "alias",
            "tokenPath": "x",
            "message": "references non-existent primitive: y"
        })
    );
}

#[test]
fn stale_cache_under_dotted_key_is_found() {
    let primitives = json!({"s": {"a": "2px"}});
    let aliases = json!({"space": {"0.5": {"_ref": "s.a", "_value": "999px"}}});
    let issues = lint_cached_values(IssueCategory::Alias, &aliases, &aliases, &primitives);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].token_path, "space.0.5");
    assert_eq!(issues[0].message, "cached _value \"999px\" differs from s.a (\"2px\")");
}

#[test]
fn dotted_key_and_nested_key_keep_their_own_caches() {
    let primitives = json!({"s": {"a": "2px", "b": "9px"}});
    let aliases = json!({"space": {
        "0.5": {"_ref": "s.a", "_value": "2px"},
        "0": {"5": {"_ref": "s.b", "_value": "9px"}}
    }});
    assert!(lint_cached_values(IssueCategory::Alias, &aliases, &aliases, &primitives).is_empty());
}

#[test]
fn stale_cache_inside_array_is_found() {
    let primitives = json!({"s": {"a": "2px"}});
    let aliases = json!({"list": [{"_ref": "s.a", "_value": "999px"}]});
    let issues = lint_cached_values(IssueCategory::Alias, &aliases, &aliases, &primitives);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].token_path, "list.0");
}

#[test]
fn alias_counts_include_unvalidated_primitive_refs() {
    let primitives = json!({"a": {"b": "1px"}});
    let aliases = json!({"x": {"_ref": "a.b"}, "y": {"_primitiveRef": "a.missing"}});
    let report = lint_token_set(&primitives, &aliases, &json!({}));
    assert_eq!(report.alias.checked, 2);
    assert_eq!((report.alias.valid, report.alias.invalid), (1, 0));
    assert!(report.issues.is_empty());
}
