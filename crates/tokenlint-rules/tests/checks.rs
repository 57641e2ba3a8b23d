use serde_json::json;
use tokenlint_color::ContrastLevel;
use tokenlint_rules::{
    check_animations, check_border_radius, check_colors, check_responsive, check_spacing,
    check_states, check_token_mapping, check_typography, AnimationRules, ColorRules,
    ComponentStates, ContrastPair, ResponsiveRules, RulesConfig, SpacingRules, StateRules,
    TypographyRules, ValidationReport,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn contrast_pair(name: &str, foreground: &str, background: &str) -> ContrastPair {
    ContrastPair {
        name: name.to_string(),
        foreground: foreground.to_string(),
        background: background.to_string(),
    }
}

#[test]
fn colors_report_format_contrast_and_scales() {
    let rules = ColorRules {
        required_tokens: strings(&["brand.500", "surface.light"]),
        scales: strings(&["brand", "accent"]),
        required_shades: strings(&["500", "600", "700"]),
        contrast_pairs: vec![
            contrast_pair("Brand 500 + white", "#FFFFFF", "brand.500"),
            contrast_pair("Brand 600 + white", "#FFFFFF", "brand.600"),
            contrast_pair("Missing", "#FFFFFF", "brand.900"),
        ],
        level: ContrastLevel::AaNormalText,
    };
    let colors = json!({
        "brand": {"500": "#3B82F6", "600": "#2563EB"},
        "surface": {"light": {"background": "#FFFFFF", "foreground": "#111827"}},
        "bad": "blue"
    });

    let report = check_colors(&colors, &rules, ValidationReport::new());

    assert_eq!(report.passed, 7);
    assert_eq!(
        report.errors,
        strings(&[
            "Invalid HEX format at bad: blue",
            "Brand 500 + white: 3.68:1 (fails WCAG AA normal text)",
            "Missing: color not found",
            "brand: missing shades: 700",
            "accent: color scale not found",
        ])
    );
    assert_eq!(report.failed, 5);
}

#[test]
fn colors_accept_transparent_sentinels() {
    let rules = ColorRules {
        required_tokens: vec![],
        scales: vec![],
        required_shades: vec![],
        contrast_pairs: vec![],
        level: ContrastLevel::AaNormalText,
    };
    let colors = json!({"overlay": {"none": "transparent", "off": "none"}});
    let report = check_colors(&colors, &rules, ValidationReport::new());
    assert!(report.is_success());
    assert_eq!(report.passed, 2);
}

#[test]
fn typography_checks_sizes_weights_and_hierarchy() {
    let rules = TypographyRules {
        font_families: strings(&["heading", "body"]),
        font_sizes: strings(&["h1", "h2", "body"]),
        size_properties: strings(&["value", "lineHeight", "fontWeight"]),
        font_weights: strings(&["400", "700"]),
        heading_order: strings(&["h1", "h2"]),
        ..TypographyRules::default()
    };
    let typography = json!({
        "fontFamily": {"heading": "Inter"},
        "fontSize": {
            "h1": {"value": "2rem", "lineHeight": "1.2", "fontWeight": "700"},
            "h2": {"value": "2.5rem", "lineHeight": "2", "fontWeight": 700},
            "body": {"value": "0.8125rem", "lineHeight": "1.5", "fontWeight": "450"}
        }
    });

    let report = check_typography(&typography, &rules, ValidationReport::new());

    assert_eq!(report.passed, 8);
    assert_eq!(
        report.errors,
        strings(&[
            "Missing font family: body",
            "Body text size (0.8125rem = 13.0px) is too small for accessibility",
            "body: font-weight 450 is invalid",
            "h1 (2rem) should be larger than h2 (2.5rem)",
        ])
    );
    assert_eq!(
        report.warnings,
        strings(&["h2: line-height 2 is outside recommended range (1.2-1.8)"])
    );
}

#[test]
fn typography_without_font_sizes_stops_early() {
    let typography = json!({"fontFamily": {"heading": "Inter", "body": "Inter", "mono": "Mono"}});
    let report = check_typography(&typography, &TypographyRules::default(), ValidationReport::new());
    assert_eq!(report.passed, 3);
    assert_eq!(report.errors, strings(&["Missing \"fontSize\" section"]));
}

#[test]
fn spacing_enforces_scale_grid_and_shadow_syntax() {
    let rules = SpacingRules {
        spacing: pairs(&[("0", "0px"), ("1", "4px"), ("2", "8px")]),
        grid_px: 4,
        border_radius: pairs(&[("sm", "2px")]),
        box_shadow: pairs(&[("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.04)")]),
    };
    let spacing = json!({"spacing": {"0": "0px", "1": "4px", "2": "10px", "3": "6px"}});
    let borders = json!({"borderRadius": {"sm": "2px"}});
    let shadows = json!({"boxShadow": {
        "sm": "0 1px 2px 0 rgba(0, 0, 0, 0.04)",
        "glow": "0 0 4px red"
    }});

    let report = check_spacing(&spacing, &borders, &shadows, &rules, ValidationReport::new());

    assert_eq!(report.passed, 6);
    assert_eq!(
        report.errors,
        strings(&[
            "spacing.2 should be \"8px\" but got \"10px\"",
            "spacing.2 = 10px does not follow 4px grid system",
            "spacing.3 = 6px does not follow 4px grid system",
            "boxShadow.glow has invalid CSS shadow syntax: 0 0 4px red",
        ])
    );
}

#[test]
fn missing_border_radius_section_fails_once() {
    let report = check_border_radius(&json!({}), &SpacingRules::default(), ValidationReport::new());
    assert_eq!(report.failed, 1);
    assert_eq!(report.errors, strings(&["Missing \"borderRadius\" section"]));
}

fn conforming_animations() -> serde_json::Value {
    json!({
        "transitionDuration": {"fast": "120ms", "normal": "220ms", "slow": "420ms"},
        "transitionTimingFunction": {
            "default": "cubic-bezier(0.4, 0, 0.2, 1)",
            "in": "cubic-bezier(0.4, 0, 1, 1)",
            "out": "cubic-bezier(0, 0, 0.2, 1)",
            "inOut": "cubic-bezier(0.4, 0, 0.2, 1)",
            "spring": "cubic-bezier(0.22, 1, 0.36, 1)"
        },
        "transitionProperty": {
            "colors": "color, background-color, border-color",
            "opacity": "opacity",
            "shadow": "box-shadow",
            "transform": "transform",
            "all": "all"
        }
    })
}

const ANIMATIONS_CSS: &str = "
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
@keyframes fadeOut { from { opacity: 1; } to { opacity: 0; } }
@keyframes slideUp { from { transform: translateY(8px); } }
@keyframes slideDown { from { transform: translateY(-8px); } }
@keyframes scaleIn { from { transform: scale(0.96); } }
@media (prefers-reduced-motion: reduce) { * { animation: none !important; } }
";

#[test]
fn conforming_animations_pass() {
    let report = check_animations(
        &conforming_animations(),
        Some(ANIMATIONS_CSS),
        &AnimationRules::default(),
        ValidationReport::new(),
    );
    assert!(report.is_success(), "{:?}", report.errors);
    assert_eq!(report.passed, 24);
}

#[test]
fn animations_flag_bad_easing_and_missing_stylesheet() {
    let mut animations = conforming_animations();
    animations["transitionTimingFunction"]["spring"] = json!("ease-in");

    let report = check_animations(
        &animations,
        None,
        &AnimationRules::default(),
        ValidationReport::new(),
    );

    assert_eq!(
        report.errors,
        strings(&[
            "transitionTimingFunction.spring should be \"cubic-bezier(0.22, 1, 0.36, 1)\" but got \"ease-in\"",
            "transitionTimingFunction.spring has invalid cubic-bezier format: ease-in",
            "Missing animations.css stylesheet",
        ])
    );
}

#[test]
fn animations_require_each_keyframe() {
    let css = "@keyframes fadeIn {}\n@media (prefers-reduced-motion: reduce) {}";
    let report = check_animations(
        &conforming_animations(),
        Some(css),
        &AnimationRules::default(),
        ValidationReport::new(),
    );
    assert_eq!(report.failed, 4);
    assert!(report
        .errors
        .contains(&"Missing @keyframes scaleIn in animations.css".to_string()));
}

fn button_rules() -> StateRules {
    StateRules {
        components: vec![ComponentStates {
            name: "button".to_string(),
            states: strings(&["default", "hover"]),
        }],
        color_properties: strings(&["background", "foreground", "border"]),
        transitions: strings(&["fast"]),
        easings: strings(&["default"]),
        ..StateRules::default()
    }
}

#[test]
fn states_check_focus_ring_modes_and_motion() {
    let states = json!({
        "focusRing": {
            "width": "2px",
            "offset": "2px",
            "color": {"light": "#60A5FA", "dark": "#60A5FA"}
        },
        "button": {
            "default": {
                "light": {"background": "#2563EB", "foreground": "#FFFFFF"},
                "dark": {"background": "#60A5FA", "foreground": "#0a0a0a"}
            },
            "hover": {
                "light": {"background": "transparent", "foreground": "#3B82F6", "border": "blue"}
            }
        },
        "transition": {"fast": "0.12s"},
        "easing": {"default": "cubic-bezier(0.4, 0, 0.2, 1)"}
    });

    let report = check_states(&states, &button_rules(), ValidationReport::new());

    assert_eq!(report.passed, 14);
    assert_eq!(
        report.errors,
        strings(&[
            "Invalid border color for button.hover.light: blue",
            "Missing dark mode for button.hover",
            "Invalid transition.fast format: 0.12s",
        ])
    );
    assert_eq!(
        report.warnings,
        strings(&["Focus ring light color has low contrast (2.54:1) on white background"])
    );
}

#[test]
fn low_state_contrast_is_a_warning() {
    let rules = StateRules {
        components: vec![ComponentStates {
            name: "link".to_string(),
            states: strings(&["default"]),
        }],
        ..button_rules()
    };
    let states = json!({
        "focusRing": {"width": "2px", "offset": "2px", "color": {"light": "#2563EB", "dark": "#60A5FA"}},
        "link": {"default": {
            "light": {"foreground": "#3B82F6", "background": "#FFFFFF"},
            "dark": {"foreground": "#60A5FA", "background": "#0a0a0a"}
        }},
        "transition": {"fast": "120ms"},
        "easing": {"default": "cubic-bezier(0.4, 0, 0.2, 1)"}
    });

    let report = check_states(&states, &rules, ValidationReport::new());

    assert!(report.is_success(), "{:?}", report.errors);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].starts_with("Low contrast (3.68:1) for link.default.light"));
}

#[test]
fn empty_states_document_reports_each_section() {
    let report = check_states(&json!({}), &button_rules(), ValidationReport::new());
    assert_eq!(
        report.errors,
        strings(&[
            "Missing focusRing configuration",
            "Missing button state configuration",
            "Missing transition configuration",
            "Missing easing configuration",
        ])
    );
    assert_eq!(report.passed, 0);
}

const TAILWIND_CONFIG: &str = "import responsive from './src/styles/tokens/responsive.json'

export default {
  theme: {
    screens: responsive.breakpoints,
    container: {
      center: true,
    },
  },
}
";

#[test]
fn conforming_responsive_tokens_pass() {
    let responsive = json!({
        "breakpoints": {"sm": "480px", "md": "768px", "lg": "1024px", "xl": "1280px"},
        "container": {
            "maxWidth": {"sm": "100%", "md": "720px", "lg": "960px", "xl": "1140px"},
            "padding": {"default": "24px", "sm": "16px", "md": "24px", "lg": "32px", "xl": "40px"}
        }
    });
    let spacing = json!({"spacing": {"4": "16px", "6": "24px", "8": "32px", "10": "40px"}});

    let report = check_responsive(
        &responsive,
        &spacing,
        Some(TAILWIND_CONFIG),
        &ResponsiveRules::default(),
        ValidationReport::new(),
    );

    assert!(report.is_success(), "{:?}", report.errors);
    assert_eq!(report.passed, 28);
}

#[test]
fn breakpoints_must_grow_and_config_must_exist() {
    let responsive = json!({"breakpoints": {"sm": "480px", "md": "400px"}});

    let report = check_responsive(
        &responsive,
        &json!({}),
        None,
        &ResponsiveRules::default(),
        ValidationReport::new(),
    );

    for expected in [
        "breakpoints.md should be \"768px\" but got \"400px\"",
        "Missing breakpoints.lg",
        "Breakpoint md (400px) should be larger than sm (480px)",
        "Missing \"container.maxWidth\" section",
        "Missing \"container.padding\" section",
        "tailwind.config.js not found",
        "Minimum padding (container.padding.sm) should be at least 16px",
    ] {
        assert!(
            report.errors.contains(&expected.to_string()),
            "missing {expected:?} in {:?}",
            report.errors
        );
    }
}

#[test]
fn container_padding_must_come_from_spacing_scale() {
    let rules = ResponsiveRules {
        breakpoints: vec![],
        max_widths: vec![],
        padding: vec![],
        tailwind_markers: vec![],
        ..ResponsiveRules::default()
    };
    let responsive = json!({
        "breakpoints": {},
        "container": {"maxWidth": {"xl": "1280px"}, "padding": {"sm": "18px"}}
    });
    let spacing = json!({"spacing": {"4": "16px"}});

    let report = check_responsive(&responsive, &spacing, Some(""), &rules, ValidationReport::new());

    assert_eq!(
        report.errors,
        strings(&[
            "container.padding.sm (18px) does not align with spacing system",
            "container.maxWidth.xl (1280px) exceeds recommended 1140px limit for readability",
        ])
    );
    assert_eq!(report.passed, 1);
}

#[test]
fn mapping_folds_reference_issues_into_report() {
    let primitives = json!({"color": {"blue": {"500": "#3B82F6"}}});
    let aliases = json!({"brand": {
        "primary": {"_ref": "primitive.color.blue.500", "_value": "#3B82F6"},
        "broken": {"_ref": "primitive.color.red.500"}
    }});
    let semantic = json!({"button": {"bg": {"_ref": "alias.brand.primary", "_value": "#000000"}}});

    let report = check_token_mapping(&primitives, &aliases, &semantic, ValidationReport::new());

    assert_eq!(report.passed, 2);
    assert_eq!(
        report.errors,
        strings(&["[ALIAS] brand.broken: references non-existent primitive: primitive.color.red.500"])
    );
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].starts_with("[SEMANTIC] button.bg: cached _value"));
    assert!(!report.is_success());
}

#[test]
fn rules_config_overrides_only_named_sections() {
    let config = RulesConfig::from_json(r#"{"spacing": {"gridPx": 8}}"#).unwrap();
    assert_eq!(config.spacing.grid_px, 8);
    assert_eq!(config.spacing.spacing, SpacingRules::default().spacing);
    assert_eq!(config.animations, AnimationRules::default());
}
