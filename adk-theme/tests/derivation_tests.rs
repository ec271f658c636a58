use adk_theme::{ThemeDescription, derive_tokens};
use pretty_assertions::assert_eq;
use serde_json::json;

fn site_theme() -> ThemeDescription {
    ThemeDescription::from_json_value(json!({
        "fonts": {
            "font_family": {
                "primary": "Heebo:wght@400;600",
                "primary_type": "sans-serif",
                "secondary": "Signika:wght@500;700",
                "secondary_type": "serif"
            },
            "font_size": { "base": "16", "scale": "1.2" }
        },
        "colors": {
            "default": {
                "theme_color": {
                    "primary": "#121212",
                    "body": "#fff",
                    "border": "#eaeaea",
                    "theme_light": "#f6f6f6",
                    "theme_dark": ""
                },
                "text_color": {
                    "default": "#444444",
                    "dark": "#040404",
                    "light": "#717171"
                }
            },
            "darkmode": {
                "theme_color": {
                    "primary": "#fff",
                    "body": "#1c1c1c",
                    "border": "#3E3E3E",
                    "theme_light": "#222222",
                    "theme_dark": ""
                },
                "text_color": {
                    "default": "#B4AFB6",
                    "dark": "#fff",
                    "light": "#B4AFB6"
                }
            }
        }
    }))
    .unwrap()
}

#[test]
fn test_empty_theme_uses_defaults() {
    let theme = ThemeDescription::from_json_value(json!({})).unwrap();
    let bundle = derive_tokens(&theme);

    assert!(bundle.font_families.is_empty());
    assert!(bundle.dark_variables.is_empty());
    assert!(bundle.color_roles.is_empty());
    assert_eq!(bundle.font_sizes.get("base").unwrap().to_string(), "16px");
    assert_eq!(bundle.font_sizes.get("h6").unwrap().to_string(), "1.25rem");
    assert!(bundle.base_variables.keys().all(|name| name.starts_with("--text-")));
}

#[test]
fn test_site_theme_variables() {
    let bundle = derive_tokens(&site_theme());

    assert_eq!(bundle.base_variables["--font-primary"], "Heebo, sans-serif");
    assert_eq!(bundle.base_variables["--font-secondary"], "Signika, serif");
    assert_eq!(bundle.base_variables["--color-theme-light"], "#f6f6f6");
    assert_eq!(bundle.base_variables["--color-theme-dark"], "");
    assert_eq!(bundle.base_variables["--color-default"], "#444444");
    assert_eq!(bundle.base_variables["--text-h6"], "1.2rem");
    assert_eq!(bundle.base_variables["--text-base-sm"], "12.8px");
    assert!(!bundle.base_variables.contains_key("--font-primary_type"));

    assert_eq!(bundle.dark_variables.len(), 8);
    assert_eq!(bundle.dark_variables["--color-darkmode-border"], "#3E3E3E");
    assert!(bundle.dark_variables.keys().all(|name| name.starts_with("--color-darkmode-")));
}

#[test]
fn test_light_and_dark_layers_are_disjoint() {
    let bundle = derive_tokens(&site_theme());
    for name in bundle.dark_variables.keys() {
        assert!(!bundle.base_variables.contains_key(name), "{name} leaked into the root layer");
    }
}

#[test]
fn test_role_table_spans_both_layers() {
    let bundle = derive_tokens(&site_theme());

    assert_eq!(bundle.color_roles.len(), 16);
    assert_eq!(bundle.color_roles.get("theme-light"), Some("var(--color-theme-light)"));
    assert_eq!(
        bundle.color_roles.get("darkmode-theme-light"),
        Some("var(--color-darkmode-theme-light)")
    );
    for (role, reference) in bundle.color_roles.iter() {
        assert_eq!(reference, format!("var(--color-{role})"));
    }
}

#[test]
fn test_dark_accent_naming() {
    let theme = ThemeDescription::from_json_value(json!({
        "colors": { "darkmode": { "theme_color": { "accent_dark": "#0a0a0a" } } }
    }))
    .unwrap();
    let bundle = derive_tokens(&theme);
    assert_eq!(bundle.dark_variables["--color-darkmode-accent-dark"], "#0a0a0a");
    assert_eq!(
        bundle.color_roles.get("darkmode-accent-dark"),
        Some("var(--color-darkmode-accent-dark)")
    );
}

#[test]
fn test_text_color_wins_collision() {
    let theme = ThemeDescription::from_json_value(json!({
        "colors": {
            "default": {
                "theme_color": { "primary": "#111111" },
                "text_color": { "primary": "#222222" }
            }
        }
    }))
    .unwrap();
    let bundle = derive_tokens(&theme);

    let primaries: Vec<&String> =
        bundle.base_variables.keys().filter(|name| name.as_str() == "--color-primary").collect();
    assert_eq!(primaries.len(), 1);
    assert_eq!(bundle.base_variables["--color-primary"], "#222222");
    assert_eq!(bundle.color_roles.len(), 1);
}

#[test]
fn test_scalar_color_values_pass_through() {
    let theme = ThemeDescription::from_json_value(json!({
        "colors": { "default": { "theme_color": { "n": 5 } } }
    }))
    .unwrap();
    let bundle = derive_tokens(&theme);
    assert_eq!(bundle.base_variables["--color-n"], "5");
    assert_eq!(bundle.color_roles.get("n"), Some("var(--color-n)"));
}

#[test]
fn test_font_utilities() {
    let bundle = derive_tokens(&site_theme());
    let selectors: Vec<&str> =
        bundle.font_utilities.iter().map(|class| class.selector.as_str()).collect();

    assert_eq!(&selectors[..3], [".font-primary", ".font-secondary", ".text-h6"]);
    assert_eq!(selectors.last(), Some(&".text-base-sm"));
    assert_eq!(bundle.font_utilities.len(), 2 + 14);
    assert_eq!(bundle.font_utilities[1].declarations["font-family"], "var(--font-secondary)");
}

#[test]
fn test_derivation_is_idempotent() {
    let theme = site_theme();
    let first = derive_tokens(&theme);
    let second = derive_tokens(&theme);
    assert_eq!(first, second);
    assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
}

#[test]
fn test_bundle_serializes_to_json() {
    let bundle = derive_tokens(&site_theme());
    let json = serde_json::to_value(&bundle).unwrap();

    assert_eq!(json["font_sizes"]["base"], "16px");
    assert_eq!(json["color_roles"]["primary"], "var(--color-primary)");
    assert_eq!(json["font_utilities"][0]["selector"], ".font-primary");
    assert_eq!(json["dark_variables"]["--color-darkmode-primary"], "#fff");
}

#[test]
fn test_from_reader_matches_from_str() {
    let raw = r##"{"fonts":{"font_family":{"mono":"Fira+Code"}}}"##;
    let from_reader = ThemeDescription::from_reader(raw.as_bytes()).unwrap();
    let from_str = ThemeDescription::from_json_str(raw).unwrap();
    assert_eq!(from_reader, from_str);
    assert_eq!(derive_tokens(&from_reader).font_families["mono"], "Fira Code, sans-serif");
}
