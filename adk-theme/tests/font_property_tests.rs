//! Property tests for font name normalization and family resolution.

use adk_theme::{normalize_font_name, resolve_font_families};
use indexmap::IndexMap;
use proptest::prelude::*;

fn arb_family_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z][a-z]{2,8}", 1..4)
}

fn arb_modifiers() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("wght@400".to_string()),
            Just("wght@400;700".to_string()),
            Just("ital,wght@0,400;1,700".to_string()),
            "[a-z]{3,6}@[0-9]{3}".prop_map(|s| s),
        ],
        0..3,
    )
}

proptest! {
    #[test]
    fn prop_normalize_recovers_family(words in arb_family_words(), modifiers in arb_modifiers()) {
        let mut raw = words.join("+");
        for modifier in &modifiers {
            raw.push(':');
            raw.push_str(modifier);
        }
        prop_assert_eq!(normalize_font_name(&raw), words.join(" "));
    }

    #[test]
    fn prop_type_keys_never_become_families(
        keys in prop::collection::btree_set("[a-z]{3,8}", 1..6),
        words in arb_family_words(),
    ) {
        let mut raw = IndexMap::new();
        for key in &keys {
            raw.insert(key.clone(), words.join("+"));
            raw.insert(format!("{key}_type"), "monospace".to_string());
        }
        let families = resolve_font_families(&raw);
        prop_assert_eq!(families.len(), keys.len());
        for (key, value) in &families {
            prop_assert!(!key.ends_with("_type"));
            prop_assert_eq!(value, &format!("{}, monospace", words.join(" ")));
        }
    }
}

#[test]
fn test_normalize_documented_example() {
    assert_eq!(normalize_font_name("Open+Sans:wght@400;700"), "Open Sans");
}
