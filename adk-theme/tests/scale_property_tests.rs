//! Property tests for the typographic scale.
//!
//! For any positive base and ratio the scale has six heading levels, every
//! `-sm` variant is 90% of its heading, `base-sm` is 80% of `base`, and for
//! ratios above one the headings grow strictly from `h6` to `h1`.

use adk_theme::{FontSizeScale, SizeUnit};
use proptest::prelude::*;

fn arb_base() -> impl Strategy<Value = f64> {
    prop_oneof![Just(16.0), Just(14.0), Just(18.0), 1.0f64..64.0]
}

fn arb_ratio() -> impl Strategy<Value = f64> {
    prop_oneof![Just(1.125), Just(1.2), Just(1.25), Just(1.333), Just(1.618), 1.001f64..2.0]
}

proptest! {
    #[test]
    fn prop_headings_grow_towards_h1(base in arb_base(), ratio in arb_ratio()) {
        let scale = FontSizeScale::calculate(base, ratio);
        for level in 1..6 {
            let larger = scale.get(&format!("h{level}")).unwrap();
            let smaller = scale.get(&format!("h{}", level + 1)).unwrap();
            prop_assert!(larger.value > smaller.value, "h{} <= h{}", level, level + 1);
        }
        prop_assert_eq!(scale.get("h6").unwrap().value, ratio);
    }

    #[test]
    fn prop_small_variants_are_scaled(base in arb_base(), ratio in arb_ratio()) {
        let scale = FontSizeScale::calculate(base, ratio);
        for level in 1..=6 {
            let heading = scale.get(&format!("h{level}")).unwrap();
            let small = scale.get(&format!("h{level}-sm")).unwrap();
            prop_assert_eq!(small.value, heading.value * 0.9);
            prop_assert_eq!(small.unit, SizeUnit::Rem);
        }
        let body = scale.get("base").unwrap();
        let body_sm = scale.get("base-sm").unwrap();
        prop_assert_eq!(body.value, base);
        prop_assert_eq!(body_sm.value, base * 0.8);
        prop_assert_eq!(body_sm.unit, SizeUnit::Px);
    }

    #[test]
    fn prop_rendered_values_round_trip(base in arb_base(), ratio in arb_ratio()) {
        let scale = FontSizeScale::calculate(base, ratio);
        prop_assert_eq!(scale.len(), 14);
        for (key, size) in scale.iter() {
            let rendered = size.to_string();
            let number = rendered.trim_end_matches(size.unit.as_str());
            prop_assert_eq!(number.parse::<f64>().unwrap(), size.value, "{}", key);
        }
    }

    #[test]
    fn prop_calculation_is_deterministic(base in arb_base(), ratio in arb_ratio()) {
        prop_assert_eq!(
            FontSizeScale::calculate(base, ratio),
            FontSizeScale::calculate(base, ratio)
        );
    }
}
