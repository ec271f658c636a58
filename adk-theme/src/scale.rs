//! Typographic scale.
//!
//! Heading sizes grow geometrically: `h6` is `scale` rem, each level above
//! multiplies by `scale` again, so `h1` is `scale^6` rem. Every level has a
//! `-sm` companion at 90%. The body size is kept in pixels with an 80%
//! `base-sm` companion.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::description::{DEFAULT_BASE_SIZE, DEFAULT_SCALE};

const HEADING_SM_RATIO: f64 = 0.9;
const BASE_SM_RATIO: f64 = 0.8;

/// Unit a [`FontSize`] is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Rem,
    Px,
}

impl SizeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rem => "rem",
            Self::Px => "px",
        }
    }
}

/// A single size token, rendered as `<value><unit>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSize {
    pub value: f64,
    pub unit: SizeUnit,
}

impl FontSize {
    pub fn rem(value: f64) -> Self {
        Self { value, unit: SizeUnit::Rem }
    }

    pub fn px(value: f64) -> Self {
        Self { value, unit: SizeUnit::Px }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", css_number(self.value), self.unit.as_str())
    }
}

impl Serialize for FontSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Render a number like ECMAScript `Number::toString`: shortest round-trip
/// digits, no trailing `.0`, no negative zero, and exponent notation
/// (`1e+21`, `1.5e-7`) for magnitudes at or above `1e21` or below `1e-6`.
pub(crate) fn css_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if value == 0.0 {
        "0".to_string()
    } else if !(1e-6..1e21).contains(&value.abs()) {
        let exp = format!("{value:e}");
        match exp.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exp,
        }
    } else {
        value.to_string()
    }
}

/// Ordered size key (`h6`, `h6-sm`, ..., `h1-sm`, `base`, `base-sm`) to size.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FontSizeScale {
    sizes: IndexMap<String, FontSize>,
}

impl FontSizeScale {
    /// Compute the scale for a pixel `base` and a heading `ratio`.
    ///
    /// Inputs are not validated; zero or negative values simply flow through
    /// the arithmetic.
    pub fn calculate(base: f64, ratio: f64) -> Self {
        let mut sizes = IndexMap::with_capacity(14);
        let mut current = ratio;

        for level in (1..=6).rev() {
            sizes.insert(format!("h{level}"), FontSize::rem(current));
            sizes.insert(format!("h{level}-sm"), FontSize::rem(current * HEADING_SM_RATIO));
            current *= ratio;
        }

        sizes.insert("base".to_string(), FontSize::px(base));
        sizes.insert("base-sm".to_string(), FontSize::px(base * BASE_SM_RATIO));

        Self { sizes }
    }

    pub fn get(&self, key: &str) -> Option<FontSize> {
        self.sizes.get(key).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sizes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FontSize)> {
        self.sizes.iter().map(|(key, size)| (key.as_str(), *size))
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl Default for FontSizeScale {
    fn default() -> Self {
        Self::calculate(DEFAULT_BASE_SIZE, DEFAULT_SCALE)
    }
}
