//! Theme description input.
//!
//! A theme description is the declarative document the tokens are derived
//! from. It mirrors the `theme.json` shape used by site themes:
//!
//! ```json
//! {
//!   "fonts": {
//!     "font_family": { "primary": "Open+Sans:wght@400;700", "primary_type": "sans-serif" },
//!     "font_size": { "base": 16, "scale": 1.25 }
//!   },
//!   "colors": {
//!     "default": { "theme_color": { "primary": "#121212" }, "text_color": { "text": "#444" } },
//!     "darkmode": { "theme_color": { "primary": "#fff" }, "text_color": { "text": "#ddd" } }
//!   }
//! }
//! ```
//!
//! Every section is optional. Maps keep the insertion order of the source
//! document; that order decides last-writer-wins outcomes downstream.

use indexmap::IndexMap;
use schemars::JsonSchema;
use schemars::schema::RootSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;

use crate::error::{Result, ThemeError};
use crate::scale::css_number;

/// Default body font size in pixels.
pub const DEFAULT_BASE_SIZE: f64 = 16.0;

/// Default ratio between two consecutive heading levels.
pub const DEFAULT_SCALE: f64 = 1.25;

/// Ordered `snake_case name -> CSS value` map.
pub type ColorMap = IndexMap<String, String>;

/// Root of a theme document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ThemeDescription {
    /// Font families and the typographic scale.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<FontSettings>")]
    pub fonts: FontSettings,

    /// Default and dark mode palettes.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<ColorSettings>")]
    pub colors: ColorSettings,
}

/// The `fonts` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FontSettings {
    /// Family key to raw font string (`Open+Sans:wght@400`), plus optional
    /// `<key>_type` entries naming the fallback category of `<key>`.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<IndexMap<String, String>>")]
    pub font_family: IndexMap<String, String>,

    /// Base size and heading ratio.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<FontSizeSettings>")]
    pub font_size: FontSizeSettings,
}

/// The `fonts.font_size` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FontSizeSettings {
    /// Body size in pixels. Numbers and numeric strings are accepted.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<f64>")]
    pub base: Option<f64>,

    /// Ratio between consecutive heading levels.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<f64>")]
    pub scale: Option<f64>,
}

impl FontSizeSettings {
    /// The configured base size, or [`DEFAULT_BASE_SIZE`].
    pub fn base_or_default(&self) -> f64 {
        self.base.unwrap_or(DEFAULT_BASE_SIZE)
    }

    /// The configured scale, or [`DEFAULT_SCALE`].
    pub fn scale_or_default(&self) -> f64 {
        self.scale.unwrap_or(DEFAULT_SCALE)
    }
}

/// The `colors` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColorSettings {
    /// Palette applied at the root scope.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<ColorPalette>")]
    pub default: ColorPalette,

    /// Palette applied under the dark mode selector.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<ColorPalette>")]
    pub darkmode: ColorPalette,
}

/// A pair of color groups. Absent groups are empty.
///
/// Color values are passed through verbatim. Numbers and booleans are
/// accepted and kept in their JSON text form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColorPalette {
    #[serde(default, deserialize_with = "scalar_color_map")]
    #[schemars(with = "Option<ColorMap>")]
    pub theme_color: ColorMap,

    #[serde(default, deserialize_with = "scalar_color_map")]
    #[schemars(with = "Option<ColorMap>")]
    pub text_color: ColorMap,
}

impl ThemeDescription {
    /// Parse a theme description from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert an already parsed JSON document.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Parse a theme description from any reader.
    ///
    /// Read failures are reported as [`ThemeError::Io`], malformed documents
    /// as [`ThemeError::Parse`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|err| {
            if err.is_io() { ThemeError::Io { source: err.into() } } else { err.into() }
        })
    }

    /// JSON Schema of the accepted document.
    pub fn json_schema() -> RootSchema {
        schemars::schema_for!(ThemeDescription)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn scalar_color_map<'de, D>(deserializer: D) -> std::result::Result<ColorMap, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IndexMap<String, serde_json::Value>>::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(|(name, value)| {
            let text = match value {
                serde_json::Value::String(text) => text,
                serde_json::Value::Number(n) => match n.as_f64() {
                    Some(float) if !(n.is_i64() || n.is_u64()) => css_number(float),
                    _ => n.to_string(),
                },
                serde_json::Value::Bool(flag) => flag.to_string(),
                other => {
                    return Err(D::Error::custom(format!(
                        "color {name:?} must be a string, number or boolean, found {other}"
                    )));
                }
            };
            Ok((name, text))
        })
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberLike>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberLike::Number(n)) => Ok(Some(n)),
        Some(NumberLike::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a number, found {text:?}"))),
    }
}
