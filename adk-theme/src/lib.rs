//! # adk-theme
//!
//! Design token derivation for ADK-Rust UI themes.
//!
//! ## Overview
//!
//! A declarative theme description (font families, a base size and ratio,
//! default and dark mode palettes) is turned into:
//!
//! - a root variable layer (`--text-*`, `--font-*`, `--color-*`),
//! - a dark mode override layer (`--color-darkmode-*`),
//! - `.font-*` and `.text-*` utility classes referencing those variables,
//! - a color role table driving the `bg`, `text`, `border`, `fill`,
//!   `stroke`, `from`, `via` and `to` utility families.
//!
//! Derivation is a pure function of the description. Registration with a
//! class-generation host is a separate step.
//!
//! ## Quick Start
//!
//! ```rust
//! use adk_theme::{StyleRegistry, ThemeDescription, derive_tokens, register_with_host};
//!
//! let theme = ThemeDescription::from_json_str(r##"{
//!     "fonts": { "font_family": { "primary": "Open+Sans:wght@400;700" } },
//!     "colors": { "default": { "theme_color": { "primary": "#121212" } } }
//! }"##).unwrap();
//!
//! let bundle = derive_tokens(&theme);
//! assert_eq!(bundle.base_variables["--font-primary"], "Open Sans, sans-serif");
//!
//! let mut registry = StyleRegistry::new();
//! register_with_host(&bundle, &mut registry);
//! assert!(registry.class(".bg-primary").is_some());
//! ```

use indexmap::IndexMap;

pub mod bundle;
pub mod color;
pub mod description;
pub mod error;
pub mod font;
pub mod gradient;
pub mod host;
pub mod scale;
pub mod utility;

/// Ordered custom property name to value.
pub type VariableMap = IndexMap<String, String>;

/// Ordered CSS property to value, the body of one rule.
pub type Declarations = IndexMap<String, String>;

pub use bundle::{TokenBundle, derive_tokens};
pub use color::{ColorLayer, ColorVariableSet};
pub use description::{
    ColorPalette, ColorSettings, FontSettings, FontSizeSettings, ThemeDescription,
};
pub use error::{Result, ThemeError};
pub use font::{FontFamilies, normalize_font_name, resolve_font_families};
pub use host::{
    HostCapabilities, RegistrationOptions, StyleRegistry, register_with_host, register_with_options,
};
pub use scale::{FontSize, FontSizeScale, SizeUnit};
pub use utility::{ColorRoleTable, UtilityClass, UtilityFamily, UtilityFamilySet, ValueType};
