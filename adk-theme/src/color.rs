//! Color variable derivation.
//!
//! Each palette group is flattened into `--color-{prefix}{name}` variables,
//! where `name` has `_` replaced by `-` and `prefix` is empty for the
//! default layer and `darkmode-` for the dark layer.
//!
//! Groups are applied in a fixed order (theme colors, then text colors) and
//! a later group silently overwrites an earlier one on a key collision
//! within the same layer.

use tracing::debug;

use crate::VariableMap;
use crate::description::{ColorMap, ColorPalette, ColorSettings};

/// Variable prefix shared by every color token.
pub const COLOR_VAR_PREFIX: &str = "--color-";

/// Which variable layer a group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayer {
    /// Applied at the root scope.
    Default,
    /// Applied under the dark mode selector, on top of the default layer.
    Dark,
}

impl ColorLayer {
    /// Namespace segment inserted between `--color-` and the color name.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Dark => "darkmode-",
        }
    }

    /// Role name for a raw color key, e.g. `accent_dark` -> `darkmode-accent-dark`.
    pub fn role_name(self, key: &str) -> String {
        format!("{}{}", self.prefix(), css_key(key))
    }

    /// Full variable name for a raw color key.
    pub fn variable_name(self, key: &str) -> String {
        format!("{COLOR_VAR_PREFIX}{}", self.role_name(key))
    }
}

/// Hyphenate a snake_case color name.
pub fn css_key(name: &str) -> String {
    name.replace('_', "-")
}

/// One source color group tagged with its layer.
#[derive(Debug, Clone, Copy)]
pub struct ColorGroup<'a> {
    pub colors: &'a ColorMap,
    pub layer: ColorLayer,
}

impl<'a> ColorGroup<'a> {
    /// Groups of a palette in evaluation order: theme colors, then text colors.
    pub fn from_palette(palette: &'a ColorPalette, layer: ColorLayer) -> [Self; 2] {
        [
            Self { colors: &palette.theme_color, layer },
            Self { colors: &palette.text_color, layer },
        ]
    }
}

/// Every group of a color section in evaluation order: default theme,
/// default text, dark theme, dark text.
pub fn color_groups(colors: &ColorSettings) -> Vec<ColorGroup<'_>> {
    let mut groups = Vec::with_capacity(4);
    groups.extend(ColorGroup::from_palette(&colors.default, ColorLayer::Default));
    groups.extend(ColorGroup::from_palette(&colors.darkmode, ColorLayer::Dark));
    groups
}

/// Flatten groups into a single variable map, last writer wins.
pub fn derive_color_variables<'a>(
    groups: impl IntoIterator<Item = ColorGroup<'a>>,
) -> VariableMap {
    let mut vars = VariableMap::new();
    for group in groups {
        for (name, value) in group.colors {
            let var_name = group.layer.variable_name(name);
            if let Some(previous) = vars.insert(var_name, value.clone()) {
                debug!(
                    color = %name,
                    previous = %previous,
                    value = %value,
                    "color key overwritten by later group"
                );
            }
        }
    }
    vars
}

/// Light and dark color variables derived from a color section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorVariableSet {
    /// `--color-*` variables for the root scope.
    pub light: VariableMap,
    /// `--color-darkmode-*` variables for the dark mode scope.
    pub dark: VariableMap,
}

impl ColorVariableSet {
    pub fn derive(colors: &ColorSettings) -> Self {
        Self {
            light: derive_color_variables(ColorGroup::from_palette(
                &colors.default,
                ColorLayer::Default,
            )),
            dark: derive_color_variables(ColorGroup::from_palette(
                &colors.darkmode,
                ColorLayer::Dark,
            )),
        }
    }
}
