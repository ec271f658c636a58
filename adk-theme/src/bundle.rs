//! Token derivation entry point.

use serde::Serialize;
use tracing::debug;

use crate::VariableMap;
use crate::color::{ColorVariableSet, color_groups};
use crate::description::ThemeDescription;
use crate::font::{FontFamilies, resolve_font_families};
use crate::gradient::gradient_families;
use crate::scale::FontSizeScale;
use crate::utility::{
    ColorRoleTable, UtilityClass, UtilityFamilySet, base_variables, color_families, font_utilities,
};

/// Everything derived from one theme description.
///
/// A bundle is immutable once built; deriving again from the same
/// description yields an equal bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenBundle {
    pub font_families: FontFamilies,
    pub font_sizes: FontSizeScale,
    /// Variables for the root scope: sizes, families and default colors.
    pub base_variables: VariableMap,
    /// Dark mode color overrides. Fonts are not overridden per mode.
    pub dark_variables: VariableMap,
    pub font_utilities: Vec<UtilityClass>,
    pub color_roles: ColorRoleTable,
}

impl TokenBundle {
    /// `bg`, `text`, `border`, `fill` and `stroke` over every color role.
    pub fn color_utilities(&self) -> UtilityFamilySet {
        UtilityFamilySet::new(color_families(), self.color_roles.clone())
    }

    /// `from`, `to` and `via` gradient stops over every color role.
    pub fn gradient_utilities(&self) -> UtilityFamilySet {
        UtilityFamilySet::new(gradient_families(), self.color_roles.clone())
    }
}

/// Derive the full token bundle from a theme description.
pub fn derive_tokens(theme: &ThemeDescription) -> TokenBundle {
    let font_families = resolve_font_families(&theme.fonts.font_family);
    let font_size = &theme.fonts.font_size;
    let font_sizes =
        FontSizeScale::calculate(font_size.base_or_default(), font_size.scale_or_default());
    let colors = ColorVariableSet::derive(&theme.colors);
    let color_roles = ColorRoleTable::from_groups(color_groups(&theme.colors));

    let base_variables = base_variables(&font_families, &font_sizes, &colors);
    let font_utilities = font_utilities(&font_families, &font_sizes);

    debug!(
        families = font_families.len(),
        sizes = font_sizes.len(),
        light_colors = colors.light.len(),
        dark_colors = colors.dark.len(),
        roles = color_roles.len(),
        "derived theme tokens"
    );

    TokenBundle {
        font_families,
        font_sizes,
        base_variables,
        dark_variables: colors.dark,
        font_utilities,
        color_roles,
    }
}
