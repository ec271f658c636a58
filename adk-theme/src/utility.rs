//! Utility mappings.
//!
//! Joins the font, scale and color derivations into the variable layers and
//! utility definitions a class-generation host consumes. Color utilities
//! never embed literal values: every role resolves to a `var(--color-*)`
//! reference, so overriding the variable (for example under the dark mode
//! selector) restyles every utility built on that role.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::color::{COLOR_VAR_PREFIX, ColorGroup, ColorVariableSet};
use crate::font::FontFamilies;
use crate::scale::FontSizeScale;
use crate::{Declarations, VariableMap};

/// Variable prefix of font size tokens.
pub const TEXT_VAR_PREFIX: &str = "--text-";

/// Variable prefix of font family tokens.
pub const FONT_VAR_PREFIX: &str = "--font-";

/// A literal class with its declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilityClass {
    /// Class selector including the leading dot, e.g. `.font-primary`.
    pub selector: String,
    pub declarations: Declarations,
}

impl UtilityClass {
    pub fn new(selector: impl Into<String>, declarations: Declarations) -> Self {
        Self { selector: selector.into(), declarations }
    }

    fn single(selector: String, property: &str, value: String) -> Self {
        Self::new(selector, Declarations::from([(property.to_string(), value)]))
    }
}

/// Role name to `var(--color-<role>)` reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColorRoleTable {
    roles: IndexMap<String, String>,
}

impl ColorRoleTable {
    /// Build the table from color groups in evaluation order. Both layers
    /// land in one table; dark roles carry the `darkmode-` prefix.
    pub fn from_groups<'a>(groups: impl IntoIterator<Item = ColorGroup<'a>>) -> Self {
        let mut roles = IndexMap::new();
        for group in groups {
            for name in group.colors.keys() {
                let role = group.layer.role_name(name);
                let reference = format!("var({COLOR_VAR_PREFIX}{role})");
                roles.insert(role, reference);
            }
        }
        Self { roles }
    }

    pub fn get(&self, role: &str) -> Option<&str> {
        self.roles.get(role).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roles.iter().map(|(role, reference)| (role.as_str(), reference.as_str()))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Type tag the host uses to resolve arbitrary values for a family set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Color,
}

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Produces the declarations of one utility from a resolved value.
pub type ValueFn = fn(&str) -> Declarations;

/// A parameterized utility family such as `bg-*`.
#[derive(Debug, Clone, Copy)]
pub struct UtilityFamily {
    pub prefix: &'static str,
    pub produce: ValueFn,
}

impl UtilityFamily {
    pub fn new(prefix: &'static str, produce: ValueFn) -> Self {
        Self { prefix, produce }
    }

    pub fn apply(&self, value: &str) -> Declarations {
        (self.produce)(value)
    }

    pub fn selector(&self, role: &str) -> String {
        format!(".{}-{role}", self.prefix)
    }
}

/// Families registered together over one shared value table.
#[derive(Debug, Clone)]
pub struct UtilityFamilySet {
    pub families: Vec<UtilityFamily>,
    pub values: ColorRoleTable,
    pub value_type: ValueType,
}

impl UtilityFamilySet {
    pub fn new(families: Vec<UtilityFamily>, values: ColorRoleTable) -> Self {
        Self { families, values, value_type: ValueType::Color }
    }

    /// One class per (family, role) pair, family-major.
    pub fn expand(&self) -> Vec<UtilityClass> {
        self.families
            .iter()
            .flat_map(|family| {
                self.values.iter().map(|(role, value)| {
                    UtilityClass::new(family.selector(role), family.apply(value))
                })
            })
            .collect()
    }

    /// Number of classes [`expand`](Self::expand) produces.
    pub fn rule_count(&self) -> usize {
        self.families.len() * self.values.len()
    }
}

fn single(property: &str, value: &str) -> Declarations {
    Declarations::from([(property.to_string(), value.to_string())])
}

/// `bg`, `text`, `border`, `fill` and `stroke` color families.
pub fn color_families() -> Vec<UtilityFamily> {
    vec![
        UtilityFamily::new("bg", |value| single("background-color", value)),
        UtilityFamily::new("text", |value| single("color", value)),
        UtilityFamily::new("border", |value| single("border-color", value)),
        UtilityFamily::new("fill", |value| single("fill", value)),
        UtilityFamily::new("stroke", |value| single("stroke", value)),
    ]
}

/// Root scope variables: font sizes, then font families, then default colors.
pub fn base_variables(
    families: &FontFamilies,
    sizes: &FontSizeScale,
    colors: &ColorVariableSet,
) -> VariableMap {
    let mut vars = VariableMap::with_capacity(sizes.len() + families.len() + colors.light.len());
    for (key, size) in sizes.iter() {
        vars.insert(format!("{TEXT_VAR_PREFIX}{key}"), size.to_string());
    }
    for (key, family) in families {
        vars.insert(format!("{FONT_VAR_PREFIX}{key}"), family.clone());
    }
    vars.extend(colors.light.iter().map(|(name, value)| (name.clone(), value.clone())));
    vars
}

/// `.font-{key}` classes for every family, then `.text-{key}` classes for
/// every size, each pointing at its variable.
pub fn font_utilities(families: &FontFamilies, sizes: &FontSizeScale) -> Vec<UtilityClass> {
    let family_classes = families.keys().map(|key| {
        UtilityClass::single(
            format!(".font-{key}"),
            "font-family",
            format!("var({FONT_VAR_PREFIX}{key})"),
        )
    });
    let size_classes = sizes.keys().map(|key| {
        UtilityClass::single(
            format!(".text-{key}"),
            "font-size",
            format!("var({TEXT_VAR_PREFIX}{key})"),
        )
    });
    family_classes.chain(size_classes).collect()
}
