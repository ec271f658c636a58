//! Registration with a class-generation host.
//!
//! Derivation is pure; handing the bundle to a host is the only step with
//! side effects. The host sees the same three calls a CSS framework plugin
//! API offers: base variables per selector, literal utility classes, and
//! parameterized utility families over a value table.

use tracing::{debug, info_span};

use crate::bundle::TokenBundle;
use crate::utility::{UtilityClass, UtilityFamilySet};
use crate::{Declarations, VariableMap};

/// Selector the base variables are applied to by default.
pub const DEFAULT_ROOT_SELECTOR: &str = ":root";

/// Selector the dark mode overrides are applied to by default.
pub const DEFAULT_DARK_SELECTOR: &str = ".dark";

/// The capabilities a class-generation host exposes to the theme.
pub trait HostCapabilities {
    /// Apply variables under a selector.
    fn add_base(&mut self, selector: &str, variables: &VariableMap);

    /// Register literal utility classes.
    fn add_utilities(&mut self, classes: &[UtilityClass]);

    /// Register parameterized utility families resolved through a value table.
    fn match_utilities(&mut self, set: &UtilityFamilySet);
}

/// Where the variable layers are attached.
#[derive(Debug, Clone)]
pub struct RegistrationOptions {
    pub root_selector: String,
    pub dark_selector: String,
}

impl Default for RegistrationOptions {
    fn default() -> Self {
        Self {
            root_selector: DEFAULT_ROOT_SELECTOR.to_string(),
            dark_selector: DEFAULT_DARK_SELECTOR.to_string(),
        }
    }
}

impl RegistrationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach base variables to a different selector.
    pub fn with_root_selector(mut self, selector: impl Into<String>) -> Self {
        self.root_selector = selector.into();
        self
    }

    /// Attach dark overrides to a different selector (e.g. `[data-theme=dark]`).
    pub fn with_dark_selector(mut self, selector: impl Into<String>) -> Self {
        self.dark_selector = selector.into();
        self
    }
}

/// Register a bundle with default selectors.
pub fn register_with_host<H: HostCapabilities + ?Sized>(bundle: &TokenBundle, host: &mut H) {
    register_with_options(bundle, host, &RegistrationOptions::default());
}

/// Register a bundle: root variables, dark overrides, font utilities, color
/// families, then gradient families.
pub fn register_with_options<H: HostCapabilities + ?Sized>(
    bundle: &TokenBundle,
    host: &mut H,
    options: &RegistrationOptions,
) {
    let span = info_span!(
        "adk.theme.register",
        root = %options.root_selector,
        dark = %options.dark_selector
    );
    let _enter = span.enter();

    debug!(selector = %options.root_selector, variables = bundle.base_variables.len(), "add base");
    host.add_base(&options.root_selector, &bundle.base_variables);
    debug!(selector = %options.dark_selector, variables = bundle.dark_variables.len(), "add base");
    host.add_base(&options.dark_selector, &bundle.dark_variables);

    debug!(classes = bundle.font_utilities.len(), "add font utilities");
    host.add_utilities(&bundle.font_utilities);

    for set in [bundle.color_utilities(), bundle.gradient_utilities()] {
        debug!(
            families = set.families.len(),
            values = set.values.len(),
            value_type = %set.value_type,
            "match utilities"
        );
        host.match_utilities(&set);
    }
}

/// In-memory host that records registrations and expands matched families
/// into concrete classes.
#[derive(Debug, Default, Clone)]
pub struct StyleRegistry {
    base: Vec<(String, VariableMap)>,
    classes: Vec<UtilityClass>,
    family_prefixes: Vec<&'static str>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variable layers in registration order.
    pub fn base_layers(&self) -> &[(String, VariableMap)] {
        &self.base
    }

    /// Variables registered for a selector, merged in registration order.
    pub fn variables_for(&self, selector: &str) -> VariableMap {
        let mut merged = VariableMap::new();
        for (_, vars) in self.base.iter().filter(|(registered, _)| registered == selector) {
            merged.extend(vars.iter().map(|(name, value)| (name.clone(), value.clone())));
        }
        merged
    }

    /// Literal and expanded classes in stylesheet order.
    pub fn classes(&self) -> &[UtilityClass] {
        &self.classes
    }

    pub fn class(&self, selector: &str) -> Option<&UtilityClass> {
        self.classes.iter().find(|class| class.selector == selector)
    }

    /// Prefixes of every matched family in registration order.
    pub fn family_prefixes(&self) -> &[&'static str] {
        &self.family_prefixes
    }

    /// Declarations an element carrying `class_names` (without the leading
    /// dot) ends up with. Rules apply in stylesheet order, later rules win.
    pub fn computed(&self, class_names: &[&str]) -> Declarations {
        let mut computed = Declarations::new();
        for class in &self.classes {
            let name = class.selector.strip_prefix('.').unwrap_or(&class.selector);
            if class_names.contains(&name) {
                computed.extend(class.declarations.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        computed
    }
}

impl HostCapabilities for StyleRegistry {
    fn add_base(&mut self, selector: &str, variables: &VariableMap) {
        self.base.push((selector.to_string(), variables.clone()));
    }

    fn add_utilities(&mut self, classes: &[UtilityClass]) {
        self.classes.extend_from_slice(classes);
    }

    fn match_utilities(&mut self, set: &UtilityFamilySet) {
        self.family_prefixes.extend(set.families.iter().map(|family| family.prefix));
        self.classes.extend(set.expand());
    }
}
