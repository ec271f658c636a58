//! Font family resolution.
//!
//! Raw font identifiers use the web-font URL form: words joined by `+`,
//! optionally followed by `:axis@values` modifiers
//! (`Open+Sans:wght@400;700`). Resolution turns them into CSS
//! `font-family` values with a generic fallback category.

use indexmap::IndexMap;

/// Suffix marking a fallback-category entry in the raw family map.
pub const TYPE_SUFFIX: &str = "_type";

/// Fallback category used when a family has no `<key>_type` entry.
pub const DEFAULT_FALLBACK: &str = "sans-serif";

/// Ordered family key to CSS `font-family` value.
pub type FontFamilies = IndexMap<String, String>;

/// Clean a raw font identifier into a family name.
///
/// Every `+` becomes a space, then every `:` followed by at least one
/// non-`:` character is dropped together with those characters. A `:` with
/// nothing after it (or directly followed by another `:`) is kept literally.
pub fn normalize_font_name(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut chars = spaced.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek().is_some_and(|next| *next != ':') {
            while chars.next_if(|next| *next != ':').is_some() {}
            continue;
        }
        out.push(c);
    }

    out
}

/// Build the family key to `"<name>, <fallback>"` mapping.
///
/// Keys ending in [`TYPE_SUFFIX`] are metadata and never become families.
/// Output order follows the raw map minus the skipped keys.
pub fn resolve_font_families(raw: &IndexMap<String, String>) -> FontFamilies {
    raw.iter()
        .filter(|(key, _)| !key.ends_with(TYPE_SUFFIX))
        .map(|(key, font)| {
            let fallback = raw
                .get(&format!("{key}{TYPE_SUFFIX}"))
                .map(String::as_str)
                .filter(|category| !category.is_empty())
                .unwrap_or(DEFAULT_FALLBACK);
            (key.clone(), format!("{}, {fallback}", normalize_font_name(font)))
        })
        .collect()
}
