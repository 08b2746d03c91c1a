//! CSS text assembly.
//!
//! A `RuleSet` is an ordered selector → declarations map; `to_css` turns it
//! into compact stylesheet text. Declarations whose value is a placeholder,
//! the residue of concatenating a prefix or unit with an empty upstream
//! field, are dropped instead of producing invalid CSS.

use indexmap::IndexMap;
use phf::phf_set;

/// Values that mean "the upstream field was empty": a color prefix with no
/// color, or a unit with no magnitude.
static PLACEHOLDER_VALUES: phf::Set<&'static str> = phf_set! {
    "#",
    "px",
    "px !important",
};

fn is_placeholder(value: &str) -> bool {
    value.is_empty() || PLACEHOLDER_VALUES.contains(value)
}

/// Ordered collection of CSS rules.
///
/// Selectors emit in insertion order, declarations within a selector too.
/// Callers are expected to build rule sets deterministically: two builds of
/// the same logical content produce byte-identical CSS.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: IndexMap<String, IndexMap<String, String>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration under the given selector. Re-declaring a property
    /// overwrites its value but keeps the original position.
    pub fn declare(
        &mut self,
        selector: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.rules
            .entry(selector.into())
            .or_default()
            .insert(property.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Serializes to `selector {prop: value;...}` text.
    ///
    /// Pure string assembly: property names and values are not validated.
    /// Placeholder-valued declarations are skipped; every emitted
    /// declaration is `;`-terminated.
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for (selector, declarations) in &self.rules {
            css.push_str(selector);
            css.push_str(" {");

            for (property, value) in declarations {
                if is_placeholder(value) {
                    continue;
                }
                css.push_str(property);
                css.push_str(": ");
                css.push_str(value);
                css.push(';');
            }

            css.push('}');
        }

        css
    }
}

/// Wraps CSS text in a max-width media query.
pub fn media_max_width(max_px: u32, inner: &str) -> String {
    format!("@media (max-width: {}px) {{{}}}", max_px, inner)
}

/// Wraps CSS text in a bounded min/max-width media query.
pub fn media_width_range(min_px: u32, max_px: u32, inner: &str) -> String {
    format!(
        "@media (min-width: {}px) and (max-width: {}px) {{{}}}",
        min_px, max_px, inner
    )
}
