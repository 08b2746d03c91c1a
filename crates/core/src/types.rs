use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A style rule as the host builder hands it over.
///
/// Property values stay raw JSON: the builder mixes strings, numbers and
/// nested structures in `props`, and everything we do not rewrite must pass
/// through verbatim. `IndexMap` keeps declaration order, which the cascade
/// depends on when shorthand and longhand properties compete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssRule {
    pub selector: String,
    #[serde(default)]
    pub props: IndexMap<String, Value>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            props: IndexMap::new(),
        }
    }

    /// Writes a string-valued property (test and builder convenience).
    pub fn with_prop(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.props
            .insert(property.into(), Value::String(value.into()));
        self
    }
}
