use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordering applied to the builder's saved rows/modules listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavedRowsOrder {
    /// Leave the host's ordering alone.
    #[default]
    Default,
    DateAsc,
    DateDesc,
}

/// Toolkit feature toggles.
///
/// Parsed once at the host boundary; the transforms only ever see this typed
/// structure, never raw option keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitOptions {
    /// Emit pure vw font sizes instead of the builder's calc() blend.
    pub true_vw: bool,
    /// Apply the theme's global button styles to Gravity Forms.
    pub gravity_forms_global_styles: bool,
    /// Keep the header stuck to the top on small viewports.
    pub sticky_header: bool,
    /// Reverse column stacking order on medium viewports.
    pub medium_stacking_order: bool,
    /// Open new posts in the builder instead of the stock editor.
    pub default_editor: bool,
    pub order_saved_rows: SavedRowsOrder,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid toolkit options: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ToolkitOptions {
    /// Loads options from the host's JSON blob.
    ///
    /// Missing keys fall back to their defaults (everything off); an
    /// unrecognized `order_saved_rows` value is an error rather than a
    /// silent fallback, so misconfiguration surfaces at load time.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
