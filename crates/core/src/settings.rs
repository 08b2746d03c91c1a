use serde::{Deserialize, Serialize};

/// A length with its unit, the shape the builder stores typography fields in.
///
/// Either part may be empty. `to_css` concatenates blindly; an absent length
/// leaves a bare unit (`"px"`), which the emitter later drops as a
/// placeholder instead of producing an invalid declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitValue {
    pub length: String,
    pub unit: String,
}

impl UnitValue {
    pub fn new(length: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            length: length.into(),
            unit: unit.into(),
        }
    }

    pub fn to_css(&self) -> String {
        format!("{}{}", self.length, self.unit)
    }
}

/// Per-side border widths (pixel magnitudes without the unit).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sides {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
}

/// Per-corner border radii (pixel magnitudes without the unit).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Corners {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
}

/// One tier's button border configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSettings {
    /// Hex color without the leading `#`.
    pub color: String,
    pub style: String,
    pub width: Sides,
    pub radius: Corners,
}

/// One tier's button typography configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographySettings {
    pub font_family: String,
    pub font_weight: String,
    pub font_size: UnitValue,
    pub line_height: UnitValue,
    pub letter_spacing: UnitValue,
    pub text_transform: String,
}

/// The theme-wide global style snapshot the builder supplies.
///
/// Every field defaults: an absent field and an empty field behave
/// identically downstream (both end up as skipped declarations). The
/// snapshot is read-only input; nothing here is cached or persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalStyleSettings {
    pub button_color: String,
    pub button_hover_color: String,
    pub button_background: String,
    pub button_hover_background: String,
    pub button_border_hover_color: String,

    pub button_border: BorderSettings,
    pub button_border_large: BorderSettings,
    pub button_border_medium: BorderSettings,
    pub button_border_responsive: BorderSettings,

    pub button_typography: TypographySettings,
    pub button_typography_large: TypographySettings,
    pub button_typography_medium: TypographySettings,
    pub button_typography_responsive: TypographySettings,
}

impl GlobalStyleSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn border(&self, tier: Tier) -> &BorderSettings {
        match tier {
            Tier::Base => &self.button_border,
            Tier::Large => &self.button_border_large,
            Tier::Medium => &self.button_border_medium,
            Tier::Responsive => &self.button_border_responsive,
        }
    }

    pub fn typography(&self, tier: Tier) -> &TypographySettings {
        match tier {
            Tier::Base => &self.button_typography,
            Tier::Large => &self.button_typography_large,
            Tier::Medium => &self.button_typography_medium,
            Tier::Responsive => &self.button_typography_responsive,
        }
    }
}

/// Breakpoint table from the builder's global settings, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub large: u32,
    pub medium: u32,
    pub responsive: u32,
}

/// Responsive scope for a style block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Unconditional styles, no media query.
    Base,
    Large,
    Medium,
    Responsive,
}

impl Tier {
    /// Emission order for the scoped blocks.
    ///
    /// Fixed Large → Medium → Responsive regardless of the numeric
    /// breakpoint values: under equal specificity the narrower block has to
    /// appear later in the stylesheet to win.
    pub const SCOPED: [Tier; 3] = [Tier::Large, Tier::Medium, Tier::Responsive];

    /// The max-width threshold for this tier, `None` for `Base`.
    pub fn max_width(self, breakpoints: &Breakpoints) -> Option<u32> {
        match self {
            Tier::Base => None,
            Tier::Large => Some(breakpoints.large),
            Tier::Medium => Some(breakpoints.medium),
            Tier::Responsive => Some(breakpoints.responsive),
        }
    }
}
