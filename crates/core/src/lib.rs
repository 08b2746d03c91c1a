pub mod config;
pub mod settings;
pub mod types;

// Re-export commonly used types
pub use config::{ConfigError, SavedRowsOrder, ToolkitOptions};
pub use settings::{
    BorderSettings, Breakpoints, Corners, GlobalStyleSettings, Sides, Tier, TypographySettings,
    UnitValue,
};
pub use types::CssRule;
