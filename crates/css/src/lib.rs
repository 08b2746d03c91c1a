pub mod emit;

// Re-export main types
pub use emit::{media_max_width, media_width_range, RuleSet};
