pub mod buttons;
pub mod stacking;
pub mod sticky;
pub mod templates;
pub mod toolkit;
pub mod vw;

// Re-export main types
pub use buttons::form_button_css;
pub use stacking::stacking_order_css;
pub use sticky::sticky_header_css;
pub use templates::{order_saved_templates, SavedTemplate};
pub use toolkit::{InlineStyle, Toolkit};
pub use vw::apply_true_vw;
