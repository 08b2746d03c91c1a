//! Sticky header on small viewports.

use bbkit_css::media_max_width;

// Literal block rather than a `RuleSet`: the legacy `-webkit-sticky`
// fallback needs `position` declared twice under one selector.
const STICKY_BLOCK: &str = concat!(
    "header.fl-builder-content[data-type=header] {",
    "z-index: 999;",
    "min-width: 100%;",
    "width: 100%;",
    "position: -webkit-sticky;",
    "position: sticky;",
    "top: 0;",
    "}"
);

/// Pins the builder's header layout to the top of the viewport below the
/// responsive breakpoint.
pub fn sticky_header_css(responsive_breakpoint: u32) -> String {
    media_max_width(responsive_breakpoint, STICKY_BLOCK)
}
