//! Reversed column stacking on medium viewports.
//!
//! The builder only honors its "reversed" stacking option on the smallest
//! tier. This block extends it to the band between the responsive and
//! medium breakpoints by flipping flex `order` on each column, legacy
//! box/flex prefixes included.

use bbkit_css::media_width_range;

/// Columns the builder allows per row group.
const COLUMN_COUNT: u32 = 12;

const REVERSED_GROUP_BLOCK: &str = concat!(
    ".fl-col-group.fl-col-group-responsive-reversed {",
    "display: -webkit-box;",
    "display: -moz-box;",
    "display: -ms-flexbox;",
    "display: -moz-flex;",
    "display: -webkit-flex;",
    "display: flex;",
    "flex-flow: row wrap;",
    "-ms-box-orient: horizontal;",
    "-webkit-flex-flow: row wrap;",
    "}",
    ".fl-col-group.fl-col-group-responsive-reversed .fl-col {",
    "-webkit-box-flex: 0 0 100%;",
    "-moz-box-flex: 0 0 100%;",
    "-webkit-flex: 0 0 100%;",
    "-ms-flex: 0 0 100%;",
    "flex: 0 0 100%;",
    "min-width: 0;",
    "}"
);

/// Stacks reversed column groups bottom-up between the responsive and
/// medium breakpoints (exclusive bounds, hence the +1 on each side).
pub fn stacking_order_css(medium_breakpoint: u32, responsive_breakpoint: u32) -> String {
    let mut css = String::from(REVERSED_GROUP_BLOCK);

    for col in 1..=COLUMN_COUNT {
        let order = COLUMN_COUNT + 1 - col;
        css.push_str(&format!(
            ".fl-col-group-responsive-reversed .fl-col:nth-of-type({}) {{",
            col
        ));
        css.push_str(&format!("-webkit-box-ordinal-group: {};", order));
        css.push_str(&format!("-moz-box-ordinal-group: {};", order));
        css.push_str(&format!("-ms-flex-order: {};", order));
        css.push_str(&format!("order: {};", order));
        css.push('}');
    }

    media_width_range(responsive_breakpoint + 1, medium_breakpoint + 1, &css)
}
