//! Gravity Forms button theming.
//!
//! Maps the theme's global button styles onto the `--gf-ctrl-btn-*` custom
//! properties Gravity Forms exposes, plus `!important` geometry on the
//! submit button itself (the form theme hardcodes border and font-size, so
//! custom properties alone do not reach them).

use bbkit_core::{BorderSettings, Breakpoints, GlobalStyleSettings, Tier, TypographySettings};
use bbkit_css::{media_max_width, RuleSet};

/// Gravity Forms theme-framework scope.
const THEME_SELECTOR: &str = ".gform-theme.gform-theme--framework";
/// The submit button inside that scope.
const BUTTON_SELECTOR: &str = ".gform-theme.gform-theme--framework .gform_button";

/// Prefixes a raw hex color. An empty field yields the bare `#` placeholder,
/// which emission drops.
fn hex(color: &str) -> String {
    format!("#{}", color)
}

fn px_important(magnitude: &str) -> String {
    format!("{}px !important", magnitude)
}

/// Renders the full Gravity Forms button stylesheet.
///
/// Base rules come first, then one `max-width` block per scoped tier in the
/// fixed order Large → Medium → Responsive. Empty snapshot fields degrade to
/// skipped declarations; this never fails.
pub fn form_button_css(globals: &GlobalStyleSettings, breakpoints: &Breakpoints) -> String {
    let mut css = base_rules(globals).to_css();

    for tier in Tier::SCOPED {
        let block = tier_rules(globals, tier).to_css();
        if let Some(max_width) = tier.max_width(breakpoints) {
            css.push_str(&media_max_width(max_width, &block));
        }
    }

    css
}

/// Unconditional rules: the full custom-property set plus button geometry.
fn base_rules(globals: &GlobalStyleSettings) -> RuleSet {
    let border = globals.border(Tier::Base);
    let typography = globals.typography(Tier::Base);

    // No dedicated hover background configured means the button keeps its
    // normal background on hover.
    let hover_background = if globals.button_hover_background.is_empty() {
        &globals.button_background
    } else {
        &globals.button_hover_background
    };

    let mut rules = RuleSet::new();
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-color-primary",
        hex(&globals.button_color),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-color-hover-primary",
        hex(&globals.button_hover_color),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-bg-color-primary",
        hex(&globals.button_background),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-bg-color-hover-primary",
        hex(hover_background),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-border-color-primary",
        hex(&border.color),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-border-color-hover-primary",
        hex(&globals.button_border_hover_color),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-border-style-primary",
        border.style.as_str(),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-font-family",
        typography.font_family.as_str(),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-font-weight",
        typography.font_weight.as_str(),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-line-height",
        typography.line_height.to_css(),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-letter-spacing",
        typography.letter_spacing.to_css(),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-text-transform",
        typography.text_transform.as_str(),
    );

    button_geometry(&mut rules, border, typography);
    rules
}

/// One scoped tier: the reduced custom-property set plus button geometry.
fn tier_rules(globals: &GlobalStyleSettings, tier: Tier) -> RuleSet {
    let border = globals.border(tier);
    let typography = globals.typography(tier);

    let mut rules = RuleSet::new();
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-border-color-primary",
        hex(&border.color),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-border-style-primary",
        border.style.as_str(),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-line-height",
        typography.line_height.to_css(),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-letter-spacing",
        typography.letter_spacing.to_css(),
    );
    rules.declare(
        THEME_SELECTOR,
        "--gf-ctrl-btn-text-transform",
        typography.text_transform.as_str(),
    );

    button_geometry(&mut rules, border, typography);
    rules
}

/// Border widths, corner radii and font-size on the button element, all
/// `!important` to out-rank the form theme's own rules.
fn button_geometry(rules: &mut RuleSet, border: &BorderSettings, typography: &TypographySettings) {
    rules.declare(
        BUTTON_SELECTOR,
        "border-top-width",
        px_important(&border.width.top),
    );
    rules.declare(
        BUTTON_SELECTOR,
        "border-bottom-width",
        px_important(&border.width.bottom),
    );
    rules.declare(
        BUTTON_SELECTOR,
        "border-left-width",
        px_important(&border.width.left),
    );
    rules.declare(
        BUTTON_SELECTOR,
        "border-right-width",
        px_important(&border.width.right),
    );
    rules.declare(
        BUTTON_SELECTOR,
        "border-top-left-radius",
        px_important(&border.radius.top_left),
    );
    rules.declare(
        BUTTON_SELECTOR,
        "border-top-right-radius",
        px_important(&border.radius.top_right),
    );
    rules.declare(
        BUTTON_SELECTOR,
        "border-bottom-left-radius",
        px_important(&border.radius.bottom_left),
    );
    rules.declare(
        BUTTON_SELECTOR,
        "border-bottom-right-radius",
        px_important(&border.radius.bottom_right),
    );
    // A fully empty font size stays empty rather than becoming a lone
    // " !important"; the bare-unit case is caught by the placeholder skip.
    let font_size = typography.font_size.to_css();
    let font_size = if font_size.is_empty() {
        font_size
    } else {
        format!("{} !important", font_size)
    };
    rules.declare(BUTTON_SELECTOR, "font-size", font_size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbkit_core::UnitValue;
    use pretty_assertions::assert_eq;

    fn breakpoints() -> Breakpoints {
        Breakpoints {
            large: 1200,
            medium: 992,
            responsive: 768,
        }
    }

    #[test]
    fn test_base_custom_properties() {
        let globals = GlobalStyleSettings {
            button_color: "112233".into(),
            button_background: "445566".into(),
            ..Default::default()
        };

        let css = form_button_css(&globals, &breakpoints());
        assert!(css.contains("--gf-ctrl-btn-color-primary: #112233;"));
        assert!(css.contains("--gf-ctrl-btn-bg-color-primary: #445566;"));
    }

    #[test]
    fn test_hover_background_falls_back() {
        let globals = GlobalStyleSettings {
            button_color: "112233".into(),
            button_background: "445566".into(),
            button_hover_background: "".into(),
            ..Default::default()
        };

        let css = form_button_css(&globals, &breakpoints());
        assert!(css.contains("--gf-ctrl-btn-bg-color-hover-primary: #445566;"));
    }

    #[test]
    fn test_hover_background_used_when_set() {
        let globals = GlobalStyleSettings {
            button_background: "445566".into(),
            button_hover_background: "778899".into(),
            ..Default::default()
        };

        let css = form_button_css(&globals, &breakpoints());
        assert!(css.contains("--gf-ctrl-btn-bg-color-hover-primary: #778899;"));
    }

    #[test]
    fn test_empty_fields_are_skipped() {
        let globals = GlobalStyleSettings::default();
        let css = form_button_css(&globals, &breakpoints());

        assert!(!css.contains("--gf-ctrl-btn-color-primary"));
        assert!(!css.contains("border-top-width"));
        assert!(!css.contains("font-size"));
    }

    #[test]
    fn test_tier_blocks_in_fixed_order() {
        // Deliberately inverted numeric values: textual order must not care.
        let bp = Breakpoints {
            large: 500,
            medium: 900,
            responsive: 1300,
        };
        let css = form_button_css(&GlobalStyleSettings::default(), &bp);

        let large = css.find("@media (max-width: 500px)").unwrap();
        let medium = css.find("@media (max-width: 900px)").unwrap();
        let responsive = css.find("@media (max-width: 1300px)").unwrap();
        assert!(large < medium);
        assert!(medium < responsive);
    }

    #[test]
    fn test_tier_geometry_is_scoped() {
        let mut globals = GlobalStyleSettings::default();
        globals.button_border_medium.width.top = "3".into();
        globals.button_typography_medium.font_size = UnitValue::new("15", "px");

        let css = form_button_css(&globals, &breakpoints());
        let medium_block = &css[css.find("@media (max-width: 992px)").unwrap()..];
        let medium_block = &medium_block[..medium_block.find("@media (max-width: 768px)").unwrap()];

        assert!(medium_block.contains("border-top-width: 3px !important;"));
        assert!(medium_block.contains("font-size: 15px !important;"));
        // Nothing leaked into the base segment.
        let base = &css[..css.find("@media").unwrap()];
        assert!(!base.contains("border-top-width"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let globals = GlobalStyleSettings {
            button_color: "abcdef".into(),
            button_typography: TypographySettings {
                font_size: UnitValue::new("18", "px"),
                ..Default::default()
            },
            ..Default::default()
        };

        let bp = breakpoints();
        assert_eq!(
            form_button_css(&globals, &bp),
            form_button_css(&globals, &bp)
        );
    }
}
