//! Pure-vw font sizes.
//!
//! For vw-based font sizes the builder emits a `calc(<base>px + <number>vw)`
//! blend so text never shrinks below the base size. With the toggle on we
//! strip the blend down to the bare vw term.

use bbkit_core::CssRule;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// The builder's vw blend. The vw number may carry a leading dot (`.5vw`);
/// the captured group is reused verbatim, no normalization.
static CALC_VW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"calc\((\d+)px \+ ((\d+(\.\d*)?)|(\.\d+))vw\)").unwrap());

/// Rewrites `font-size` declarations in the builder's pre-render rule list.
///
/// Disabled is an exact pass-through of the input vector. Only string-valued
/// `font-size` props containing `"vw"` are touched; every occurrence of the
/// blend inside such a value is replaced. Anything else (non-string values,
/// absent props, malformed CSS) passes through verbatim. Best-effort regex,
/// not a CSS parser.
pub fn apply_true_vw(mut rules: Vec<CssRule>, enabled: bool) -> Vec<CssRule> {
    if !enabled {
        return rules;
    }

    for rule in &mut rules {
        let Some(Value::String(size)) = rule.props.get_mut("font-size") else {
            continue;
        };
        if !size.contains("vw") {
            continue;
        }
        *size = CALC_VW.replace_all(size, "${2}vw").into_owned();
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn font_size_rule(value: &str) -> CssRule {
        CssRule::new(".fl-rich-text").with_prop("font-size", value)
    }

    fn font_size_of(rule: &CssRule) -> &str {
        rule.props["font-size"].as_str().unwrap()
    }

    #[test]
    fn test_disabled_is_identity() {
        let rules = vec![font_size_rule("calc(16px + 1.5vw)")];
        let out = apply_true_vw(rules.clone(), false);
        assert_eq!(out, rules);
    }

    #[test]
    fn test_strips_calc_blend() {
        let out = apply_true_vw(vec![font_size_rule("calc(16px + 1.5vw)")], true);
        assert_eq!(font_size_of(&out[0]), "1.5vw");
    }

    #[test]
    fn test_leading_dot_preserved() {
        let out = apply_true_vw(vec![font_size_rule("calc(20px + .5vw)")], true);
        assert_eq!(font_size_of(&out[0]), ".5vw");
    }

    #[test]
    fn test_integer_vw() {
        let out = apply_true_vw(vec![font_size_rule("calc(12px + 2vw)")], true);
        assert_eq!(font_size_of(&out[0]), "2vw");
    }

    #[test]
    fn test_non_vw_value_untouched() {
        let out = apply_true_vw(vec![font_size_rule("16px")], true);
        assert_eq!(font_size_of(&out[0]), "16px");
    }

    #[test]
    fn test_non_string_value_untouched() {
        let mut rule = CssRule::new(".fl-heading");
        rule.props
            .insert("font-size".into(), serde_json::json!(18));

        let out = apply_true_vw(vec![rule.clone()], true);
        assert_eq!(out, vec![rule]);
    }

    #[test]
    fn test_other_props_untouched() {
        let rule = CssRule::new(".fl-heading")
            .with_prop("line-height", "calc(10px + 1vw)")
            .with_prop("font-size", "calc(10px + 1vw)");

        let out = apply_true_vw(vec![rule], true);
        assert_eq!(
            out[0].props["line-height"].as_str().unwrap(),
            "calc(10px + 1vw)"
        );
        assert_eq!(font_size_of(&out[0]), "1vw");
    }

    #[test]
    fn test_malformed_calc_passes_through() {
        let out = apply_true_vw(vec![font_size_rule("calc(1.5vw + 16px)")], true);
        assert_eq!(font_size_of(&out[0]), "calc(1.5vw + 16px)");
    }

    #[test]
    fn test_multiple_occurrences() {
        let out = apply_true_vw(
            vec![font_size_rule("min(calc(10px + 1vw), calc(20px + 2vw))")],
            true,
        );
        assert_eq!(font_size_of(&out[0]), "min(1vw, 2vw)");
    }
}
