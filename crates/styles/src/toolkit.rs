//! The toolkit context.
//!
//! Replaces scattered option lookups with one typed context the host
//! constructs per render. Each method is a well-defined extension point:
//! the pre-render rule filter and the inline-style render step. Everything
//! is synchronous and pure in its explicit inputs.

use bbkit_core::{Breakpoints, CssRule, GlobalStyleSettings, ToolkitOptions};
use serde::Serialize;
use tracing::debug;

use crate::buttons::form_button_css;
use crate::stacking::stacking_order_css;
use crate::sticky::sticky_header_css;
use crate::templates::{order_saved_templates, SavedTemplate};
use crate::vw::apply_true_vw;

pub const STACKING_ORDER_HANDLE: &str = "bbt-stacking-order";
pub const STICKY_HEADER_HANDLE: &str = "bbt-sticky-header";
pub const GRAVITY_FORMS_HANDLE: &str = "bbt-gravity-forms";

/// A rendered inline stylesheet, ready for the host to inject.
///
/// The output is plain CSS text; any sanitization of the surrounding markup
/// is the injector's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineStyle {
    /// Stable registration handle for the host's enqueue mechanism.
    pub handle: &'static str,
    pub css: String,
    /// Short content hash, usable as a cache-busting version string.
    pub fingerprint: String,
}

impl InlineStyle {
    fn new(handle: &'static str, css: String) -> Self {
        let fingerprint = fingerprint(&css);
        Self {
            handle,
            css,
            fingerprint,
        }
    }
}

/// Short, stable content hash of a stylesheet.
fn fingerprint(css: &str) -> String {
    let hash = blake3::hash(css.as_bytes());
    let hex = format!("{}", hash);
    hex[..12].to_string()
}

/// Typed options in, explicit extension-point calls out.
#[derive(Debug, Clone, Copy)]
pub struct Toolkit {
    options: ToolkitOptions,
}

impl Toolkit {
    pub fn new(options: ToolkitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ToolkitOptions {
        &self.options
    }

    /// Pre-render filter over the builder's CSS rule list.
    pub fn pre_render_rules(&self, rules: Vec<CssRule>) -> Vec<CssRule> {
        if !self.options.true_vw {
            debug!("true_vw off, rule list passes through");
        }
        apply_true_vw(rules, self.options.true_vw)
    }

    /// Renders every enabled inline stylesheet, in a stable order.
    pub fn inline_styles(
        &self,
        globals: &GlobalStyleSettings,
        breakpoints: &Breakpoints,
    ) -> Vec<InlineStyle> {
        let mut styles = Vec::new();

        if self.options.medium_stacking_order {
            styles.push(InlineStyle::new(
                STACKING_ORDER_HANDLE,
                stacking_order_css(breakpoints.medium, breakpoints.responsive),
            ));
        }
        if self.options.sticky_header {
            styles.push(InlineStyle::new(
                STICKY_HEADER_HANDLE,
                sticky_header_css(breakpoints.responsive),
            ));
        }
        if self.options.gravity_forms_global_styles {
            styles.push(InlineStyle::new(
                GRAVITY_FORMS_HANDLE,
                form_button_css(globals, breakpoints),
            ));
        }

        debug!(count = styles.len(), "rendered inline styles");
        styles
    }

    /// Applies the configured ordering to the saved-template listing.
    pub fn sort_saved_templates(&self, templates: &mut [SavedTemplate]) {
        order_saved_templates(templates, self.options.order_saved_rows);
    }

    /// Whether a post should open in the builder. Only newly inserted posts
    /// are switched; updates keep whatever editor they already use.
    pub fn builder_is_default_editor(&self, is_new_post: bool) -> bool {
        self.options.default_editor && is_new_post
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn breakpoints() -> Breakpoints {
        Breakpoints {
            large: 1200,
            medium: 992,
            responsive: 768,
        }
    }

    #[test]
    fn test_all_toggles_off_yields_nothing() {
        let toolkit = Toolkit::new(ToolkitOptions::default());
        let styles = toolkit.inline_styles(&GlobalStyleSettings::default(), &breakpoints());
        assert!(styles.is_empty());
    }

    #[test]
    fn test_enabled_styles_in_stable_order() {
        let toolkit = Toolkit::new(ToolkitOptions {
            gravity_forms_global_styles: true,
            sticky_header: true,
            medium_stacking_order: true,
            ..Default::default()
        });

        let styles = toolkit.inline_styles(&GlobalStyleSettings::default(), &breakpoints());
        let handles: Vec<&str> = styles.iter().map(|s| s.handle).collect();
        assert_eq!(
            handles,
            vec![
                STACKING_ORDER_HANDLE,
                STICKY_HEADER_HANDLE,
                GRAVITY_FORMS_HANDLE
            ]
        );
    }

    #[test]
    fn test_fingerprint_is_content_stable() {
        let toolkit = Toolkit::new(ToolkitOptions {
            sticky_header: true,
            ..Default::default()
        });
        let globals = GlobalStyleSettings::default();

        let a = toolkit.inline_styles(&globals, &breakpoints());
        let b = toolkit.inline_styles(&globals, &breakpoints());
        assert_eq!(a[0].fingerprint, b[0].fingerprint);
        assert_eq!(a[0].fingerprint.len(), 12);
    }

    #[test]
    fn test_default_editor_gate() {
        let off = Toolkit::new(ToolkitOptions::default());
        assert!(!off.builder_is_default_editor(true));

        let on = Toolkit::new(ToolkitOptions {
            default_editor: true,
            ..Default::default()
        });
        assert!(on.builder_is_default_editor(true));
        assert!(!on.builder_is_default_editor(false));
    }
}
