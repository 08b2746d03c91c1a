use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use bbkit_core::{Breakpoints, CssRule, GlobalStyleSettings, SavedRowsOrder, ToolkitOptions};
use bbkit_styles::Toolkit;

// ── JS-side serde mirror types ────────────────────────────────

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct JsToolkitOptions {
    true_vw: bool,
    gravity_forms_global_styles: bool,
    sticky_header: bool,
    medium_stacking_order: bool,
    default_editor: bool,
    order_saved_rows: JsSavedRowsOrder,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
enum JsSavedRowsOrder {
    #[default]
    Default,
    DateAsc,
    DateDesc,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsInlineStyle {
    handle: String,
    css: String,
    fingerprint: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFormStylesResult {
    styles: Vec<JsInlineStyle>,
}

// ── Type conversions ──────────────────────────────────────────

impl From<JsSavedRowsOrder> for SavedRowsOrder {
    fn from(order: JsSavedRowsOrder) -> Self {
        match order {
            JsSavedRowsOrder::Default => SavedRowsOrder::Default,
            JsSavedRowsOrder::DateAsc => SavedRowsOrder::DateAsc,
            JsSavedRowsOrder::DateDesc => SavedRowsOrder::DateDesc,
        }
    }
}

impl From<JsToolkitOptions> for ToolkitOptions {
    fn from(opts: JsToolkitOptions) -> Self {
        ToolkitOptions {
            true_vw: opts.true_vw,
            gravity_forms_global_styles: opts.gravity_forms_global_styles,
            sticky_header: opts.sticky_header,
            medium_stacking_order: opts.medium_stacking_order,
            default_editor: opts.default_editor,
            order_saved_rows: opts.order_saved_rows.into(),
        }
    }
}

fn parse_toolkit(options: JsValue) -> Result<Toolkit, JsError> {
    let opts = if options.is_undefined() || options.is_null() {
        JsToolkitOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?
    };
    Ok(Toolkit::new(opts.into()))
}

// ── WASM exports ──────────────────────────────────────────────

/// Installs the panic hook (called automatically).
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Filters the builder's pre-render CSS rule list.
///
/// @param rules   - array of `{ selector, props }` rule objects
/// @param options - toolkit options, optional (camelCase keys)
/// @returns the rule list, rewritten when `trueVw` is on
#[wasm_bindgen(js_name = "preRenderRules")]
pub fn pre_render_rules(rules: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let rules: Vec<CssRule> = serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsError::new(&format!("Invalid rules: {}", e)))?;
    let toolkit = parse_toolkit(options)?;

    let rewritten = toolkit.pre_render_rules(rules);
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    rewritten
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Renders every enabled inline stylesheet.
///
/// @param settings    - the builder's global style settings (snake_case
///                      keys, exactly as the host stores them)
/// @param breakpoints - `{ large, medium, responsive }` in pixels
/// @param options     - toolkit options, optional (camelCase keys)
/// @returns `{ styles: [{ handle, css, fingerprint }] }`
#[wasm_bindgen(js_name = "formStyles")]
pub fn form_styles(
    settings: JsValue,
    breakpoints: JsValue,
    options: JsValue,
) -> Result<JsValue, JsError> {
    let globals: GlobalStyleSettings = serde_wasm_bindgen::from_value(settings)
        .map_err(|e| JsError::new(&format!("Invalid global styles: {}", e)))?;
    let breakpoints: Breakpoints = serde_wasm_bindgen::from_value(breakpoints)
        .map_err(|e| JsError::new(&format!("Invalid breakpoints: {}", e)))?;
    let toolkit = parse_toolkit(options)?;

    let result = form_styles_result(&toolkit, &globals, &breakpoints);
    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn form_styles_result(
    toolkit: &Toolkit,
    globals: &GlobalStyleSettings,
    breakpoints: &Breakpoints,
) -> JsFormStylesResult {
    let styles = toolkit
        .inline_styles(globals, breakpoints)
        .into_iter()
        .map(|s| JsInlineStyle {
            handle: s.handle.to_string(),
            css: s.css,
            fingerprint: s.fingerprint,
        })
        .collect();
    JsFormStylesResult { styles }
}
