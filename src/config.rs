//! Page-level widget configuration.
//!
//! Pages can drop a plain object on `window.vxConfig` before the wasm module
//! starts; every field is optional and falls back to the values the
//! stylesheets were tuned against.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Id of the delegation root.  Missing element means `<body>`.
    pub root_id: String,
    /// Layout-settling delay between "prepare" and "animate" classes.
    pub settle_delay_ms: u32,
    /// Completion delay used when `transitionend` is unsupported.
    pub transition_fallback_ms: u32,
    pub slide_settle_ms: u32,
    pub slide_fallback_ms: u32,
    pub default_aria_label: String,
    /// Landmarks marked inert + aria-hidden while a modal is open.
    pub inert_region_selectors: Vec<String>,
    /// Container shifted with `top: -Npx` to fake the pinned scroll offset.
    pub foreground_selector: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            root_id: DEFAULT_ROOT_ID.to_string(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            transition_fallback_ms: DEFAULT_TRANSITION_FALLBACK_MS,
            slide_settle_ms: DEFAULT_SLIDE_SETTLE_MS,
            slide_fallback_ms: DEFAULT_SLIDE_FALLBACK_MS,
            default_aria_label: DEFAULT_MODAL_ARIA_LABEL.to_string(),
            inert_region_selectors: vec![
                GLOBAL_NAV_MAIN_SELECTOR.to_string(),
                FOREGROUND_CONTAINER_SELECTOR.to_string(),
            ],
            foreground_selector: FOREGROUND_CONTAINER_SELECTOR.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Build a config from an arbitrary JS value.  `undefined` / `null` give
    /// the defaults; anything unparsable is reported and also gives the
    /// defaults so a typo in page config never disables the widgets.
    pub fn from_js(value: &JsValue) -> Self {
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<WidgetConfig>(value.clone()) {
            Ok(config) => config,
            Err(e) => {
                crate::warn_log!("vx: ignoring invalid widget config: {}", e);
                Self::default()
            }
        }
    }

    /// Read `window.vxConfig`, if the page defined one.
    pub fn from_window(window: &web_sys::Window) -> Self {
        let raw = js_sys::Reflect::get(window, &JsValue::from_str("vxConfig"))
            .unwrap_or(JsValue::UNDEFINED);
        Self::from_js(&raw)
    }
}
