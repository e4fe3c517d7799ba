//! One-shot browser feature detection.
//!
//! Computed once when the widgets are installed and never re-evaluated.

use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityProbe {
    supports_transition_end: bool,
    supports_focus_within: bool,
}

impl CapabilityProbe {
    pub fn new(supports_transition_end: bool, supports_focus_within: bool) -> Self {
        Self {
            supports_transition_end,
            supports_focus_within,
        }
    }

    /// `transition` is a known style property iff `transitionend` fires;
    /// `onfocusin` on the window tells us `focusin`/`focusout` bubble.
    pub fn detect(window: &Window, document: &Document) -> Self {
        let supports_transition_end = document
            .body()
            .and_then(|body| js_sys::Reflect::get(&body.style(), &JsValue::from_str("transition")).ok())
            .and_then(|v| v.as_string())
            .is_some();
        let supports_focus_within =
            js_sys::Reflect::has(window, &JsValue::from_str("onfocusin")).unwrap_or(false);

        let probe = Self::new(supports_transition_end, supports_focus_within);
        crate::debug_log!("vx: capabilities {:?}", probe);
        probe
    }

    pub fn supports_transition_end(&self) -> bool {
        self.supports_transition_end
    }

    pub fn supports_focus_within(&self) -> bool {
        self.supports_focus_within
    }
}
