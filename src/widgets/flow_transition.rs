//! Fade between page flows.
//!
//! A page rendered mid-transition (root carries `vx_hasFadeTransition`) fades
//! back in after the settle delay; `vx_flowTrigger` clicks fade the
//! `.vx_addFlowTransition` container out before navigation.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use crate::constants::*;
use crate::dom_utils::{self, add_class, has_class, remove_class};

pub struct FlowTransition {
    document: Document,
    /// Flow triggers are only honoured on pages that opted in.
    enabled: bool,
}

impl FlowTransition {
    pub fn install(document: &Document, root: &HtmlElement, settle_delay_ms: u32) -> Self {
        let fading_in = has_class(root, HAS_FADE_TRANSITION);
        let enabled =
            fading_in || dom_utils::query(document, ADD_FLOW_TRANSITION_SELECTOR).is_some();
        if fading_in {
            let document = document.clone();
            spawn_local(async move {
                TimeoutFuture::new(settle_delay_ms).await;
                end_flow(&document);
            });
        }
        Self {
            document: document.clone(),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn handle_trigger(&self) {
        if self.enabled {
            start_flow(&self.document);
        }
    }
}

pub fn start_flow(document: &Document) {
    if let Some(el) = dom_utils::query(document, ADD_FLOW_TRANSITION_SELECTOR) {
        add_class(&el, HAS_FADE_TRANSITION);
    }
}

pub fn end_flow(document: &Document) {
    if let Some(el) = dom_utils::query(document, ADD_FLOW_TRANSITION_SELECTOR) {
        remove_class(&el, HAS_FADE_TRANSITION);
    }
}
