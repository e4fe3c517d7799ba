//! Collapsible sidebar: hamburger toggle plus the dropdown sections inside it.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::constants::*;
use crate::dom_utils::{has_class, remove_class};

/// `hamburger()`: flip the sidebar and its overlay into / out of the
/// responsive (expanded) layout.
pub fn toggle_sidebar(document: &Document) {
    for id in [SIDEBAR_ID, SIDEBAR_OVERLAY_ID] {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle(SIDEBAR_RESPONSIVE);
        }
    }
}

/// `closeHamburger()`: collapse both, whatever their state.
pub fn close_sidebar(document: &Document) {
    for id in [SIDEBAR_ID, SIDEBAR_OVERLAY_ID] {
        if let Some(el) = document.get_element_by_id(id) {
            remove_class(&el, SIDEBAR_RESPONSIVE);
        }
    }
}

pub fn is_sidebar_expanded(document: &Document) -> bool {
    document
        .get_element_by_id(SIDEBAR_ID)
        .is_some_and(|el| has_class(&el, SIDEBAR_RESPONSIVE))
}

/// A `.dropdown-btn` click: mark the button active and show / hide the
/// section right after it.
pub fn toggle_dropdown(button: &Element) {
    let _ = button.class_list().toggle(ACTIVE_CLASS);
    let Some(content) = button
        .next_element_sibling()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let style = content.style();
    let shown = style.get_property_value("display").is_ok_and(|d| d == "block");
    let _ = style.set_property("display", if shown { "none" } else { "block" });
}
