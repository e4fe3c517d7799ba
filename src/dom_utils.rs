//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for class checks, lookups and focus so the widgets don't
//! sprinkle `class_list()` / `query_selector()` error handling everywhere.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::constants::*;
use crate::error::WidgetError;

/// What a clicked element does, as far as the delegated root listeners are
/// concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetRole {
    ModalTrigger,
    ModalDismiss,
    ModalDismissX,
    OverflowMenuButton,
    FlowTrigger,
    SidebarDropdown,
}

impl WidgetRole {
    /// Value of the typed `data-vx-role` attribute.
    pub fn from_role_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "modal-trigger" => Some(WidgetRole::ModalTrigger),
            "modal-dismiss" => Some(WidgetRole::ModalDismiss),
            "modal-dismiss-x" => Some(WidgetRole::ModalDismissX),
            "overflow-menu" => Some(WidgetRole::OverflowMenuButton),
            "flow-trigger" => Some(WidgetRole::FlowTrigger),
            "sidebar-dropdown" => Some(WidgetRole::SidebarDropdown),
            _ => None,
        }
    }

    /// Legacy markup: exact class-token membership, first match wins.
    pub fn from_class_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        tokens.into_iter().find_map(|token| match token {
            MODAL_TRIGGER_CLASS => Some(WidgetRole::ModalTrigger),
            MODAL_DISMISS_CLASS => Some(WidgetRole::ModalDismiss),
            MODAL_DISMISS_X_CLASS => Some(WidgetRole::ModalDismissX),
            OVERFLOW_MENU_BTN => Some(WidgetRole::OverflowMenuButton),
            FLOW_TRIGGER => Some(WidgetRole::FlowTrigger),
            SIDEBAR_DROPDOWN_CLASS => Some(WidgetRole::SidebarDropdown),
            _ => None,
        })
    }

    /// Role of a DOM element: the `data-vx-role` attribute wins over classes.
    pub fn of(el: &Element) -> Option<Self> {
        if let Some(role) = el.get_attribute(ROLE_ATTR).as_deref().and_then(Self::from_role_attr) {
            return Some(role);
        }
        // `class` attribute rather than `className`: SVG targets expose the
        // latter as an object.
        let classes = el.get_attribute("class").unwrap_or_default();
        Self::from_class_tokens(classes.split_whitespace())
    }

    pub fn is_modal_dismiss(self) -> bool {
        matches!(self, WidgetRole::ModalDismiss | WidgetRole::ModalDismissX)
    }
}

/// The delegation root: `#{root_id}` or `<body>`.
pub fn resolve_root(document: &Document, root_id: &str) -> Result<HtmlElement, WidgetError> {
    if let Some(el) = document.get_element_by_id(root_id) {
        if let Ok(html) = el.dyn_into::<HtmlElement>() {
            return Ok(html);
        }
    }
    document.body().ok_or(WidgetError::MissingRoot)
}

/// The element whose `scrollTop` is the page scroll offset.
pub fn scrolling_element(document: &Document) -> Option<Element> {
    document
        .scrolling_element()
        .or_else(|| document.body().and_then(|b| b.parent_element()))
        .or_else(|| document.body().map(Element::from))
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// First match for `selector`, treating a syntax error like "not found".
/// Optional page landmarks go through here.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(_) => {
            crate::warn_log!("vx: invalid selector `{}`", selector);
            None
        }
    }
}

/// Walk up at most `max_levels` parents looking for one carrying any of
/// `classes`.
pub fn find_ancestor_with_class(el: &Element, classes: &[&str], max_levels: u32) -> Option<Element> {
    let mut current = el.parent_element();
    let mut level = 1;
    while let Some(parent) = current {
        if classes.iter().any(|c| has_class(&parent, c)) {
            return Some(parent);
        }
        if level >= max_levels {
            return None;
        }
        level += 1;
        current = parent.parent_element();
    }
    None
}

/// Focus `el` if it is focusable HTML; anything else is a silent no-op.
pub fn focus(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}
