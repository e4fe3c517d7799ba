//! Shared dimming layer behind every modal.
//!
//! Created lazily on the first open, appended to the root and then only
//! toggled between "prepared" and "shown"; it is never removed.

use web_sys::{Document, Element, HtmlElement};

use crate::constants::*;
use crate::dom_utils;
use crate::error::WidgetError;

pub struct BackgroundOverlay {
    document: Document,
    root: HtmlElement,
}

impl BackgroundOverlay {
    pub fn new(document: Document, root: HtmlElement) -> Self {
        Self { document, root }
    }

    /// The overlay element, if it was created already.
    pub fn element(&self) -> Option<Element> {
        self.document.get_element_by_id(MODAL_BACKGROUND_ID)
    }

    /// Create the overlay on first use, otherwise mark it "prepared".
    pub fn prepare(&self) -> Result<Element, WidgetError> {
        if let Some(el) = self.element() {
            dom_utils::add_class(&el, MODAL_BG_PREP);
            return Ok(el);
        }
        let el = self.document.create_element("div")?;
        el.set_id(MODAL_BACKGROUND_ID);
        el.set_class_name(&format!("{} {}", MODAL_BACKGROUND_CLASS, MODAL_BG_PREP));
        self.root.append_child(&el)?;
        Ok(el)
    }

    pub fn show(&self) {
        if let Some(el) = self.element() {
            dom_utils::add_class(&el, MODAL_BG_SHOWN);
        }
    }

    pub fn hide(&self) {
        if let Some(el) = self.element() {
            dom_utils::remove_class(&el, MODAL_BG_SHOWN);
        }
    }

    /// Drop the "prepared" marker once the close animation has finished.
    pub fn reset(&self) {
        if let Some(el) = self.element() {
            dom_utils::remove_class(&el, MODAL_BG_PREP);
        }
    }
}
