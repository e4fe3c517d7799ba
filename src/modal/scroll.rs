//! Keeps the page's reading position across a modal session.
//!
//! While a modal is open the document is scrolled to the top so the dialog
//! is visible, the foreground container is shifted up by the old offset so
//! the page behind the dim overlay doesn't jump, and the offset itself is
//! parked on the root as `data-scroll-position`.

use web_sys::{Document, Element, HtmlElement};

use crate::constants::SCROLL_POSITION_ATTR;
use crate::dom_utils;

pub struct ScrollPositionStore {
    document: Document,
    root: HtmlElement,
    foreground_selector: String,
}

impl ScrollPositionStore {
    pub fn new(document: Document, root: HtmlElement, foreground_selector: &str) -> Self {
        Self {
            document,
            root,
            foreground_selector: foreground_selector.to_string(),
        }
    }

    fn scroller(&self) -> Option<Element> {
        dom_utils::scrolling_element(&self.document)
    }

    /// Current vertical scroll offset, 0 without a scrolling element.
    pub fn capture(&self) -> i32 {
        self.scroller().map(|el| el.scroll_top()).unwrap_or(0)
    }

    /// Record `offset` for a later `restore` and scroll to the top.
    pub fn pin(&self, offset: i32) {
        if let Some(fg) = dom_utils::query(&self.document, &self.foreground_selector) {
            let _ = fg.set_attribute("style", &format!("top: -{}px;", offset));
        }
        let _ = self
            .root
            .set_attribute(SCROLL_POSITION_ATTR, &offset.to_string());
        if let Some(scroller) = self.scroller() {
            scroller.set_scroll_top(0);
        }
    }

    /// The offset recorded by `pin`, if one is pending.
    pub fn pinned(&self) -> Option<i32> {
        self.root
            .get_attribute(SCROLL_POSITION_ATTR)
            .and_then(|v| v.trim().parse().ok())
    }

    /// Clear the pinned marker and scroll back to it.  Returns the restored
    /// offset, or `None` when nothing was pinned (scroll is left alone).
    pub fn restore(&self) -> Option<i32> {
        let offset = self.pinned();
        if let Some(fg) = dom_utils::query(&self.document, &self.foreground_selector) {
            let _ = fg.remove_attribute("style");
        }
        let _ = self.root.remove_attribute(SCROLL_POSITION_ATTR);
        if let (Some(offset), Some(scroller)) = (offset, self.scroller()) {
            scroller.set_scroll_top(offset);
        }
        offset
    }
}
