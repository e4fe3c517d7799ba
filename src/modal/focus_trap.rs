//! Takes the page landmarks out of the accessibility tree while a modal is
//! open.  Regions are looked up by selector on every call; missing ones are
//! skipped.

use web_sys::{Document, Element};

use crate::constants::{ARIA_HIDDEN_ATTR, INERT_ATTR};
use crate::dom_utils;

pub struct FocusTrapRegions {
    document: Document,
    selectors: Vec<String>,
}

impl FocusTrapRegions {
    pub fn new(document: Document, selectors: Vec<String>) -> Self {
        Self {
            document,
            selectors,
        }
    }

    fn regions(&self) -> impl Iterator<Item = Element> + '_ {
        self.selectors
            .iter()
            .filter_map(|sel| dom_utils::query(&self.document, sel))
    }

    pub fn engage(&self) {
        for region in self.regions() {
            let _ = region.set_attribute(INERT_ATTR, "true");
            let _ = region.set_attribute(ARIA_HIDDEN_ATTR, "true");
        }
    }

    pub fn release(&self) {
        for region in self.regions() {
            let _ = region.remove_attribute(INERT_ATTR);
            let _ = region.remove_attribute(ARIA_HIDDEN_ATTR);
        }
    }

    /// True when every present region carries both markers.
    pub fn is_engaged(&self) -> bool {
        let mut any = false;
        for region in self.regions() {
            any = true;
            if !(region.has_attribute(INERT_ATTR) && region.has_attribute(ARIA_HIDDEN_ATTR)) {
                return false;
            }
        }
        any
    }
}
