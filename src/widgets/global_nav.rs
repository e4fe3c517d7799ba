//! Mobile global navigation drawer.
//!
//! The toggle trigger and the dimming overlay both flip `vx_hasOpenNav` on
//! `<body>`.  Focus follows the drawer: into the nav container when it
//! opens, back to the toggle when it closes.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::constants::*;
use crate::dom_utils::{self, add_class, has_class, remove_class};
use crate::error::WidgetError;

pub struct GlobalNav {
    document: Document,
}

impl GlobalNav {
    /// Hook the toggle trigger and overlay, when the page has them.
    pub fn install(document: &Document) -> Result<Rc<Self>, WidgetError> {
        let nav = Rc::new(Self {
            document: document.clone(),
        });
        for selector in [GLOBAL_NAV_TOGGLE_SELECTOR, GLOBAL_NAV_OVERLAY_SELECTOR] {
            if let Some(el) = dom_utils::query(document, selector) {
                let nav = Rc::clone(&nav);
                let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
                    nav.toggle();
                }));
                el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
                cb.forget();
            }
        }
        Ok(nav)
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    pub fn is_open(&self) -> bool {
        self.body().is_some_and(|b| has_class(&b, ROOT_HAS_OPEN_NAV))
    }

    pub fn toggle(&self) {
        let Some(body) = self.body() else { return };
        if self.is_open() {
            remove_class(&body, ROOT_HAS_OPEN_NAV);
            if let Some(trigger) = dom_utils::query(&self.document, GLOBAL_NAV_TOGGLE_SELECTOR) {
                dom_utils::focus(&trigger);
            }
        } else {
            add_class(&body, ROOT_HAS_OPEN_NAV);
            if let Some(container) = dom_utils::query(&self.document, GLOBAL_NAV_CONTAINER_SELECTOR) {
                dom_utils::focus(&container);
            }
        }
    }

    /// Escape closes an open drawer.  Returns whether it did.
    pub fn handle_escape(&self) -> bool {
        if self.is_open() {
            self.toggle();
            true
        } else {
            false
        }
    }
}
