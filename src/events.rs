//! Delegated root listeners.
//!
//! One `click` and one `keyup` listener on the root serve every widget; the
//! clicked element's `WidgetRole` decides who handles it.  When roots nest,
//! an event belongs to the innermost one.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};

use crate::constants::{ESCAPE_KEY, ESCAPE_KEY_CODE, ROOT_SELECTOR};
use crate::dom_utils::WidgetRole;
use crate::error::WidgetError;
use crate::page::VxPage;
use crate::widgets::sidebar;

pub fn install_root_listeners(page: &Rc<VxPage>) -> Result<(), WidgetError> {
    {
        let page_ref = Rc::clone(page);
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: MouseEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                if owns(&page_ref, &target) {
                    route_click(&page_ref, &target);
                }
            }
        }));
        page.root
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    {
        let page_ref = Rc::clone(page);
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: KeyboardEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            if is_escape(&e) && target.map_or(true, |t| owns(&page_ref, &t)) {
                route_escape(&page_ref);
            }
        }));
        page.root
            .add_event_listener_with_callback("keyup", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

fn owns(page: &VxPage, target: &Element) -> bool {
    let root: &Element = page.root.as_ref();
    match target.closest(ROOT_SELECTOR) {
        Ok(Some(owner)) => &owner == root,
        _ => true,
    }
}

fn is_escape(e: &KeyboardEvent) -> bool {
    e.key() == ESCAPE_KEY || e.key_code() == ESCAPE_KEY_CODE
}

pub fn route_click(page: &VxPage, target: &Element) {
    match WidgetRole::of(target) {
        Some(role @ (WidgetRole::ModalTrigger | WidgetRole::ModalDismiss | WidgetRole::ModalDismissX)) => {
            if let Err(e) = page.modal.handle_click(target, role) {
                error_log!("vx: {}", e);
            }
        }
        Some(WidgetRole::FlowTrigger) => page.flow.handle_trigger(),
        Some(WidgetRole::SidebarDropdown) => sidebar::toggle_dropdown(target),
        Some(WidgetRole::OverflowMenuButton) | None => {}
    }
    // Overflow menus also close on clicks anywhere else.
    page.overflow.handle_click(target);
}

pub fn route_escape(page: &VxPage) {
    if let Err(e) = page.modal.handle_escape() {
        error_log!("vx: {}", e);
    }
    page.nav.handle_escape();
    page.overflow.handle_escape();
}
