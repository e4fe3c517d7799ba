//! Overflow ("more actions") menus.
//!
//! A menu is the element right after its button.  At most one is open; any
//! click outside the open menu's button closes it, as does Escape.

use web_sys::{Document, Element};

use crate::constants::*;
use crate::dom_utils::{self, add_class, has_class, remove_class, WidgetRole};

pub struct OverflowMenu {
    document: Document,
}

impl OverflowMenu {
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
        }
    }

    /// The menu button for a click target: the target itself or its parent
    /// (icons inside the button).
    fn button_for(target: &Element) -> Option<Element> {
        if WidgetRole::of(target) == Some(WidgetRole::OverflowMenuButton) {
            return Some(target.clone());
        }
        target
            .parent_element()
            .filter(|p| WidgetRole::of(p) == Some(WidgetRole::OverflowMenuButton))
    }

    fn is_menu_open(button: &Element) -> bool {
        button
            .next_element_sibling()
            .is_some_and(|menu| has_class(&menu, OVERFLOW_MENU_IS_OPEN))
    }

    fn active_button(&self) -> Option<Element> {
        let selector = format!(
            ".{btn}.{active}, [{attr}=\"overflow-menu\"].{active}",
            btn = OVERFLOW_MENU_BTN,
            active = ACTIVE_CLASS,
            attr = ROLE_ATTR,
        );
        dom_utils::query(&self.document, &selector)
    }

    pub fn open(&self, button: &Element) {
        if let Some(menu) = button.next_element_sibling() {
            add_class(&menu, OVERFLOW_MENU_IS_OPEN);
        }
        add_class(button, ACTIVE_CLASS);
        dom_utils::focus(button);
    }

    pub fn close(&self, button: &Element) {
        if let Some(menu) = button.next_element_sibling() {
            remove_class(&menu, OVERFLOW_MENU_IS_OPEN);
        }
        remove_class(button, ACTIVE_CLASS);
        dom_utils::focus(button);
    }

    /// Runs for every click under the root.
    pub fn handle_click(&self, target: &Element) {
        match Self::button_for(target) {
            Some(button) if Self::is_menu_open(&button) => self.close(&button),
            Some(button) => {
                if let Some(other) = self.active_button() {
                    self.close(&other);
                }
                self.open(&button);
            }
            None => {
                if let Some(open) = self.active_button() {
                    self.close(&open);
                }
            }
        }
    }

    /// Escape closes the open menu.  Returns whether one was open.
    pub fn handle_escape(&self) -> bool {
        match self.active_button() {
            Some(button) => {
                self.close(&button);
                true
            }
            None => false,
        }
    }
}
