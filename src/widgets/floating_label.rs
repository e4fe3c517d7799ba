//! Floating labels for text inputs and selects.
//!
//! The label wrapper (parent or grandparent of the control) gets `hasFocus`
//! while the control is focused and `hasValue` once it holds a value, so the
//! stylesheet can float the label out of the way.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

use crate::capability::CapabilityProbe;
use crate::constants::*;
use crate::dom_utils::{self, add_class, remove_class};
use crate::error::WidgetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Input,
    Select,
}

fn control_kind(el: &Element) -> Option<Control> {
    match el.tag_name().to_ascii_uppercase().as_str() {
        "INPUT" => Some(Control::Input),
        "SELECT" => Some(Control::Select),
        _ => None,
    }
}

fn label_of(control: &Element) -> Option<Element> {
    dom_utils::find_ancestor_with_class(
        control,
        &[FLOATING_LABEL, FLOATING_LABEL_ACTIVE],
        FLOATING_LABEL_MAX_LEVELS,
    )
}

fn input_has_value(el: &Element) -> bool {
    el.dyn_ref::<HtmlInputElement>()
        .is_some_and(|input| !input.value().is_empty())
}

pub fn on_focus_in(target: &Element) {
    let Some(kind) = control_kind(target) else { return };
    let Some(label) = label_of(target) else { return };
    if kind == Control::Input {
        remove_class(&label, HAS_VALUE);
    }
    add_class(&label, HAS_FOCUS);
}

pub fn on_focus_out(target: &Element) {
    let Some(kind) = control_kind(target) else { return };
    let Some(label) = label_of(target) else { return };
    remove_class(&label, HAS_FOCUS);
    if kind == Control::Input {
        if input_has_value(target) {
            add_class(&label, HAS_VALUE);
        } else {
            remove_class(&label, HAS_VALUE);
        }
    }
}

/// Listen for focus changes on `root`.  Bubbling `focusin`/`focusout` where
/// available, capturing `focus`/`blur` otherwise.
pub fn install(root: &HtmlElement, probe: &CapabilityProbe) -> Result<(), WidgetError> {
    let (enter, leave, capture) = if probe.supports_focus_within() {
        ("focusin", "focusout", false)
    } else {
        ("focus", "blur", true)
    };

    let handlers: [(&str, fn(&Element)); 2] = [(enter, on_focus_in), (leave, on_focus_out)];
    for (event_name, handler) in handlers {
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                handler(&target);
            }
        }));
        root.add_event_listener_with_callback_and_bool(
            event_name,
            cb.as_ref().unchecked_ref(),
            capture,
        )?;
        cb.forget();
    }
    Ok(())
}

/// Bring every floating label under `scope` (default: whole document) in line
/// with its input's current value and mark it active.  Pages call this after
/// injecting pre-filled forms.
pub fn evaluate(document: &Document, scope: Option<&Element>) -> Result<usize, WidgetError> {
    let selector = format!(".{} input", FLOATING_LABEL);
    let inputs = match scope {
        Some(el) => el.query_selector_all(&selector)?,
        None => document.query_selector_all(&selector)?,
    };

    let mut updated = 0;
    for i in 0..inputs.length() {
        let Some(input) = inputs.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(label) = label_of(&input) else { continue };
        if input_has_value(&input) {
            add_class(&label, HAS_VALUE);
        } else {
            remove_class(&label, HAS_VALUE);
        }
        add_class(&label, FLOATING_LABEL_ACTIVE);
        remove_class(&label, FLOATING_LABEL);
        updated += 1;
    }
    Ok(updated)
}
