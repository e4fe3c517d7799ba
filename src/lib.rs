use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

#[macro_use]
mod macros;

pub mod capability;
pub mod completion;
pub mod config;
pub mod constants;
pub mod dom_utils;
pub mod error;
pub mod events;
pub mod modal;
pub mod page;
pub mod widgets;

use config::WidgetConfig;
use page::VxPage;
use widgets::{flow_transition, floating_label, sidebar};

thread_local! {
    // Installed page, for the exported functions below.  Event handlers hold
    // their own `Rc`s and never go through here.
    static PAGE: RefCell<Option<Rc<VxPage>>> = const { RefCell::new(None) };
}

// Entry point: runs as soon as the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let config = WidgetConfig::from_window(&window);
    install_page(&window, config)?;
    Ok(())
}

fn install_page(window: &web_sys::Window, config: WidgetConfig) -> Result<Rc<VxPage>, JsValue> {
    if let Some(page) = PAGE.with(|p| p.borrow().clone()) {
        return Ok(page);
    }
    let page = VxPage::install(window, config)?;
    PAGE.with(|p| *p.borrow_mut() = Some(Rc::clone(&page)));
    Ok(page)
}

fn installed_page() -> Result<Rc<VxPage>, JsValue> {
    PAGE.with(|p| p.borrow().clone())
        .ok_or_else(|| JsValue::from_str("vx widgets are not installed on this page"))
}

/// Open a modal by id.  No trigger is recorded, so focus goes to the
/// fallback selector (or nowhere) when it closes.
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(modal_id: &str) -> Result<(), JsValue> {
    installed_page()?.modal.open(modal_id, None)?;
    Ok(())
}

/// Close the open modal.  `modal_id`, if given, must name it.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(modal_id: Option<String>, focus_selector: Option<String>) -> Result<(), JsValue> {
    installed_page()?
        .modal
        .close(modal_id.as_deref(), focus_selector.as_deref())?;
    Ok(())
}

/// Current modal phase: `closed`, `opening:preparing`, `opening:animating`,
/// `open` or `closing`.
#[wasm_bindgen(js_name = modalPhase)]
pub fn modal_phase() -> Result<String, JsValue> {
    Ok(installed_page()?.modal.phase().to_string())
}

#[wasm_bindgen(js_name = evaluateFloatingLabels)]
pub fn evaluate_floating_labels(scope: Option<Element>) -> Result<u32, JsValue> {
    let page = installed_page()?;
    let updated = floating_label::evaluate(&page.document, scope.as_ref())?;
    Ok(updated as u32)
}

#[wasm_bindgen(js_name = startFlow)]
pub fn start_flow() -> Result<(), JsValue> {
    flow_transition::start_flow(&installed_page()?.document);
    Ok(())
}

#[wasm_bindgen(js_name = slideToStep)]
pub async fn slide_to_step(
    container: HtmlElement,
    current_step: u32,
    requested_step: u32,
) -> Result<(), JsValue> {
    let page = installed_page()?;
    page.stepped
        .slide_to_step(&container, current_step, requested_step)
        .await?;
    Ok(())
}

#[wasm_bindgen(js_name = hamburger)]
pub fn toggle_sidebar() -> Result<(), JsValue> {
    sidebar::toggle_sidebar(&installed_page()?.document);
    Ok(())
}

#[wasm_bindgen(js_name = closeHamburger)]
pub fn close_sidebar() -> Result<(), JsValue> {
    sidebar::close_sidebar(&installed_page()?.document);
    Ok(())
}
