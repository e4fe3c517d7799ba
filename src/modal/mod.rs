//! Modal dialog controller.
//!
//! One `ModalSubsystem` per page owns the single modal session, the shared
//! background overlay and the inert landmark set.  Requests are validated
//! against the session before any DOM work happens:
//!
//! * `open` while a session exists and `close` without an `Open` session
//!   are rejected with `InvalidStateTransition`;
//! * an id without a matching element is a `Resolution` error;
//! * missing landmarks / foreground container are skipped silently.

pub mod focus_trap;
pub mod lifecycle;
pub mod overlay;
pub mod scroll;
pub mod sequencer;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement};

use crate::capability::CapabilityProbe;
use crate::config::WidgetConfig;
use crate::constants::{MODAL_DISMISS_X_SELECTOR, MODAL_ID_ATTR};
use crate::dom_utils::WidgetRole;
use crate::error::WidgetError;

use lifecycle::{ModalLifecycle, ModalPhase};
use sequencer::ModalAnimationSequencer;

pub struct ModalSubsystem {
    document: Document,
    lifecycle: RefCell<ModalLifecycle<HtmlElement>>,
    sequencer: ModalAnimationSequencer,
}

impl ModalSubsystem {
    pub fn new(
        document: &Document,
        root: &HtmlElement,
        config: &WidgetConfig,
        probe: &CapabilityProbe,
    ) -> Rc<Self> {
        Rc::new(Self {
            document: document.clone(),
            lifecycle: RefCell::new(ModalLifecycle::new()),
            sequencer: ModalAnimationSequencer::new(document, root, config, probe),
        })
    }

    pub fn phase(&self) -> ModalPhase {
        self.lifecycle.borrow().phase()
    }

    pub fn open_modal_id(&self) -> Option<String> {
        let lc = self.lifecycle.borrow();
        if !lc.traps_focus() {
            return None;
        }
        lc.active_modal_id().map(str::to_string)
    }

    pub fn sequencer(&self) -> &ModalAnimationSequencer {
        &self.sequencer
    }

    fn resolve(&self, modal_id: &str) -> Result<HtmlElement, WidgetError> {
        self.document
            .get_element_by_id(modal_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| WidgetError::Resolution {
                modal_id: modal_id.to_string(),
            })
    }

    /// Start opening `modal_id`.  `trigger` is the control that asked for it
    /// (focus returns there on close); programmatic opens pass `None`.
    pub fn open(
        self: &Rc<Self>,
        modal_id: &str,
        trigger: Option<HtmlElement>,
    ) -> Result<(), WidgetError> {
        self.lifecycle.borrow().ensure_can_open()?;
        let modal = self.resolve(modal_id)?;
        let offset = self.sequencer.scroll().capture();

        self.sequencer.prepare_open(&modal)?;
        self.lifecycle
            .borrow_mut()
            .begin_open(modal_id, trigger, offset)?;
        debug_log!("vx: opening `{}` from offset {}", modal_id, offset);

        let this = Rc::clone(self);
        spawn_local(async move {
            if let Err(e) = this.sequencer.complete_open(&modal, &this.lifecycle).await {
                error_log!("vx: opening `{}` aborted: {}", modal.id(), e);
                this.abort(&modal);
            }
        });
        Ok(())
    }

    /// Start closing the open modal.  `modal_id` defaults to whichever modal
    /// is open; `fallback_focus_selector` names what gets focus when no
    /// trigger was recorded.
    pub fn close(
        self: &Rc<Self>,
        modal_id: Option<&str>,
        fallback_focus_selector: Option<&str>,
    ) -> Result<(), WidgetError> {
        let id = self.lifecycle.borrow().ensure_can_close(modal_id)?;
        let modal = self.resolve(&id)?;

        self.lifecycle.borrow_mut().begin_close(Some(&id))?;
        self.sequencer.begin_close(&modal);
        debug_log!("vx: closing `{}`", id);

        let this = Rc::clone(self);
        let fallback = fallback_focus_selector.map(str::to_string);
        spawn_local(async move {
            if let Err(e) = this
                .sequencer
                .complete_close(&modal, &this.lifecycle, fallback)
                .await
            {
                error_log!("vx: closing `{}` aborted: {}", modal.id(), e);
                this.abort(&modal);
            }
        });
        Ok(())
    }

    fn abort(&self, modal: &HtmlElement) {
        self.lifecycle.borrow_mut().abort();
        self.sequencer.reset(modal);
    }

    /// Delegated click on an element carrying a modal role.
    pub fn handle_click(
        self: &Rc<Self>,
        target: &Element,
        role: WidgetRole,
    ) -> Result<(), WidgetError> {
        let modal_id = target.get_attribute(MODAL_ID_ATTR);
        match role {
            WidgetRole::ModalTrigger => {
                let Some(modal_id) = modal_id else {
                    warn_log!("vx: modal trigger without {}", MODAL_ID_ATTR);
                    return Ok(());
                };
                let trigger = target.dyn_ref::<HtmlElement>().cloned();
                self.open(&modal_id, trigger)
            }
            role if role.is_modal_dismiss() => self.close(modal_id.as_deref(), None),
            _ => Ok(()),
        }
    }

    /// Escape closes the open modal, but only when it offers an "X" dismiss
    /// control we manage.  Returns whether a close was started.
    pub fn handle_escape(self: &Rc<Self>) -> Result<bool, WidgetError> {
        let Some(id) = self.open_modal_id() else {
            return Ok(false);
        };
        let modal = self.resolve(&id)?;
        if modal.query_selector(MODAL_DISMISS_X_SELECTOR)?.is_none() {
            return Ok(false);
        }
        self.close(None, None)?;
        Ok(true)
    }
}
