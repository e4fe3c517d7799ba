//! Class-driven open/close animation for a single modal.
//!
//! ```text
//! Closed ─prepare_open─▶ Opening(Preparing) ─settle─▶ Opening(Animating)
//!        ─completion─▶ Open ─begin_close─▶ Closing ─completion─▶ Closed
//! ```
//!
//! The synchronous steps (`prepare_open`, `begin_close`) run inside the
//! caller's request so failures reach it directly.  The awaited steps are
//! driven by the controller from a `spawn_local` task; each one advances the
//! lifecycle before touching the DOM, so a step can never run twice.

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use web_sys::{Document, Element, HtmlElement};

use crate::capability::CapabilityProbe;
use crate::completion::Completion;
use crate::config::WidgetConfig;
use crate::constants::*;
use crate::dom_utils::{self, add_class, remove_class};
use crate::error::WidgetError;

use super::focus_trap::FocusTrapRegions;
use super::lifecycle::{close_focus_target, ModalLifecycle};
use super::overlay::BackgroundOverlay;
use super::scroll::ScrollPositionStore;

pub type Lifecycle = RefCell<ModalLifecycle<HtmlElement>>;

pub struct ModalAnimationSequencer {
    document: Document,
    root: HtmlElement,
    overlay: BackgroundOverlay,
    scroll: ScrollPositionStore,
    regions: FocusTrapRegions,
    completion: Completion,
    settle_delay_ms: u32,
    default_aria_label: String,
}

impl ModalAnimationSequencer {
    pub fn new(
        document: &Document,
        root: &HtmlElement,
        config: &WidgetConfig,
        probe: &CapabilityProbe,
    ) -> Self {
        Self {
            document: document.clone(),
            root: root.clone(),
            overlay: BackgroundOverlay::new(document.clone(), root.clone()),
            scroll: ScrollPositionStore::new(
                document.clone(),
                root.clone(),
                &config.foreground_selector,
            ),
            regions: FocusTrapRegions::new(document.clone(), config.inert_region_selectors.clone()),
            completion: Completion::select(probe, config.transition_fallback_ms),
            settle_delay_ms: config.settle_delay_ms,
            default_aria_label: config.default_aria_label.clone(),
        }
    }

    pub fn scroll(&self) -> &ScrollPositionStore {
        &self.scroll
    }

    pub fn regions(&self) -> &FocusTrapRegions {
        &self.regions
    }

    /// Step 1: overlay in, modal registered for display.
    pub fn prepare_open(&self, modal: &HtmlElement) -> Result<(), WidgetError> {
        self.overlay.prepare()?;
        add_class(modal, MODAL_PREP_TO_OPEN);
        Ok(())
    }

    /// Steps 2 and 3: settle, animate, wait for completion, then pin the
    /// scroll offset, focus the dialog and trap the landmarks.
    pub async fn complete_open(
        &self,
        modal: &HtmlElement,
        lifecycle: &Lifecycle,
    ) -> Result<(), WidgetError> {
        TimeoutFuture::new(self.settle_delay_ms).await;

        lifecycle.borrow_mut().start_animating()?;
        add_class(modal, MODAL_IS_OPENING);
        self.overlay.show();
        if !modal.has_attribute(ARIA_LABEL_ATTR) {
            modal.set_attribute(ARIA_LABEL_ATTR, &self.default_aria_label)?;
        }

        self.completion.wait(modal).await;

        let offset = lifecycle
            .borrow()
            .session()
            .map(|s| s.saved_scroll_offset)
            .unwrap_or(0);
        lifecycle.borrow_mut().finish_open()?;

        self.scroll.pin(offset);
        add_class(&self.root, ROOT_HAS_OPEN_MODAL);
        remove_class(modal, MODAL_IS_OPENING);
        add_class(modal, MODAL_IS_OPEN);
        let _ = modal.focus();
        self.regions.engage();
        crate::debug_log!("vx: modal `{}` open (pinned {}px)", modal.id(), offset);
        Ok(())
    }

    /// Step 4: release the landmarks and start the close animation.
    pub fn begin_close(&self, modal: &HtmlElement) {
        self.regions.release();
        remove_class(&self.root, ROOT_HAS_OPEN_MODAL);
        remove_class(modal, MODAL_IS_OPEN);
        self.overlay.hide();
        add_class(modal, MODAL_IS_CLOSING);
    }

    /// Step 5: wait for completion, clear every marker, restore scroll and
    /// hand focus back.
    pub async fn complete_close(
        &self,
        modal: &HtmlElement,
        lifecycle: &Lifecycle,
        fallback_focus_selector: Option<String>,
    ) -> Result<(), WidgetError> {
        self.completion.wait(modal).await;

        // Dropping the session clears the cached trigger.
        let session = lifecycle.borrow_mut().finish_close()?;

        remove_class(modal, MODAL_IS_CLOSING);
        remove_class(modal, MODAL_PREP_TO_OPEN);
        self.overlay.reset();
        let restored = self.scroll.restore();

        let target: Option<Element> = close_focus_target(session.trigger.map(Element::from), || {
            fallback_focus_selector
                .as_deref()
                .and_then(|sel| dom_utils::query(&self.document, sel))
        });
        match target {
            Some(el) => dom_utils::focus(&el),
            None => crate::debug_log!("vx: no focus target after closing `{}`", session.modal_id),
        }
        crate::debug_log!("vx: modal `{}` closed (restored {:?})", session.modal_id, restored);
        Ok(())
    }

    /// Strip every modal, overlay and root marker.  Used when a sequence
    /// fails part-way so no half-applied state survives.
    pub fn reset(&self, modal: &HtmlElement) {
        self.regions.release();
        remove_class(&self.root, ROOT_HAS_OPEN_MODAL);
        for class in [
            MODAL_PREP_TO_OPEN,
            MODAL_IS_OPENING,
            MODAL_IS_OPEN,
            MODAL_IS_CLOSING,
        ] {
            remove_class(modal, class);
        }
        self.overlay.hide();
        self.overlay.reset();
        if self.scroll.pinned().is_some() {
            self.scroll.restore();
        }
    }
}
