//! Browser tests for the modal open/close sequence.
//!
//! Each test mounts its own root with a nav landmark, a tall foreground
//! container and a couple of modals, and installs the widgets with tiny
//! timings and no `transitionend` support so the fallback delay drives the
//! sequence deterministically.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, KeyboardEvent, KeyboardEventInit};

use vx_widgets::capability::CapabilityProbe;
use vx_widgets::config::WidgetConfig;
use vx_widgets::constants::*;
use vx_widgets::dom_utils;
use vx_widgets::error::WidgetError;
use vx_widgets::events;
use vx_widgets::modal::lifecycle::{ModalPhase, ModalRequest, OpeningStage};
use vx_widgets::page::VxPage;

wasm_bindgen_test_configure!(run_in_browser);

const SETTLE_MS: u32 = 5;
const FALLBACK_MS: u32 = 40;

struct Fixture {
    name: String,
    document: Document,
    page: Rc<VxPage>,
}

impl Fixture {
    fn new(name: &str) -> Self {
        Self::with_probe(name, CapabilityProbe::new(false, true))
    }

    fn with_probe(name: &str, probe: CapabilityProbe) -> Self {
        let document = web_sys::window().unwrap().document().unwrap();
        let root: HtmlElement = document
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap();
        root.set_id(&format!("{name}-root"));
        root.set_inner_html(&format!(
            r#"
            <nav class="{name}-nav"></nav>
            <div class="{name}-fg">
                <button id="{name}-trigger" class="vx_modal-trigger" data-modal-id="{name}-modal">Open</button>
                <button id="{name}-fallback">Elsewhere</button>
                <div style="height: 5000px"></div>
            </div>
            <div id="{name}-modal" tabindex="-1">
                <button id="{name}-x" class="vx_modal-dismiss_x-trigger" data-modal-id="{name}-modal">X</button>
            </div>
            <div id="{name}-plain" tabindex="-1" aria-label="Receipt">
                <button id="{name}-done" data-vx-role="modal-dismiss" data-modal-id="{name}-plain">Done</button>
            </div>
            "#
        ));
        document.body().unwrap().append_child(&root).unwrap();

        let config = WidgetConfig {
            root_id: format!("{name}-root"),
            settle_delay_ms: SETTLE_MS,
            transition_fallback_ms: FALLBACK_MS,
            inert_region_selectors: vec![format!(".{name}-nav"), format!(".{name}-fg")],
            foreground_selector: format!(".{name}-fg"),
            ..WidgetConfig::default()
        };
        let page = VxPage::install_with(&document, root, config, probe).unwrap();
        Self {
            name: name.to_string(),
            document,
            page,
        }
    }

    fn id(&self, suffix: &str) -> String {
        format!("{}-{}", self.name, suffix)
    }

    fn el(&self, suffix: &str) -> Element {
        self.document.get_element_by_id(&self.id(suffix)).unwrap()
    }

    fn region(&self, suffix: &str) -> Element {
        self.document
            .query_selector(&format!(".{}-{}", self.name, suffix))
            .unwrap()
            .unwrap()
    }

    fn regions_inert(&self) -> bool {
        ["nav", "fg"].iter().all(|r| {
            let el = self.region(r);
            el.has_attribute(INERT_ATTR) && el.has_attribute(ARIA_HIDDEN_ATTR)
        })
    }

    fn regions_clear(&self) -> bool {
        ["nav", "fg"].iter().all(|r| {
            let el = self.region(r);
            !el.has_attribute(INERT_ATTR) && !el.has_attribute(ARIA_HIDDEN_ATTR)
        })
    }

    fn scroll_top(&self) -> i32 {
        dom_utils::scrolling_element(&self.document).unwrap().scroll_top()
    }

    fn set_scroll_top(&self, offset: i32) {
        dom_utils::scrolling_element(&self.document)
            .unwrap()
            .set_scroll_top(offset);
    }

    fn active_id(&self) -> Option<String> {
        self.document.active_element().map(|el| el.id())
    }

    fn phase(&self) -> ModalPhase {
        self.page.modal.phase()
    }
}

/// Long enough for settle + fallback with slack for a busy test runner.
async fn sequence_done() {
    TimeoutFuture::new(SETTLE_MS + FALLBACK_MS + 60).await;
}

#[wasm_bindgen_test]
async fn open_pins_scroll_and_close_restores_it() {
    let fx = Fixture::new("scroll");
    fx.set_scroll_top(400);
    assert_eq!(fx.scroll_top(), 400, "fixture page must be scrollable");

    fx.page.modal.open(&fx.id("modal"), None).unwrap();
    assert_eq!(fx.phase(), ModalPhase::Opening(OpeningStage::Preparing));
    sequence_done().await;

    assert_eq!(fx.phase(), ModalPhase::Open);
    assert_eq!(fx.scroll_top(), 0);
    assert_eq!(fx.page.modal.sequencer().scroll().pinned(), Some(400));
    assert_eq!(
        fx.region("fg").get_attribute("style").as_deref(),
        Some("top: -400px;")
    );

    // No trigger and no fallback selector: focus is left alone.
    fx.page.modal.close(Some(&fx.id("modal")), None).unwrap();
    assert_eq!(fx.phase(), ModalPhase::Closing);
    sequence_done().await;

    assert_eq!(fx.phase(), ModalPhase::Closed);
    assert_eq!(fx.scroll_top(), 400);
    assert_eq!(fx.page.modal.sequencer().scroll().pinned(), None);
    assert!(!fx.region("fg").has_attribute("style"));
    fx.set_scroll_top(0);
}

#[wasm_bindgen_test]
async fn classes_follow_the_phases() {
    let fx = Fixture::new("classes");
    let modal = fx.el("modal");
    let root = fx.el("root");

    fx.page.modal.open(&fx.id("modal"), None).unwrap();
    assert!(dom_utils::has_class(&modal, MODAL_PREP_TO_OPEN));
    assert!(!dom_utils::has_class(&modal, MODAL_IS_OPENING));
    let overlay = fx.document.get_element_by_id(MODAL_BACKGROUND_ID).unwrap();
    assert!(dom_utils::has_class(&overlay, MODAL_BG_PREP));

    TimeoutFuture::new(SETTLE_MS + 5).await;
    assert_eq!(fx.phase(), ModalPhase::Opening(OpeningStage::Animating));
    assert!(dom_utils::has_class(&modal, MODAL_IS_OPENING));
    assert!(dom_utils::has_class(&overlay, MODAL_BG_SHOWN));
    assert_eq!(modal.get_attribute(ARIA_LABEL_ATTR).as_deref(), Some(DEFAULT_MODAL_ARIA_LABEL));

    sequence_done().await;
    assert!(dom_utils::has_class(&modal, MODAL_IS_OPEN));
    assert!(!dom_utils::has_class(&modal, MODAL_IS_OPENING));
    assert!(dom_utils::has_class(&root, ROOT_HAS_OPEN_MODAL));
    assert_eq!(fx.active_id(), Some(fx.id("modal")));

    fx.page.modal.close(None, None).unwrap();
    assert!(dom_utils::has_class(&modal, MODAL_IS_CLOSING));
    assert!(!dom_utils::has_class(&modal, MODAL_IS_OPEN));
    assert!(!dom_utils::has_class(&overlay, MODAL_BG_SHOWN));
    assert!(!dom_utils::has_class(&root, ROOT_HAS_OPEN_MODAL));

    sequence_done().await;
    for class in [MODAL_PREP_TO_OPEN, MODAL_IS_OPENING, MODAL_IS_OPEN, MODAL_IS_CLOSING] {
        assert!(!dom_utils::has_class(&modal, class), "{class} left behind");
    }
    assert!(!dom_utils::has_class(&overlay, MODAL_BG_PREP));
    // Overlay stays in the DOM and is reused.
    assert_eq!(
        fx.document
            .query_selector_all(&format!("#{}", MODAL_BACKGROUND_ID))
            .unwrap()
            .length(),
        1
    );
}

#[wasm_bindgen_test]
async fn existing_aria_label_is_kept() {
    let fx = Fixture::new("aria");
    fx.page.modal.open(&fx.id("plain"), None).unwrap();
    sequence_done().await;
    assert_eq!(fx.el("plain").get_attribute(ARIA_LABEL_ATTR).as_deref(), Some("Receipt"));
    fx.page.modal.close(None, None).unwrap();
    sequence_done().await;
}

#[wasm_bindgen_test]
async fn landmarks_are_inert_exactly_while_open() {
    let fx = Fixture::new("inert");
    assert!(fx.regions_clear());

    fx.page.modal.open(&fx.id("modal"), None).unwrap();
    assert!(fx.regions_clear(), "not trapped while opening");
    sequence_done().await;
    assert!(fx.regions_inert());
    assert!(fx.page.modal.sequencer().regions().is_engaged());

    fx.page.modal.close(None, None).unwrap();
    assert!(fx.regions_clear(), "released as soon as closing starts");
    sequence_done().await;
    assert!(fx.regions_clear());
}

#[wasm_bindgen_test]
fn engage_and_release_are_idempotent() {
    let fx = Fixture::new("idempotent");
    let regions = fx.page.modal.sequencer().regions();

    regions.engage();
    regions.engage();
    assert!(fx.regions_inert());
    assert_eq!(fx.region("nav").get_attribute(INERT_ATTR).as_deref(), Some("true"));

    regions.release();
    regions.release();
    assert!(fx.regions_clear());
}

#[wasm_bindgen_test]
async fn missing_landmarks_are_skipped() {
    let fx = Fixture::new("landmarks");
    fx.region("nav").remove();
    fx.page.modal.open(&fx.id("modal"), None).unwrap();
    sequence_done().await;
    assert_eq!(fx.phase(), ModalPhase::Open);
    fx.page.modal.close(None, None).unwrap();
    sequence_done().await;
    assert_eq!(fx.phase(), ModalPhase::Closed);
}

#[wasm_bindgen_test]
async fn second_open_is_an_invalid_transition() {
    let fx = Fixture::new("second-open");
    fx.page.modal.open(&fx.id("modal"), None).unwrap();

    let err = fx.page.modal.open(&fx.id("plain"), None).unwrap_err();
    assert_eq!(
        err,
        WidgetError::InvalidStateTransition {
            phase: ModalPhase::Opening(OpeningStage::Preparing),
            request: ModalRequest::Open,
        }
    );
    assert!(!dom_utils::has_class(&fx.el("plain"), MODAL_PREP_TO_OPEN));

    sequence_done().await;
    assert!(matches!(
        fx.page.modal.open(&fx.id("plain"), None),
        Err(WidgetError::InvalidStateTransition { phase: ModalPhase::Open, .. })
    ));
    assert_eq!(fx.page.modal.open_modal_id(), Some(fx.id("modal")));

    fx.page.modal.close(None, None).unwrap();
    sequence_done().await;
}

#[wasm_bindgen_test]
fn close_without_open_modal_is_rejected() {
    let fx = Fixture::new("close-closed");
    assert!(matches!(
        fx.page.modal.close(None, None),
        Err(WidgetError::InvalidStateTransition {
            phase: ModalPhase::Closed,
            request: ModalRequest::Close
        })
    ));
}

#[wasm_bindgen_test]
fn unknown_modal_id_is_reported() {
    let fx = Fixture::new("resolution");
    let err = fx.page.modal.open("no-such-modal", None).unwrap_err();
    assert_eq!(
        err,
        WidgetError::Resolution {
            modal_id: "no-such-modal".into()
        }
    );
    assert_eq!(fx.phase(), ModalPhase::Closed);
    assert!(fx.page.modal.open(&fx.id("modal"), None).is_ok(), "nothing half-applied");
}

#[wasm_bindgen_test]
async fn focus_returns_to_the_trigger() {
    let fx = Fixture::new("trigger");
    // Same routing the delegated root listener does for a click.
    events::route_click(&fx.page, &fx.el("trigger"));
    sequence_done().await;
    assert_eq!(fx.phase(), ModalPhase::Open);

    events::route_click(&fx.page, &fx.el("x"));
    assert_eq!(fx.phase(), ModalPhase::Closing);
    sequence_done().await;
    assert_eq!(fx.phase(), ModalPhase::Closed);
    assert_eq!(fx.active_id(), Some(fx.id("trigger")));
}

#[wasm_bindgen_test]
async fn trigger_wins_over_fallback_selector() {
    let fx = Fixture::new("precedence");
    let trigger: HtmlElement = fx.el("trigger").dyn_into().unwrap();
    fx.page.modal.open(&fx.id("modal"), Some(trigger)).unwrap();
    sequence_done().await;

    fx.page
        .modal
        .close(None, Some(&format!("#{}", fx.id("fallback"))))
        .unwrap();
    sequence_done().await;
    assert_eq!(fx.active_id(), Some(fx.id("trigger")));
}

#[wasm_bindgen_test]
async fn fallback_selector_gets_focus_without_trigger() {
    let fx = Fixture::new("fallback");
    fx.page.modal.open(&fx.id("modal"), None).unwrap();
    sequence_done().await;

    fx.page
        .modal
        .close(Some(&fx.id("modal")), Some(&format!("#{}", fx.id("fallback"))))
        .unwrap();
    sequence_done().await;
    assert_eq!(fx.active_id(), Some(fx.id("fallback")));
}

#[wasm_bindgen_test]
async fn escape_closes_a_modal_with_an_x_control() {
    let fx = Fixture::new("escape-x");
    fx.page.modal.open(&fx.id("modal"), None).unwrap();
    sequence_done().await;

    events::route_escape(&fx.page);
    assert_eq!(fx.phase(), ModalPhase::Closing);
    sequence_done().await;
    assert_eq!(fx.phase(), ModalPhase::Closed);
}

#[wasm_bindgen_test]
async fn escape_ignores_a_modal_without_an_x_control() {
    let fx = Fixture::new("escape-plain");
    fx.page.modal.open(&fx.id("plain"), None).unwrap();
    sequence_done().await;

    events::route_escape(&fx.page);
    sequence_done().await;
    assert_eq!(fx.phase(), ModalPhase::Open);
    assert!(fx.regions_inert());

    // The regular dismiss control still works.
    events::route_click(&fx.page, &fx.el("done"));
    sequence_done().await;
    assert_eq!(fx.phase(), ModalPhase::Closed);
}

#[wasm_bindgen_test]
async fn transition_end_strategy_waits_for_the_event() {
    let fx = Fixture::with_probe("transition-end", CapabilityProbe::new(true, true));
    let modal = fx.el("modal");

    fx.page.modal.open(&fx.id("modal"), None).unwrap();
    TimeoutFuture::new(SETTLE_MS + FALLBACK_MS + 60).await;
    assert_eq!(
        fx.phase(),
        ModalPhase::Opening(OpeningStage::Animating),
        "no fallback timer is armed alongside the listener"
    );

    let end = web_sys::Event::new(TRANSITION_END_EVENT).unwrap();
    modal.dispatch_event(&end).unwrap();
    TimeoutFuture::new(10).await;
    assert_eq!(fx.phase(), ModalPhase::Open);

    // A stray second event must not re-run the completion step.
    modal.dispatch_event(&web_sys::Event::new(TRANSITION_END_EVENT).unwrap()).unwrap();
    TimeoutFuture::new(10).await;
    assert_eq!(fx.phase(), ModalPhase::Open);

    fx.page.modal.close(None, None).unwrap();
    // Let the close task arm its listener first.
    TimeoutFuture::new(5).await;
    assert_eq!(fx.phase(), ModalPhase::Closing);
    modal.dispatch_event(&web_sys::Event::new(TRANSITION_END_EVENT).unwrap()).unwrap();
    TimeoutFuture::new(10).await;
    assert_eq!(fx.phase(), ModalPhase::Closed);
}

#[wasm_bindgen_test]
async fn repeated_cycles_reach_terminal_states() {
    let fx = Fixture::new("cycles");
    for _ in 0..3 {
        fx.page.modal.open(&fx.id("modal"), None).unwrap();
        sequence_done().await;
        assert_eq!(fx.phase(), ModalPhase::Open);
        fx.page.modal.close(None, None).unwrap();
        sequence_done().await;
        assert_eq!(fx.phase(), ModalPhase::Closed);
    }
}

#[allow(deprecated)]
fn bubbling(name: &str) -> Event {
    let mut init = EventInit::new();
    init.bubbles(true);
    Event::new_with_event_init_dict(name, &init).unwrap()
}

#[allow(deprecated)]
fn keyup(key: &str) -> KeyboardEvent {
    let mut init = KeyboardEventInit::new();
    init.key(key);
    init.bubbles(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keyup", &init).unwrap()
}

#[wasm_bindgen_test]
async fn child_transition_end_does_not_finish_the_step() {
    let fx = Fixture::with_probe("child-end", CapabilityProbe::new(true, true));
    let modal = fx.el("modal");

    fx.page.modal.open(&fx.id("modal"), None).unwrap();
    TimeoutFuture::new(SETTLE_MS + 20).await;
    assert_eq!(fx.phase(), ModalPhase::Opening(OpeningStage::Animating));

    // The X button's own transition bubbles up to the modal.
    fx.el("x").dispatch_event(&bubbling(TRANSITION_END_EVENT)).unwrap();
    TimeoutFuture::new(10).await;
    assert_eq!(fx.phase(), ModalPhase::Opening(OpeningStage::Animating));

    modal.dispatch_event(&bubbling(TRANSITION_END_EVENT)).unwrap();
    TimeoutFuture::new(10).await;
    assert_eq!(fx.phase(), ModalPhase::Open);

    fx.page.modal.close(None, None).unwrap();
    TimeoutFuture::new(5).await;
    fx.el("x").dispatch_event(&bubbling(TRANSITION_END_EVENT)).unwrap();
    TimeoutFuture::new(10).await;
    assert_eq!(fx.phase(), ModalPhase::Closing);
    modal.dispatch_event(&bubbling(TRANSITION_END_EVENT)).unwrap();
    TimeoutFuture::new(10).await;
    assert_eq!(fx.phase(), ModalPhase::Closed);
}

#[wasm_bindgen_test]
async fn root_listeners_route_real_clicks_and_keys() {
    let fx = Fixture::new("wired");
    let trigger: HtmlElement = fx.el("trigger").dyn_into().unwrap();

    trigger.click();
    assert_eq!(fx.phase(), ModalPhase::Opening(OpeningStage::Preparing));
    sequence_done().await;
    assert_eq!(fx.phase(), ModalPhase::Open);
    assert_eq!(fx.active_id(), Some(fx.id("modal")));

    // Escape released on the focused dialog bubbles to the root.
    fx.el("modal").dispatch_event(&keyup("Escape")).unwrap();
    assert_eq!(fx.phase(), ModalPhase::Closing);
    sequence_done().await;
    assert_eq!(fx.phase(), ModalPhase::Closed);
    assert_eq!(fx.active_id(), Some(fx.id("trigger")));

    // Other keys are ignored.
    trigger.click();
    sequence_done().await;
    fx.el("modal").dispatch_event(&keyup("Enter")).unwrap();
    assert_eq!(fx.phase(), ModalPhase::Open);

    let done: HtmlElement = fx.el("x").dyn_into().unwrap();
    done.click();
    sequence_done().await;
    assert_eq!(fx.phase(), ModalPhase::Closed);
}

#[wasm_bindgen_test]
async fn closing_a_removed_modal_keeps_the_session_open() {
    let fx = Fixture::new("removed");
    fx.page.modal.open(&fx.id("modal"), None).unwrap();
    sequence_done().await;

    let modal = fx.el("modal");
    modal.remove();
    assert_eq!(
        fx.page.modal.close(None, None).unwrap_err(),
        WidgetError::Resolution {
            modal_id: fx.id("modal")
        }
    );
    assert_eq!(fx.phase(), ModalPhase::Open);
    assert!(fx.regions_inert());

    // Putting it back lets the close go through.
    fx.el("root").append_child(&modal).unwrap();
    fx.page.modal.close(None, None).unwrap();
    sequence_done().await;
    assert_eq!(fx.phase(), ModalPhase::Closed);
}

#[wasm_bindgen_test]
async fn nested_root_handles_its_own_clicks() {
    let fx = Fixture::new("inner");
    let outer: HtmlElement = fx.document.create_element("div").unwrap().dyn_into().unwrap();
    outer.set_id("outer-root");
    fx.document.body().unwrap().append_child(&outer).unwrap();
    outer.append_child(&fx.el("root")).unwrap();
    let outer_page = VxPage::install_with(
        &fx.document,
        outer,
        WidgetConfig {
            root_id: "outer-root".into(),
            settle_delay_ms: SETTLE_MS,
            transition_fallback_ms: FALLBACK_MS,
            ..WidgetConfig::default()
        },
        CapabilityProbe::new(false, true),
    )
    .unwrap();

    fx.el("trigger").dyn_into::<HtmlElement>().unwrap().click();
    assert_eq!(fx.phase(), ModalPhase::Opening(OpeningStage::Preparing));
    assert_eq!(outer_page.modal.phase(), ModalPhase::Closed);
    sequence_done().await;

    fx.page.modal.close(None, None).unwrap();
    sequence_done().await;
    assert_eq!(outer_page.modal.phase(), ModalPhase::Closed);
}
