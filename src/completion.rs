//! How an animation step knows its CSS transition has finished.
//!
//! Chosen once from the capability probe: either wait for the animated
//! element's own `transitionend`, or sleep a fixed delay when the
//! browser can't tell us.  Exactly one of the two is ever armed, and both
//! resolve to the same `()` so callers don't care which one they got.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Event};

use crate::capability::CapabilityProbe;
use crate::constants::TRANSITION_END_EVENT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    TransitionEnd,
    FixedDelay { ms: u32 },
}

impl Completion {
    pub fn select(probe: &CapabilityProbe, fallback_ms: u32) -> Self {
        if probe.supports_transition_end() {
            Completion::TransitionEnd
        } else {
            Completion::FixedDelay { ms: fallback_ms }
        }
    }

    /// Resolve once the transition on `el` is over.
    pub async fn wait(&self, el: &Element) {
        match *self {
            Completion::TransitionEnd => await_transition_end(el).await,
            Completion::FixedDelay { ms } => TimeoutFuture::new(ms).await,
        }
    }
}

/// Resolve on the first `transitionend` fired by `el` itself.  The event
/// bubbles, so transitions on descendants (a dismiss button's hover, say)
/// reach the listener too and are ignored.  The listener is removed once the
/// wait is over, so repeated sessions never stack handlers.
async fn await_transition_end(el: &Element) {
    let resolver: Rc<RefCell<Option<js_sys::Function>>> = Rc::default();
    let promise = {
        let slot = Rc::clone(&resolver);
        js_sys::Promise::new(&mut |resolve, _reject| {
            *slot.borrow_mut() = Some(resolve);
        })
    };

    let own: JsValue = el.clone().into();
    let slot = Rc::clone(&resolver);
    let on_end = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
        if e.target().map(JsValue::from).as_ref() != Some(&own) {
            return;
        }
        if let Some(resolve) = slot.borrow_mut().take() {
            let _ = resolve.call0(&JsValue::UNDEFINED);
        }
    }));

    // Couldn't listen: finish now rather than hang the sequence.
    if el
        .add_event_listener_with_callback(TRANSITION_END_EVENT, on_end.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }
    let _ = JsFuture::from(promise).await;
    let _ = el.remove_event_listener_with_callback(
        TRANSITION_END_EVENT,
        on_end.as_ref().unchecked_ref(),
    );
}
