//! Horizontal slide between the steps of a multi-step flow.
//!
//! Markup: a container whose first child holds the `.vx_steppedFlow-slide`
//! elements.  Steps are 1-based.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::capability::CapabilityProbe;
use crate::completion::Completion;
use crate::config::WidgetConfig;
use crate::constants::*;
use crate::dom_utils::{add_class, remove_class};
use crate::error::WidgetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

impl SlideDirection {
    pub fn between(current: u32, requested: u32) -> Self {
        if current < requested {
            SlideDirection::Right
        } else {
            SlideDirection::Left
        }
    }

    pub fn start_class(self) -> String {
        format!("vx_slide-{}_start", self.name())
    }

    pub fn end_class(self) -> String {
        format!("vx_slide-{}_end", self.name())
    }

    fn name(self) -> &'static str {
        match self {
            SlideDirection::Left => "left",
            SlideDirection::Right => "right",
        }
    }
}

pub struct SteppedFlow {
    completion: Completion,
    settle_delay_ms: u32,
    slide_settle_ms: u32,
}

impl SteppedFlow {
    pub fn new(config: &WidgetConfig, probe: &CapabilityProbe) -> Self {
        Self {
            completion: Completion::select(probe, config.slide_fallback_ms),
            settle_delay_ms: config.settle_delay_ms,
            slide_settle_ms: config.slide_settle_ms,
        }
    }

    /// Slide `container` from step `current` to step `requested`.  Resolves
    /// once the slide has finished and the old step is hidden.
    pub async fn slide_to_step(
        &self,
        container: &HtmlElement,
        current: u32,
        requested: u32,
    ) -> Result<(), WidgetError> {
        let animating = container
            .first_element_child()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| WidgetError::Dom("stepped flow container has no slide track".into()))?;
        let slides = animating.query_selector_all(STEPPED_SLIDE_SELECTOR)?;
        let slide = |step: u32| -> Result<Element, WidgetError> {
            step.checked_sub(1)
                .and_then(|i| slides.item(i))
                .and_then(|n| n.dyn_into::<Element>().ok())
                .ok_or_else(|| {
                    WidgetError::Dom(format!(
                        "step {} out of range (1..={})",
                        step,
                        slides.length()
                    ))
                })
        };
        let from = slide(current)?;
        let to = slide(requested)?;
        let direction = SlideDirection::between(current, requested);

        add_class(container, PREP_FOR_ANIMATION);
        add_class(&animating, &direction.start_class());
        let _ = animating.focus();
        // Both steps visible while the track moves.
        add_class(&to, ACTIVE_SLIDE);
        add_class(&animating, PREP_TO_SLIDE);

        TimeoutFuture::new(self.settle_delay_ms).await;
        add_class(&animating, &direction.end_class());

        TimeoutFuture::new(self.slide_settle_ms).await;
        self.completion.wait(&animating).await;

        remove_class(&animating, PREP_TO_SLIDE);
        for d in [SlideDirection::Right, SlideDirection::Left] {
            remove_class(&animating, &d.start_class());
            remove_class(&animating, &d.end_class());
        }
        let _ = container.remove_attribute("style");
        remove_class(container, PREP_FOR_ANIMATION);
        if current != requested {
            remove_class(&from, ACTIVE_SLIDE);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_step_order() {
        assert_eq!(SlideDirection::between(1, 3), SlideDirection::Right);
        assert_eq!(SlideDirection::between(3, 2), SlideDirection::Left);
        assert_eq!(SlideDirection::Right.start_class(), "vx_slide-right_start");
        assert_eq!(SlideDirection::Left.end_class(), "vx_slide-left_end");
    }
}
