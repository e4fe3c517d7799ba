//! Modal session bookkeeping.
//!
//! This is the DOM-free half of the modal controller: it only knows which
//! modal is active, what triggered it, the scroll offset captured when it
//! opened and which animation phase it is in.  Every sequencer step has to
//! pass through here first, so an out-of-order request is rejected before
//! any class or attribute is touched.
//!
//! The trigger type is generic so the state machine can be exercised
//! natively without a browser.

use std::fmt;

use crate::error::WidgetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningStage {
    /// Registered for display, waiting for layout to settle.
    Preparing,
    /// Open transition running.
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening(OpeningStage),
    Open,
    Closing,
}

impl fmt::Display for ModalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModalPhase::Closed => "closed",
            ModalPhase::Opening(OpeningStage::Preparing) => "opening:preparing",
            ModalPhase::Opening(OpeningStage::Animating) => "opening:animating",
            ModalPhase::Open => "open",
            ModalPhase::Closing => "closing",
        };
        f.write_str(s)
    }
}

/// What the caller asked the lifecycle to do, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalRequest {
    Open,
    Animate,
    FinishOpen,
    Close,
    FinishClose,
}

impl fmt::Display for ModalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModalRequest::Open => "open",
            ModalRequest::Animate => "animate",
            ModalRequest::FinishOpen => "finish opening",
            ModalRequest::Close => "close",
            ModalRequest::FinishClose => "finish closing",
        };
        f.write_str(s)
    }
}

/// The single active modal interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSession<T> {
    pub modal_id: String,
    pub trigger: Option<T>,
    pub saved_scroll_offset: i32,
    pub phase: ModalPhase,
}

#[derive(Debug)]
pub struct ModalLifecycle<T> {
    session: Option<ModalSession<T>>,
}

impl<T> Default for ModalLifecycle<T> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<T> ModalLifecycle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ModalPhase {
        self.session
            .as_ref()
            .map(|s| s.phase)
            .unwrap_or(ModalPhase::Closed)
    }

    pub fn session(&self) -> Option<&ModalSession<T>> {
        self.session.as_ref()
    }

    /// Id of the modal currently owned by a session, whatever its phase.
    pub fn active_modal_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.modal_id.as_str())
    }

    /// Landmark regions are inert exactly while this holds.
    pub fn traps_focus(&self) -> bool {
        self.phase() == ModalPhase::Open
    }

    /// Check an open request without committing to it, so the caller can
    /// resolve the target element in between.
    pub fn ensure_can_open(&self) -> Result<(), WidgetError> {
        match self.phase() {
            ModalPhase::Closed => Ok(()),
            phase => Err(WidgetError::InvalidStateTransition {
                phase,
                request: ModalRequest::Open,
            }),
        }
    }

    /// `Closed -> Opening(Preparing)`
    pub fn begin_open(
        &mut self,
        modal_id: &str,
        trigger: Option<T>,
        saved_scroll_offset: i32,
    ) -> Result<(), WidgetError> {
        self.ensure_can_open()?;
        self.session = Some(ModalSession {
            modal_id: modal_id.to_string(),
            trigger,
            saved_scroll_offset,
            phase: ModalPhase::Opening(OpeningStage::Preparing),
        });
        Ok(())
    }

    /// `Opening(Preparing) -> Opening(Animating)`
    pub fn start_animating(&mut self) -> Result<(), WidgetError> {
        self.advance(
            ModalPhase::Opening(OpeningStage::Preparing),
            ModalPhase::Opening(OpeningStage::Animating),
            ModalRequest::Animate,
        )
    }

    /// `Opening(Animating) -> Open`
    pub fn finish_open(&mut self) -> Result<(), WidgetError> {
        self.advance(
            ModalPhase::Opening(OpeningStage::Animating),
            ModalPhase::Open,
            ModalRequest::FinishOpen,
        )
    }

    /// Check a close request without committing to it.  With `modal_id`
    /// given it must name the open modal.  Returns the id to close.
    pub fn ensure_can_close(&self, modal_id: Option<&str>) -> Result<String, WidgetError> {
        let rejected = WidgetError::InvalidStateTransition {
            phase: self.phase(),
            request: ModalRequest::Close,
        };
        match self.session.as_ref() {
            Some(s) if s.phase == ModalPhase::Open => match modal_id {
                Some(id) if id != s.modal_id => Err(rejected),
                _ => Ok(s.modal_id.clone()),
            },
            _ => Err(rejected),
        }
    }

    /// `Open -> Closing`.  Returns the id of the modal being closed.
    pub fn begin_close(&mut self, modal_id: Option<&str>) -> Result<String, WidgetError> {
        let id = self.ensure_can_close(modal_id)?;
        if let Some(s) = self.session.as_mut() {
            s.phase = ModalPhase::Closing;
        }
        Ok(id)
    }

    /// `Closing -> Closed`.  Hands back the finished session so the caller
    /// can restore scroll and focus from it.
    pub fn finish_close(&mut self) -> Result<ModalSession<T>, WidgetError> {
        match self.session.take() {
            Some(mut s) if s.phase == ModalPhase::Closing => {
                s.phase = ModalPhase::Closed;
                Ok(s)
            }
            other => {
                let phase = other.as_ref().map(|s| s.phase).unwrap_or_default();
                self.session = other;
                Err(WidgetError::InvalidStateTransition {
                    phase,
                    request: ModalRequest::FinishClose,
                })
            }
        }
    }

    /// Drop the session whatever its phase.  Only for tearing down after a
    /// sequence failed half-way.
    pub fn abort(&mut self) -> Option<ModalSession<T>> {
        self.session.take()
    }

    fn advance(
        &mut self,
        expected: ModalPhase,
        next: ModalPhase,
        request: ModalRequest,
    ) -> Result<(), WidgetError> {
        let phase = self.phase();
        match self.session.as_mut() {
            Some(s) if s.phase == expected => {
                s.phase = next;
                Ok(())
            }
            _ => Err(WidgetError::InvalidStateTransition { phase, request }),
        }
    }
}

/// Pick what receives focus once a modal has closed: the cached trigger
/// wins over the caller-supplied fallback.  `None` means "focus nothing".
pub fn close_focus_target<T>(
    trigger: Option<T>,
    fallback: impl FnOnce() -> Option<T>,
) -> Option<T> {
    trigger.or_else(fallback)
}
