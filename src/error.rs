use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::modal::lifecycle::{ModalPhase, ModalRequest};

/// Errors reported by the widget layer.  Missing optional landmarks (nav,
/// foreground container, overlay) are not errors: those steps are skipped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WidgetError {
    #[error("no modal element with id `{modal_id}`")]
    Resolution { modal_id: String },

    #[error("cannot {request} a modal while the modal subsystem is {phase}")]
    InvalidStateTransition {
        phase: ModalPhase,
        request: ModalRequest,
    },

    #[error("no delegation root: the document has neither the configured root nor a <body>")]
    MissingRoot,

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        WidgetError::Dom(msg)
    }
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_request() {
        let err = WidgetError::InvalidStateTransition {
            phase: ModalPhase::Open,
            request: ModalRequest::Open,
        };
        assert_eq!(
            err.to_string(),
            "cannot open a modal while the modal subsystem is open"
        );

        let err = WidgetError::Resolution {
            modal_id: "checkout-modal".into(),
        };
        assert!(err.to_string().contains("checkout-modal"));
    }
}
