//! Small crate-wide logging macros.
//!
//! Everything goes straight to the browser console via `web_sys::console`,
//! the same way the rest of the widget code reports problems.

/// `console.log` that compiles away in release builds.
///
/// ```rust,ignore
/// debug_log!("modal {} reached phase {}", id, phase);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}

/// `console.warn`, kept in release builds.  Used for conditions the page
/// author should see (bad config, malformed markup) but that never abort a
/// widget.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        web_sys::console::warn_1(&format!($($arg)*).into())
    };
}

/// `console.error` for failures reported from event handlers, where there is
/// no caller to hand a `Result` back to.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        web_sys::console::error_1(&format!($($arg)*).into())
    };
}
