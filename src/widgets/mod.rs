//! Single-step page widgets sharing the delegated root listeners with the
//! modal controller.

pub mod floating_label;
pub mod flow_transition;
pub mod global_nav;
pub mod overflow_menu;
pub mod sidebar;
pub mod stepped_flow;
