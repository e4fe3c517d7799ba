// Class, id and attribute names shared with the existing stylesheets.  These
// are part of the markup contract and must stay bit-exact.

// Root / page level
pub const DEFAULT_ROOT_ID: &str = "vx_root";
pub const ROOT_HAS_OPEN_MODAL: &str = "vx_hasOpenModal";
pub const ROOT_HAS_OPEN_NAV: &str = "vx_hasOpenNav";
pub const SCROLL_POSITION_ATTR: &str = "data-scroll-position";

// Modal element phases
pub const MODAL_PREP_TO_OPEN: &str = "vx_modalPrepToOpen";
pub const MODAL_IS_OPENING: &str = "vx_modalIsOpening";
pub const MODAL_IS_OPEN: &str = "vx_modalIsOpen";
pub const MODAL_IS_CLOSING: &str = "vx_modalIsClosing";

// Shared background overlay
pub const MODAL_BACKGROUND_ID: &str = "vx_modal-background";
pub const MODAL_BACKGROUND_CLASS: &str = "vx_modal-background";
pub const MODAL_BG_PREP: &str = "vx_modalPrepBg";
pub const MODAL_BG_SHOWN: &str = "vx_modalBgIsShown";

// Trigger markup
pub const ROLE_ATTR: &str = "data-vx-role";
/// Marks an element the widgets are installed on.
pub const ROOT_ATTR: &str = "data-vx-root";
pub const ROOT_SELECTOR: &str = "[data-vx-root]";
pub const MODAL_ID_ATTR: &str = "data-modal-id";
pub const MODAL_TRIGGER_CLASS: &str = "vx_modal-trigger";
pub const MODAL_DISMISS_CLASS: &str = "vx_modal-dismiss_trigger";
pub const MODAL_DISMISS_X_CLASS: &str = "vx_modal-dismiss_x-trigger";
pub const MODAL_DISMISS_X_SELECTOR: &str =
    ".vx_modal-dismiss_x-trigger, [data-vx-role=\"modal-dismiss-x\"]";

// Accessibility
pub const ARIA_LABEL_ATTR: &str = "aria-label";
pub const ARIA_HIDDEN_ATTR: &str = "aria-hidden";
pub const INERT_ATTR: &str = "inert";
pub const DEFAULT_MODAL_ARIA_LABEL: &str = "Modal Dialog";

// Landmark regions taken out of the accessibility tree while a modal is open
pub const GLOBAL_NAV_MAIN_SELECTOR: &str = ".vx_globalNav-main";
pub const FOREGROUND_CONTAINER_SELECTOR: &str = ".vx_foreground-container";

// Global navigation
pub const GLOBAL_NAV_TOGGLE_SELECTOR: &str = ".vx_globalNav-toggleTrigger";
pub const GLOBAL_NAV_OVERLAY_SELECTOR: &str = ".vx_globalNav-overlay";
pub const GLOBAL_NAV_CONTAINER_SELECTOR: &str = ".vx_globalNav-container";

// Sidebar (hamburger menu)
pub const SIDEBAR_ID: &str = "daSidebar";
pub const SIDEBAR_OVERLAY_ID: &str = "daOverlay";
pub const SIDEBAR_RESPONSIVE: &str = "responsive";
pub const SIDEBAR_DROPDOWN_CLASS: &str = "dropdown-btn";
pub const ACTIVE_CLASS: &str = "active";

// Floating labels
pub const FLOATING_LABEL: &str = "vx_floatingLabel";
pub const FLOATING_LABEL_ACTIVE: &str = "vx_floatingLabel_active";
pub const HAS_FOCUS: &str = "hasFocus";
pub const HAS_VALUE: &str = "hasValue";
pub const FLOATING_LABEL_MAX_LEVELS: u32 = 2;

// Overflow menu
pub const OVERFLOW_MENU_BTN: &str = "vx_overflowMenu-btn";
pub const OVERFLOW_MENU_IS_OPEN: &str = "vx_overflowMenuIsOpen";

// Flow transitions
pub const FLOW_TRIGGER: &str = "vx_flowTrigger";
pub const HAS_FADE_TRANSITION: &str = "vx_hasFadeTransition";
pub const ADD_FLOW_TRANSITION_SELECTOR: &str = ".vx_addFlowTransition";

// Stepped flow
pub const STEPPED_SLIDE_SELECTOR: &str = ".vx_steppedFlow-slide";
pub const ACTIVE_SLIDE: &str = "vx_activeSlide";
pub const PREP_FOR_ANIMATION: &str = "vx_prepForAnimation";
pub const PREP_TO_SLIDE: &str = "vx_prepToSlide";

// Timing defaults (milliseconds)
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 35;
pub const DEFAULT_TRANSITION_FALLBACK_MS: u32 = 220;
pub const DEFAULT_SLIDE_SETTLE_MS: u32 = 50;
pub const DEFAULT_SLIDE_FALLBACK_MS: u32 = 300;

pub const TRANSITION_END_EVENT: &str = "transitionend";
pub const ESCAPE_KEY: &str = "Escape";
pub const ESCAPE_KEY_CODE: u32 = 27;
