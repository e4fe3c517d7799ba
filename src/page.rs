//! Everything the library installs on one page, built once at start-up.

use std::rc::Rc;

use web_sys::{Document, HtmlElement, Window};

use crate::capability::CapabilityProbe;
use crate::config::WidgetConfig;
use crate::constants::ROOT_ATTR;
use crate::dom_utils;
use crate::error::WidgetError;
use crate::events;
use crate::modal::ModalSubsystem;
use crate::widgets::flow_transition::FlowTransition;
use crate::widgets::global_nav::GlobalNav;
use crate::widgets::overflow_menu::OverflowMenu;
use crate::widgets::stepped_flow::SteppedFlow;
use crate::widgets::floating_label;

pub struct VxPage {
    pub document: Document,
    pub root: HtmlElement,
    pub config: WidgetConfig,
    pub probe: CapabilityProbe,
    pub modal: Rc<ModalSubsystem>,
    pub nav: Rc<GlobalNav>,
    pub overflow: OverflowMenu,
    pub flow: FlowTransition,
    pub stepped: SteppedFlow,
}

impl VxPage {
    /// Detect capabilities and install on the window's document.
    pub fn install(window: &Window, config: WidgetConfig) -> Result<Rc<Self>, WidgetError> {
        let document = window.document().ok_or(WidgetError::MissingRoot)?;
        let root = dom_utils::resolve_root(&document, &config.root_id)?;
        let probe = CapabilityProbe::detect(window, &document);
        Self::install_with(&document, root, config, probe)
    }

    /// Install under an explicit root with known capabilities.
    pub fn install_with(
        document: &Document,
        root: HtmlElement,
        config: WidgetConfig,
        probe: CapabilityProbe,
    ) -> Result<Rc<Self>, WidgetError> {
        root.set_attribute(ROOT_ATTR, "")?;
        let modal = ModalSubsystem::new(document, &root, &config, &probe);
        let nav = GlobalNav::install(document)?;
        floating_label::install(&root, &probe)?;
        floating_label::evaluate(document, None)?;
        let flow = FlowTransition::install(document, &root, config.settle_delay_ms);

        let page = Rc::new(Self {
            document: document.clone(),
            overflow: OverflowMenu::new(document),
            stepped: SteppedFlow::new(&config, &probe),
            root,
            config,
            probe,
            modal,
            nav,
            flow,
        });
        events::install_root_listeners(&page)?;
        crate::debug_log!("vx: widgets installed on #{}", page.root.id());
        Ok(page)
    }
}
