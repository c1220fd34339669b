//! Task action buttons rendered by the workflow (`#controllers button.btn`)

use crate::shared::config::PageConfig;
use crate::shared::dom::{FormDom, Selector};

#[derive(Clone)]
pub struct Controllers<D: FormDom> {
    dom: D,
    container: Selector,
    buttons: Selector,
}

impl<D: FormDom> Controllers<D> {
    pub fn new(dom: D, config: &PageConfig) -> Self {
        Self {
            dom,
            container: Selector::from(config.controllers.as_str()),
            buttons: Selector::from(config.controller_buttons.as_str()),
        }
    }

    fn buttons(&self) -> Vec<D::Node> {
        match self.dom.query(None, &self.container) {
            Some(container) => self.dom.query_all(Some(&container), &self.buttons),
            None => {
                log::debug!("No task controllers ('{}') on this page", self.container);
                Vec::new()
            }
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        for button in self.buttons() {
            self.dom.set_disabled(&button, !enabled);
        }
    }

    pub fn enable(&self) {
        self.set_enabled(true);
    }

    pub fn disable(&self) {
        self.set_enabled(false);
    }
}
