//! Health documents: each issue date fills its validity date

use crate::shared::component_error::ComponentError;
use crate::shared::config::FormConfig;
use crate::shared::dom::{DomEvent, FormDom};
use crate::shared::page_info::require_field;
use contracts::domain::a003_health_documents::VALIDITY_PAIRS;
use contracts::shared::date_utils::{expiry_date, HEALTH_DOCUMENT_VALIDITY_YEARS};
use std::rc::Rc;

const COMPONENT: &str = "DocumentsHealth";

#[derive(Clone)]
pub struct DocumentsHealth<D: FormDom> {
    dom: D,
}

impl<D: FormDom> DocumentsHealth<D> {
    pub fn mount(dom: D, config: &FormConfig) -> Result<Self, ComponentError> {
        let documents = Self { dom };

        for pair in VALIDITY_PAIRS {
            let issue = require_field(&documents.dom, &config.page, COMPONENT, pair.issue)?.remove(0);
            let validity = require_field(&documents.dom, &config.page, COMPONENT, pair.validity)?.remove(0);

            let this = documents.clone();
            let source = issue.clone();
            documents.dom.listen(
                &issue,
                &[DomEvent::Change],
                Rc::new(move || this.set_validity(&source, &validity)),
            );
        }

        Ok(documents)
    }

    fn set_validity(&self, issue: &D::Node, validity: &D::Node) {
        let issued_at = self.dom.value(issue);
        match expiry_date(&issued_at, HEALTH_DOCUMENT_VALIDITY_YEARS) {
            Ok(expiry) => self.dom.set_value(validity, &expiry),
            Err(err) => {
                log::warn!("{}: {}", COMPONENT, err);
                self.dom.set_value(validity, "");
            }
        }
    }
}
