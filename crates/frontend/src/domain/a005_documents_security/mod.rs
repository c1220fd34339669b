//! Security documents table (`#tbl-doumentos-seguranca`) on the request stage

use crate::shared::component_error::ComponentError;
use crate::shared::config::FormConfig;
use crate::shared::dom::{DomEvent, FormDom};
use crate::shared::form_utils::{locate, on_attachment_change, FieldToggler, ToggleOptions};
use crate::shared::page_info::{require_element, require_field};
use contracts::domain::a004_document_analysis::SECURITY_TABLE;
use std::rc::Rc;

const COMPONENT: &str = "DocumentsSecurity";

pub const NR10_FIELD: &str = "anexo_Nr10";
pub const NR10_AUTHORIZATION_FIELD: &str = "anexo_Nr10CartaAutorizacao";
/// Checkbox asking for a badge; forms without it always show the table
pub const BADGE_FIELD: &str = "colaboradorHabilitacoesCracha";

#[derive(Clone)]
pub struct DocumentsSecurity<D: FormDom> {
    dom: D,
    authorization: Vec<D::Node>,
    toggler: FieldToggler<D>,
}

impl<D: FormDom> DocumentsSecurity<D> {
    pub fn mount(dom: D, config: &FormConfig) -> Result<Self, ComponentError> {
        let nr10 = require_field(&dom, &config.page, COMPONENT, NR10_FIELD)?.remove(0);

        let documents = Self {
            authorization: require_field(&dom, &config.page, COMPONENT, NR10_AUTHORIZATION_FIELD)?,
            toggler: FieldToggler::new(dom.clone(), ToggleOptions::rows(config)),
            dom,
        };

        if let Some(badge) = locate(&documents.dom, BADGE_FIELD).into_iter().next() {
            let table = require_element(&documents.dom, &config.page, COMPONENT, SECURITY_TABLE)?;
            documents.handle_badge(&badge, &table);

            let this = documents.clone();
            let source = badge.clone();
            documents.dom.listen(
                &badge,
                &[DomEvent::Change],
                Rc::new(move || this.handle_badge(&source, &table)),
            );
        }

        let this = documents.clone();
        on_attachment_change(
            &documents.dom,
            &nr10,
            Rc::new(move |path| this.on_nr10_change(path.is_some())),
        );

        Ok(documents)
    }

    fn handle_badge(&self, badge: &D::Node, table: &D::Node) {
        if self.dom.is_checked(badge) {
            self.toggler.show_table(table);
        } else {
            self.toggler.hide_table(table);
        }
    }

    // An NR-10 certificate needs the employer's authorization letter
    fn on_nr10_change(&self, attached: bool) {
        if attached {
            self.toggler.add_required(&self.authorization);
        } else {
            self.toggler.remove_required(&self.authorization);
        }
    }
}
