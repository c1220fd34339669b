//! Company cards of the request form.
//!
//! A card summarises company fields once all of them are filled.

use crate::shared::component_error::ComponentError;
use crate::shared::config::FormConfig;
use crate::shared::dom::{DomEvent, FormDom};
use crate::shared::page_info::{require_element, require_field};
use std::rc::Rc;

const COMPONENT: &str = "RequestCompany";

pub const CONTRACTING_COMPANY_FIELD: &str = "empresaRazaoSocial";
pub const SAP_ORDER_FIELD: &str = "empresaPedidoSap";
pub const LINKED_COMPANY_FIELD: &str = "empresaVinculadaRazaoSocial";

pub const COMPANY_CARD: &str = "#company-card";
pub const LINKED_COMPANY_CARD: &str = "#linked-company-card";
pub const COMPANY_FIELDS: &str = "#company-fields";

#[derive(Clone)]
pub struct RequestCompany<D: FormDom> {
    dom: D,
    hide_class: String,
}

impl<D: FormDom> RequestCompany<D> {
    /// `readonly` stages only show the cards
    pub fn mount(dom: D, config: &FormConfig, readonly: bool) -> Result<Self, ComponentError> {
        let field = |id: &str| -> Result<D::Node, ComponentError> {
            let mut fields = require_field(&dom, &config.page, COMPONENT, id)?;
            Ok(fields.remove(0))
        };
        let contracting = field(CONTRACTING_COMPANY_FIELD)?;
        let sap_order = field(SAP_ORDER_FIELD)?;
        let linked = field(LINKED_COMPANY_FIELD)?;

        let company_card = require_element(&dom, &config.page, COMPONENT, COMPANY_CARD)?;
        let linked_card = require_element(&dom, &config.page, COMPONENT, LINKED_COMPANY_CARD)?;

        let company = Self {
            dom,
            hide_class: config.form_group.hide_class.clone(),
        };

        company.watch(vec![contracting.clone(), sap_order.clone()], company_card);
        company.watch(vec![contracting, sap_order, linked], linked_card);

        if readonly {
            let fields = require_element(&company.dom, &config.page, COMPONENT, COMPANY_FIELDS)?;
            company.dom.add_class(&fields, &company.hide_class);
        }

        Ok(company)
    }

    fn watch(&self, deps: Vec<D::Node>, card: D::Node) {
        let deps = Rc::new(deps);
        self.handle_company(&deps, &card);

        for dep in deps.iter() {
            let this = self.clone();
            let deps = deps.clone();
            let card = card.clone();
            self.dom.listen(
                dep,
                &[DomEvent::Change],
                Rc::new(move || this.handle_company(&deps, &card)),
            );
        }
    }

    fn handle_company(&self, deps: &[D::Node], card: &D::Node) {
        if deps.iter().any(|dep| self.dom.value(dep).is_empty()) {
            self.dom.add_class(card, &self.hide_class);
        } else {
            self.dom.remove_class(card, &self.hide_class);
        }
    }
}
