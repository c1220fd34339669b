//! Worker bond section of the request form

use crate::shared::component_error::ComponentError;
use crate::shared::config::FormConfig;
use crate::shared::dom::{DomEvent, FormDom};
use crate::shared::form_utils::{FieldToggler, ToggleOptions};
use crate::shared::page_info::require_field;
use contracts::enums::EmployeeBond;
use std::rc::Rc;

const COMPONENT: &str = "RequestContract";

pub const BOND_FIELD: &str = "vinculo";
pub const LINKED_COMPANY_FIELD: &str = "empresaVinculadaRazaoSocial";

#[derive(Clone)]
pub struct RequestContract<D: FormDom> {
    dom: D,
    bonds: Vec<D::Node>,
    linked_company: Vec<D::Node>,
    toggler: FieldToggler<D>,
}

impl<D: FormDom> RequestContract<D> {
    pub fn mount(dom: D, config: &FormConfig) -> Result<Self, ComponentError> {
        let contract = Self {
            bonds: require_field(&dom, &config.page, COMPONENT, BOND_FIELD)?,
            linked_company: require_field(&dom, &config.page, COMPONENT, LINKED_COMPANY_FIELD)?,
            toggler: FieldToggler::new(dom.clone(), ToggleOptions::form_groups(config)),
            dom,
        };

        contract.handle_employee_bond();

        for bond in &contract.bonds {
            let this = contract.clone();
            contract.dom.listen(
                bond,
                &[DomEvent::Change],
                Rc::new(move || this.handle_employee_bond()),
            );
        }

        Ok(contract)
    }

    /// Bond of the checked `vinculo` radio, if any
    pub fn employee_bond(&self) -> Option<EmployeeBond> {
        self.bonds
            .iter()
            .find(|bond| self.dom.is_checked(bond))
            .and_then(|bond| EmployeeBond::from_code(&self.dom.value(bond)))
    }

    fn handle_employee_bond(&self) {
        let linked = self
            .employee_bond()
            .map_or(false, |bond| bond.requires_linked_company());

        self.toggler.set_visible(&self.linked_company, linked);
    }
}
