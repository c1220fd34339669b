//! Employee section of the request form.
//!
//! Switches between the native and foreign field sets by contract type and
//! screens the CPF: checksum first, then the blocklist datasource.

use crate::shared::component_error::ComponentError;
use crate::shared::config::FormConfig;
use crate::shared::controllers::Controllers;
use crate::shared::dom::{DomEvent, FormDom, HintTone, Selector};
use crate::shared::form_utils::{FieldToggler, ToggleOptions};
use crate::shared::page_info::{require_element, require_field};
use crate::usecases::u501_cpf_screening::{CpfScreening, RequestSequence};
use contracts::domain::a001_employee_fields::EmployeeForm;
use contracts::enums::{ContractType, TaskAlias};
use contracts::shared::tax_id::is_cpf_valid;
use contracts::usecases::u501_cpf_screening::{
    ScreeningOutcome, INVALID_FORMAT_MESSAGE, VALID_MESSAGE,
};
use std::rc::Rc;

const COMPONENT: &str = "RequestEmployee";

pub const CONTRACT_TYPE_FIELD: &str = "tipoDeContrato";
pub const CPF_FIELD: &str = "colaboradorCpf";
pub const NATIONALITY_FIELD: &str = "colaboradorNacionalidade";

pub const EMPLOYEE_CARD: &str = "#employee-card";
pub const EMPLOYEE_FIELDS: &str = "#employee-fields";

#[derive(Clone)]
pub struct RequestEmployee<D: FormDom> {
    dom: D,
    alias: TaskAlias,
    contract_type: D::Node,
    cpf: D::Node,
    nationality: D::Node,
    toggler: FieldToggler<D>,
    controllers: Controllers<D>,
    screening: Rc<dyn CpfScreening>,
    sequence: RequestSequence,
    group: Selector,
    input_wrapper: Selector,
    loading_class: String,
    hide_class: String,
    discard_stale: bool,
}

impl<D: FormDom> RequestEmployee<D> {
    pub fn mount(
        dom: D,
        config: &FormConfig,
        alias: &TaskAlias,
        screening: Rc<dyn CpfScreening>,
    ) -> Result<Self, ComponentError> {
        let field = |id: &str| -> Result<D::Node, ComponentError> {
            Ok(require_field(&dom, &config.page, COMPONENT, id)?.remove(0))
        };

        let employee = Self {
            contract_type: field(CONTRACT_TYPE_FIELD)?,
            cpf: field(CPF_FIELD)?,
            nationality: field(NATIONALITY_FIELD)?,
            toggler: FieldToggler::new(dom.clone(), ToggleOptions::form_groups(config)),
            controllers: Controllers::new(dom.clone(), &config.page),
            alias: alias.clone(),
            screening,
            sequence: RequestSequence::new(),
            group: Selector::from(config.form_group.container.as_str()),
            input_wrapper: Selector::from(config.form_group.input_wrapper.as_str()),
            loading_class: config.form_group.loading_class.clone(),
            hide_class: config.form_group.hide_class.clone(),
            discard_stale: config.screening.discard_stale,
            dom,
        };

        if alias.is_readonly() {
            employee.set_readonly(config)?;
            return Ok(employee);
        }

        employee.handle_employee_fields();
        employee.add_triggers();
        Ok(employee)
    }

    pub fn contract_type(&self) -> Option<ContractType> {
        ContractType::from_code(&self.dom.value(&self.contract_type))
    }

    fn form(&self) -> EmployeeForm {
        EmployeeForm::for_contract(self.contract_type().as_ref())
    }

    fn add_triggers(&self) {
        let this = self.clone();
        self.dom.listen(
            &self.contract_type,
            &[DomEvent::Change],
            Rc::new(move || this.handle_employee_fields()),
        );

        let this = self.clone();
        self.dom.listen(
            &self.cpf,
            &[DomEvent::Change],
            Rc::new(move || this.validate_cpf(&this.dom.value(&this.cpf))),
        );
    }

    /// Read-only stages show the summary card instead of the inputs
    fn set_readonly(&self, config: &FormConfig) -> Result<(), ComponentError> {
        let fields = require_element(&self.dom, &config.page, COMPONENT, EMPLOYEE_FIELDS)?;
        let card = require_element(&self.dom, &config.page, COMPONENT, EMPLOYEE_CARD)?;

        self.dom.add_class(&fields, &self.hide_class);
        self.dom.remove_class(&card, &self.hide_class);

        for part in self.form().hidden_card_parts() {
            match self.dom.query(Some(&card), &Selector::from(*part)) {
                Some(element) => self.dom.add_class(&element, &self.hide_class),
                None => log::debug!("{}: no card part '{}'", COMPONENT, part),
            }
        }
        Ok(())
    }

    fn handle_employee_fields(&self) {
        let form = self.form();
        let (shown, hidden) = form.field_split();

        for id in shown {
            self.toggler.show_id(id);
        }
        for id in hidden {
            self.toggler.hide_id(id);
        }

        // Static stages keep whatever nationality the request recorded
        if !self.alias.is_static() {
            self.dom.set_value(&self.nationality, form.nationality_value());
        }
    }

    /// Checksum then blocklist lookup; only the latest lookup may touch the form
    pub fn validate_cpf(&self, cpf: &str) {
        let ticket = self.sequence.next();
        self.remove_hint();
        self.set_loading(false);

        if cpf.trim().is_empty() {
            return;
        }

        if !is_cpf_valid(cpf, &[]) {
            self.controllers.disable();
            self.show_hint(INVALID_FORMAT_MESSAGE, HintTone::Error);
            return;
        }

        self.set_loading(true);
        let this = self.clone();
        self.screening.screen(
            cpf,
            Box::new(move |result| this.handle_screening(ticket, result)),
        );
    }

    fn handle_screening(&self, ticket: u64, result: Result<ScreeningOutcome, String>) {
        if self.discard_stale && !self.sequence.is_latest(ticket) {
            log::debug!("{}: discarding stale screening #{}", COMPONENT, ticket);
            return;
        }

        self.remove_hint();
        self.set_loading(false);

        match result {
            Ok(ScreeningOutcome::Clear) => {
                self.controllers.enable();
                self.show_hint(VALID_MESSAGE, HintTone::Success);
            }
            Ok(ScreeningOutcome::Blocked(record)) => {
                self.controllers.disable();
                self.show_hint(record.message(), HintTone::Error);
            }
            Err(err) => log::error!("{}: CPF screening failed: {}", COMPONENT, err),
        }
    }

    fn show_hint(&self, message: &str, tone: HintTone) {
        if let Some(group) = self.dom.closest(&self.cpf, &self.group) {
            self.dom.show_hint(&group, message, tone);
        }
    }

    fn remove_hint(&self) {
        if let Some(group) = self.dom.closest(&self.cpf, &self.group) {
            self.dom.remove_hint(&group);
        }
    }

    fn set_loading(&self, loading: bool) {
        let Some(wrapper) = self.dom.closest(&self.cpf, &self.input_wrapper) else {
            return;
        };
        if loading {
            self.dom.add_class(&wrapper, &self.loading_class);
        } else {
            self.dom.remove_class(&wrapper, &self.loading_class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::memory::{MemoryDom, NodeId};
    use crate::usecases::u501_cpf_screening::testing::ManualScreening;
    use contracts::domain::a001_employee_fields::{FOREIGN_FIELDS, NATIVE_FIELDS};
    use contracts::enums::BlockType;
    use contracts::usecases::u501_cpf_screening::BlockRecord;

    const VALID_CPF: &str = "529.982.247-25";
    const OTHER_VALID_CPF: &str = "123.456.789-09";

    struct Page {
        dom: MemoryDom,
        button: NodeId,
        card: NodeId,
        fields: NodeId,
        contract_type: NodeId,
    }

    impl Page {
        fn field(&self, id: &str) -> NodeId {
            self.dom.query(None, &Selector::xname(id)).unwrap()
        }

        fn group(&self, id: &str) -> NodeId {
            self.dom.closest(&self.field(id), &Selector::class("form-group")).unwrap()
        }

        fn is_hidden(&self, id: &str) -> bool {
            self.dom.has_class(&self.group(id), "u-hidden")
        }

        fn is_loading(&self) -> bool {
            let wrapper = self.dom.parent(&self.field(CPF_FIELD)).unwrap();
            self.dom.has_class(&wrapper, "-loading")
        }

        fn hints(&self) -> Vec<String> {
            self.dom.hints(self.group(CPF_FIELD))
        }

        fn type_cpf(&self, cpf: &str) {
            let field = self.field(CPF_FIELD);
            self.dom.set_value(&field, cpf);
            self.dom.dispatch(&field, DomEvent::Change);
        }
    }

    fn page(contract: &str) -> Page {
        let dom = MemoryDom::new();
        let root = dom.root();
        let controllers = dom.append(root, "div", &[("id", "controllers")]);
        let button = dom.append(controllers, "button", &[("class", "btn")]);

        let card = dom.append(root, "div", &[("id", "employee-card"), ("class", "u-hidden")]);
        for part in [
            "employee-card-cpf",
            "employee-card-startAt",
            "employee-card-native",
            "employee-card-rne",
            "employee-card-foreign",
        ] {
            dom.append(card, "div", &[("id", part)]);
        }

        let fields = dom.append(root, "div", &[("id", "employee-fields")]);
        let contract_type = dom.append(
            fields,
            "select",
            &[("xname", "inptipoDeContrato"), ("value", contract)],
        );
        for id in NATIVE_FIELDS.iter().chain(FOREIGN_FIELDS.iter()) {
            let group = dom.append(fields, "div", &[("class", "form-group")]);
            let wrapper = dom.append(group, "div", &[("class", "form-input")]);
            let xname = format!("inp{}", id);
            dom.append(
                wrapper,
                "input",
                &[("xname", &xname), ("type", "text"), ("value", "x"), ("required", "S")],
            );
        }

        Page { dom, button, card, fields, contract_type }
    }

    fn mount(page: &Page, alias: TaskAlias, config: &FormConfig) -> (RequestEmployee<MemoryDom>, Rc<ManualScreening>) {
        let screening = Rc::new(ManualScreening::default());
        let employee = RequestEmployee::mount(page.dom.clone(), config, &alias, screening.clone()).unwrap();
        (employee, screening)
    }

    fn blocked() -> ScreeningOutcome {
        ScreeningOutcome::Blocked(BlockRecord {
            cpf: VALID_CPF.to_string(),
            block_type: Some(BlockType::Blocked),
        })
    }

    #[test]
    fn test_foreign_contract_switches_field_sets() {
        let page = page("");
        mount(&page, TaskAlias::Request, &FormConfig::default());

        assert!(!page.is_hidden(CPF_FIELD));
        assert!(page.is_hidden("colaboradorRne"));
        assert_eq!(page.dom.value(&page.field(NATIONALITY_FIELD)), "10");

        page.dom.set_value(&page.contract_type, "Estrangeiro");
        page.dom.dispatch(&page.contract_type, DomEvent::Change);

        assert!(page.is_hidden(CPF_FIELD));
        assert!(!page.is_hidden("colaboradorRne"));
        let cpf = page.field(CPF_FIELD);
        assert_eq!(page.dom.value(&cpf), "");
        assert!(!page.dom.is_required(cpf));
        assert_eq!(page.dom.value(&page.field(NATIONALITY_FIELD)), "");

        page.dom.set_value(&page.contract_type, "PJ");
        page.dom.dispatch(&page.contract_type, DomEvent::Change);
        assert!(!page.is_hidden(CPF_FIELD));
        assert!(page.dom.is_required(cpf));
    }

    #[test]
    fn test_static_stage_keeps_nationality() {
        let page = page("Estrangeiro");
        page.dom.set_value(&page.field(NATIONALITY_FIELD), "32");
        mount(&page, TaskAlias::GeneralAnalysis, &FormConfig::default());

        assert_eq!(page.dom.value(&page.field(NATIONALITY_FIELD)), "32");
        assert!(!page.dom.has_class(&page.fields, "u-hidden"));
    }

    #[test]
    fn test_readonly_stage_shows_card() {
        let page = page("Estrangeiro");
        mount(&page, TaskAlias::HealthAnalysis, &FormConfig::default());

        assert!(page.dom.has_class(&page.fields, "u-hidden"));
        assert!(!page.dom.has_class(&page.card, "u-hidden"));

        let part = |id: &str| page.dom.query(None, &Selector::id(id)).unwrap();
        assert!(page.dom.has_class(&part("employee-card-cpf"), "u-hidden"));
        assert!(page.dom.has_class(&part("employee-card-native"), "u-hidden"));
        assert!(!page.dom.has_class(&part("employee-card-rne"), "u-hidden"));
    }

    #[test]
    fn test_invalid_cpf_disables_buttons() {
        let page = page("");
        let (_, screening) = mount(&page, TaskAlias::Request, &FormConfig::default());

        page.type_cpf("123.456.789-00");
        assert!(page.dom.is_disabled(page.button));
        assert_eq!(page.hints(), vec![INVALID_FORMAT_MESSAGE.to_string()]);
        assert!(screening.requests().is_empty());

        page.type_cpf("");
        assert!(page.hints().is_empty());
    }

    #[test]
    fn test_clear_and_blocked_screening() {
        let page = page("");
        let (_, screening) = mount(&page, TaskAlias::Request, &FormConfig::default());

        page.type_cpf(VALID_CPF);
        assert!(page.is_loading());
        assert_eq!(screening.requests(), vec![VALID_CPF.to_string()]);

        screening.resolve(0, Ok(ScreeningOutcome::Clear));
        assert!(!page.is_loading());
        assert!(!page.dom.is_disabled(page.button));
        assert_eq!(page.hints(), vec![VALID_MESSAGE.to_string()]);

        page.type_cpf(VALID_CPF);
        screening.resolve(1, Ok(blocked()));
        assert!(page.dom.is_disabled(page.button));
        assert_eq!(page.hints(), vec!["O CPF informado está bloqueado pela CMPC".to_string()]);
    }

    #[test]
    fn test_network_failure_only_clears_loading() {
        let page = page("");
        let (_, screening) = mount(&page, TaskAlias::Request, &FormConfig::default());

        page.type_cpf(VALID_CPF);
        screening.resolve(0, Err("Network error: offline".to_string()));
        assert!(!page.is_loading());
        assert!(page.hints().is_empty());
        assert!(!page.dom.is_disabled(page.button));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let page = page("");
        let (_, screening) = mount(&page, TaskAlias::Request, &FormConfig::default());

        page.type_cpf(VALID_CPF);
        page.type_cpf(OTHER_VALID_CPF);
        screening.resolve(1, Ok(ScreeningOutcome::Clear));
        screening.resolve(0, Ok(blocked()));

        assert_eq!(page.hints(), vec![VALID_MESSAGE.to_string()]);
        assert!(!page.dom.is_disabled(page.button));
    }

    #[test]
    fn test_stale_response_applies_when_not_discarding() {
        let page = page("");
        let mut config = FormConfig::default();
        config.screening.discard_stale = false;
        let (_, screening) = mount(&page, TaskAlias::Request, &config);

        page.type_cpf(VALID_CPF);
        page.type_cpf(OTHER_VALID_CPF);
        screening.resolve(1, Ok(ScreeningOutcome::Clear));
        screening.resolve(0, Ok(blocked()));

        assert_eq!(page.hints(), vec!["O CPF informado está bloqueado pela CMPC".to_string()]);
        assert!(page.dom.is_disabled(page.button));
    }
}
