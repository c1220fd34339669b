//! General documents table (`#tbl-doumentos-gerais`) on the request stage

use crate::domain::a003_request_employee::CONTRACT_TYPE_FIELD;
use crate::shared::component_error::ComponentError;
use crate::shared::config::FormConfig;
use crate::shared::dom::{DomEvent, FormDom};
use crate::shared::form_utils::{
    attachment_delete, locate, on_attachment_change, FieldToggler, ToggleOptions,
};
use crate::shared::page_info::{require_element, require_field};
use contracts::domain::a002_general_documents::{
    check_extension, general_document_rules, photo_extension_message, DocumentRule, PHOTO_EXTENSIONS,
    PHOTO_FIELD,
};
use contracts::domain::a004_document_analysis::GENERAL_TABLE;
use contracts::enums::ContractType;
use std::rc::Rc;

const COMPONENT: &str = "DocumentsGeneral";

#[derive(Clone)]
pub struct DocumentsGeneral<D: FormDom> {
    dom: D,
    table: D::Node,
    contract_type: D::Node,
    rules: Rc<Vec<DocumentRule>>,
    toggler: FieldToggler<D>,
}

impl<D: FormDom> DocumentsGeneral<D> {
    pub fn mount(dom: D, config: &FormConfig) -> Result<Self, ComponentError> {
        let table = require_element(&dom, &config.page, COMPONENT, GENERAL_TABLE)?;
        let contract_type = require_field(&dom, &config.page, COMPONENT, CONTRACT_TYPE_FIELD)?.remove(0);

        let documents = Self {
            toggler: FieldToggler::new(dom.clone(), ToggleOptions::rows(config)),
            rules: Rc::new(general_document_rules()),
            contract_type,
            table,
            dom,
        };

        documents.set_table_visibility();

        let this = documents.clone();
        documents.dom.listen(
            &documents.contract_type,
            &[DomEvent::Change],
            Rc::new(move || this.set_table_visibility()),
        );

        // The 3x4 photo only exists on some request forms
        match locate(&documents.dom, PHOTO_FIELD).into_iter().next() {
            Some(photo) => {
                let this = documents.clone();
                let field = photo.clone();
                on_attachment_change(
                    &documents.dom,
                    &photo,
                    Rc::new(move |path| this.validate_photo(&field, path.as_deref())),
                );
            }
            None => log::debug!("{}: no '{}' field", COMPONENT, PHOTO_FIELD),
        }

        Ok(documents)
    }

    fn set_table_visibility(&self) {
        let contract = ContractType::from_code(&self.dom.value(&self.contract_type));

        if contract.is_some() {
            self.toggler.show_table(&self.table);
        } else {
            self.toggler.hide_table(&self.table);
        }

        for rule in self.rules.iter() {
            let fields = self.toggler.locate(rule.field);
            if fields.is_empty() {
                log::debug!("{}: document '{}' not on this form", COMPONENT, rule.field);
                continue;
            }
            self.toggler
                .set_visible(&fields, rule.is_visible_for(contract.as_ref()));
        }
    }

    fn validate_photo(&self, photo: &D::Node, path: Option<&str>) {
        let Some(path) = path else {
            return;
        };

        if let Err(extension) = check_extension(path, &PHOTO_EXTENSIONS) {
            self.dom.alert(&photo_extension_message(&extension));
            if let Some(delete) = attachment_delete(&self.dom, photo) {
                self.dom.click(&delete);
            }
        }
    }
}
