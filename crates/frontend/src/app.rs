//! Composition root: everything the page needs is mounted from here, once.

use crate::shared::binder::Binder;
use crate::shared::component_error::ComponentError;
use crate::shared::config::{FormConfig, CONFIG_ELEMENT_ID};
use crate::shared::dom::{FormDom, Selector};
use crate::shared::page_info::task_alias;
use crate::usecases::u501_cpf_screening::CpfScreening;
use crate::usecases::u502_request_form::RequestForm;
use crate::usecases::u503_documents_tables::DocumentsTables;
use contracts::enums::TaskAlias;
use contracts::shared::filters::FilterRegistry;
use std::rc::Rc;

/// Configuration embedded in the page, or the defaults
pub fn load_config<D: FormDom>(dom: &D) -> FormConfig {
    let source = dom
        .query(None, &Selector::id(CONFIG_ELEMENT_ID))
        .map(|element| dom.text(&element));
    FormConfig::load(source.as_deref())
}

pub struct App<D: FormDom> {
    pub alias: Option<TaskAlias>,
    pub binder: Option<Binder<D>>,
    pub request_form: Option<RequestForm<D>>,
    pub documents: Option<DocumentsTables<D>>,
    /// Modules that failed to mount; the others keep working
    pub errors: Vec<ComponentError>,
}

impl<D: FormDom> App<D> {
    pub fn mount(dom: D, config: &FormConfig, screening: Rc<dyn CpfScreening>) -> Self {
        let alias = task_alias(&dom, &config.page);
        log::info!(
            "Mounting form on stage '{}'",
            alias.as_ref().map_or("-", TaskAlias::code)
        );

        let mut errors = Vec::new();

        let binder = Binder::mount(dom.clone(), config, Rc::new(FilterRegistry::builtin()));
        let binder = collect(binder, &mut errors);

        let (request_form, documents) = match &alias {
            Some(alias) => {
                let form = RequestForm::mount(dom.clone(), config, alias, screening);
                let documents = DocumentsTables::mount(dom, config, alias);
                (
                    collect(form, &mut errors).flatten(),
                    collect(documents, &mut errors).flatten(),
                )
            }
            None => (None, None),
        };

        Self {
            alias,
            binder,
            request_form,
            documents,
            errors,
        }
    }
}

fn collect<T>(result: Result<T, ComponentError>, errors: &mut Vec<ComponentError>) -> Option<T> {
    match result {
        Ok(mounted) => Some(mounted),
        Err(err) => {
            log::error!(
                "[{}] {} (codflow_execute: {:?}, codflow: {:?})",
                err.type_tag(),
                err,
                err.context().codflow_execute,
                err.context().codflow
            );
            errors.push(err);
            None
        }
    }
}
