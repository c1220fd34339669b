//! Identifiers the form renderer writes into every task page

use crate::shared::component_error::{ComponentError, PageContext};
use crate::shared::config::PageConfig;
use crate::shared::dom::{FormDom, Selector};
use contracts::enums::TaskAlias;

fn value_by_id<D: FormDom>(dom: &D, id: &str) -> Option<String> {
    dom.query(None, &Selector::id(id))
        .map(|element| dom.value(&element))
}

/// Workflow stage of the current task; `None` outside a task page
pub fn task_alias<D: FormDom>(dom: &D, config: &PageConfig) -> Option<TaskAlias> {
    value_by_id(dom, &config.alias_input).map(|alias| TaskAlias::from_code(&alias))
}

pub fn page_context<D: FormDom>(dom: &D, config: &PageConfig) -> PageContext {
    PageContext {
        codflow_execute: value_by_id(dom, &config.codflow_execute_input),
        codflow: value_by_id(dom, &config.codflow_input),
    }
}

/// Resolve a structural element or fail with the page context attached
pub fn require_element<D: FormDom>(
    dom: &D,
    config: &PageConfig,
    component: &str,
    selector: &str,
) -> Result<D::Node, ComponentError> {
    dom.query(None, &Selector::from(selector)).ok_or_else(|| {
        ComponentError::element_not_found(component, selector, page_context(dom, config))
    })
}

/// Resolve the controls of a field id or fail with the page context attached
pub fn require_field<D: FormDom>(
    dom: &D,
    config: &PageConfig,
    component: &str,
    field_id: &str,
) -> Result<Vec<D::Node>, ComponentError> {
    let fields = dom.query_all(None, &Selector::xname(field_id));
    if fields.is_empty() {
        return Err(ComponentError::field_not_found(
            component,
            field_id,
            page_context(dom, config),
        ));
    }
    Ok(fields)
}
