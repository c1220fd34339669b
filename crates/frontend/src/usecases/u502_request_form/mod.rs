//! Request form: contract, company and employee sections

use crate::domain::a001_request_contract::RequestContract;
use crate::domain::a002_request_company::RequestCompany;
use crate::domain::a003_request_employee::RequestEmployee;
use crate::shared::component_error::ComponentError;
use crate::shared::config::FormConfig;
use crate::shared::dom::FormDom;
use crate::usecases::u501_cpf_screening::CpfScreening;
use contracts::enums::TaskAlias;
use std::rc::Rc;

pub struct RequestForm<D: FormDom> {
    pub contract: Option<RequestContract<D>>,
    pub company: RequestCompany<D>,
    pub employee: RequestEmployee<D>,
}

impl<D: FormDom> RequestForm<D> {
    /// `None` on stages the form does not handle
    pub fn mount(
        dom: D,
        config: &FormConfig,
        alias: &TaskAlias,
        screening: Rc<dyn CpfScreening>,
    ) -> Result<Option<Self>, ComponentError> {
        if !alias.is_known() {
            log::debug!("RequestForm: nothing to mount on '{}'", alias.code());
            return Ok(None);
        }

        let contract = match alias {
            TaskAlias::Request => Some(RequestContract::mount(dom.clone(), config)?),
            _ => None,
        };

        Ok(Some(Self {
            contract,
            company: RequestCompany::mount(dom.clone(), config, alias.is_static())?,
            employee: RequestEmployee::mount(dom, config, alias, screening)?,
        }))
    }
}
