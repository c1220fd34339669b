//! Document tables per workflow stage.
//!
//! The request stage fills the tables and never sees the analysis columns.
//! Analysis stages review the table they own; correction reviews all three.

use crate::domain::a004_documents_general::DocumentsGeneral;
use crate::domain::a005_documents_security::DocumentsSecurity;
use crate::domain::a006_documents_health::DocumentsHealth;
use crate::shared::component_error::ComponentError;
use crate::shared::config::FormConfig;
use crate::shared::dom::{FormDom, Selector};
use crate::shared::page_info::require_element;
use crate::shared::table_docs::{TableDocs, TableDocsOptions};
use contracts::domain::a004_document_analysis::{
    analysis_tables, approve_buttons_for, reject_decisions, PENDING_ITEMS_BUTTON,
};
use contracts::enums::TaskAlias;

const COMPONENT: &str = "DocumentsTables";

pub struct RequestDocuments<D: FormDom> {
    pub general: DocumentsGeneral<D>,
    pub security: DocumentsSecurity<D>,
    pub health: DocumentsHealth<D>,
}

pub enum DocumentsTables<D: FormDom> {
    Request(RequestDocuments<D>),
    Analysis(Vec<TableDocs<D>>),
}

impl<D: FormDom> DocumentsTables<D> {
    /// `None` on stages without document tables
    pub fn mount(
        dom: D,
        config: &FormConfig,
        alias: &TaskAlias,
    ) -> Result<Option<Self>, ComponentError> {
        match alias {
            TaskAlias::Request => Self::mount_request(dom, config).map(Some),
            alias if alias.is_static() => Self::mount_analysis(dom, config, alias).map(Some),
            _ => {
                log::debug!("{}: nothing to mount on '{}'", COMPONENT, alias.code());
                Ok(None)
            }
        }
    }

    fn mount_request(dom: D, config: &FormConfig) -> Result<Self, ComponentError> {
        let documents = RequestDocuments {
            general: DocumentsGeneral::mount(dom.clone(), config)?,
            security: DocumentsSecurity::mount(dom.clone(), config)?,
            health: DocumentsHealth::mount(dom.clone(), config)?,
        };

        let analysis_column = Selector::any().attr(&TableDocsOptions::default().data_attr);
        for analysis in analysis_tables() {
            let table = require_element(&dom, &config.page, COMPONENT, analysis.table)?;
            for column in dom.query_all(Some(&table), &analysis_column) {
                dom.add_class(&column, &config.visibility.hide_class);
            }
        }

        Ok(DocumentsTables::Request(documents))
    }

    fn mount_analysis(dom: D, config: &FormConfig, alias: &TaskAlias) -> Result<Self, ComponentError> {
        let mut controllers = Vec::new();

        for analysis in analysis_tables() {
            let table = require_element(&dom, &config.page, COMPONENT, analysis.table)?;

            if !analysis.is_active_on(alias) {
                dom.add_class(&table, &config.visibility.hide_class);
                continue;
            }

            let options = TableDocsOptions {
                approve_buttons: approve_buttons_for(alias).into_iter().map(String::from).collect(),
                reject_buttons: vec![PENDING_ITEMS_BUTTON.to_string()],
                reject_decisions: reject_decisions(),
                ..TableDocsOptions::default()
            };
            controllers.push(TableDocs::mount(dom.clone(), table, options, config));
        }

        Ok(DocumentsTables::Analysis(controllers))
    }
}
