//! Analysis table controller.
//!
//! Each analysed row has a decision select (`select[xname^=inpanalise]`)
//! inside a `[data-analysis]` cell and an observation textarea. A single
//! rejected row disables the approve buttons and enables the reject ones.

use crate::shared::config::FormConfig;
use crate::shared::dom::{ControlKind, DomEvent, FormDom, Selector};
use crate::shared::form_utils::{is_file_field, FieldToggler, ToggleOptions};
use contracts::enums::AnalysisDecision;
use std::rc::Rc;

const ROW_ERROR_CLASS: &str = "-error";

/// What a rejection does to the row's observation field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleMode {
    #[default]
    Visibility,
    Required,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDocsOptions {
    pub data_attr: String,
    pub toggle_mode: ToggleMode,
    pub field_prefix: String,
    pub approve_buttons: Vec<String>,
    pub reject_buttons: Vec<String>,
    pub reject_decisions: Vec<AnalysisDecision>,
}

impl Default for TableDocsOptions {
    fn default() -> Self {
        Self {
            data_attr: "data-analysis".to_string(),
            toggle_mode: ToggleMode::Visibility,
            field_prefix: "analise".to_string(),
            approve_buttons: vec!["#btnFinish".to_string(), "#BtnSend".to_string()],
            reject_buttons: Vec::new(),
            reject_decisions: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct TableDocs<D: FormDom> {
    dom: D,
    table: D::Node,
    options: Rc<TableDocsOptions>,
    approve_buttons: Vec<D::Node>,
    reject_buttons: Vec<D::Node>,
    analysis_fields: Vec<D::Node>,
    observations: FieldToggler<D>,
}

impl<D: FormDom> TableDocs<D> {
    pub fn mount(dom: D, table: D::Node, options: TableDocsOptions, config: &FormConfig) -> Self {
        let buttons = |refs: &[String]| -> Vec<D::Node> {
            refs.iter()
                .filter_map(|selector| {
                    let button = dom.query(None, &Selector::from(selector.as_str()));
                    if button.is_none() {
                        log::debug!("TableDocs: button '{}' not on this page", selector);
                    }
                    button
                })
                .collect()
        };

        let decision = Selector::tag("select").attr_prefix("xname", &format!("inp{}", options.field_prefix));
        let analysis_fields = dom
            .query_all(Some(&table), &Selector::any().attr(&options.data_attr))
            .into_iter()
            .filter_map(|cell| dom.query(Some(&cell), &decision))
            .collect();

        let controller = Self {
            approve_buttons: buttons(&options.approve_buttons),
            reject_buttons: buttons(&options.reject_buttons),
            observations: FieldToggler::new(dom.clone(), ToggleOptions::form_groups(config)),
            analysis_fields,
            options: Rc::new(options),
            table,
            dom,
        };

        controller.add_triggers();
        controller.render_table();

        log::debug!(
            "TableDocs mounted with {} analysis field(s)",
            controller.analysis_fields.len()
        );
        controller
    }

    pub fn table(&self) -> &D::Node {
        &self.table
    }

    pub fn analysis_fields(&self) -> &[D::Node] {
        &self.analysis_fields
    }

    fn is_rejected(&self, value: &str) -> bool {
        self.options
            .reject_decisions
            .contains(&AnalysisDecision::from_code(value))
    }

    /// Any analysed row currently holds a reject decision
    pub fn has_rejection(&self) -> bool {
        self.analysis_fields
            .iter()
            .any(|field| self.is_rejected(&self.dom.value(field)))
    }

    fn add_triggers(&self) {
        for field in &self.analysis_fields {
            self.handle_analysis();
            self.handle_observation(field);

            let this = self.clone();
            let source = field.clone();
            self.dom.listen(
                field,
                &[DomEvent::Change],
                Rc::new(move || {
                    this.handle_analysis();
                    this.handle_observation(&source);
                }),
            );
        }
    }

    fn handle_analysis(&self) {
        let rejected = self.has_rejection();
        for button in &self.approve_buttons {
            self.dom.set_disabled(button, rejected);
        }
        for button in &self.reject_buttons {
            self.dom.set_disabled(button, !rejected);
        }
    }

    fn handle_observation(&self, analysis: &D::Node) {
        let observation = self
            .dom
            .closest(analysis, &Selector::tag("tr"))
            .and_then(|row| self.dom.query(Some(&row), &Selector::tag("textarea")));
        let Some(observation) = observation else {
            log::debug!("TableDocs: no observation next to {:?}", analysis);
            return;
        };

        let fields = [observation];
        let rejected = self.is_rejected(&self.dom.value(analysis));
        match (self.options.toggle_mode, rejected) {
            (ToggleMode::Required, true) => self.observations.add_required(&fields),
            (ToggleMode::Required, false) => self.observations.remove_required(&fields),
            (ToggleMode::Visibility, visible) => self.observations.set_visible(&fields, visible),
        }
    }

    fn render_table(&self) {
        for row in self.dom.query_all(Some(&self.table), &Selector::tag("tr")) {
            // Document rows keep their attachment in the second cell
            let attachment = self
                .dom
                .children(&row)
                .get(1)
                .filter(|cell| self.dom.tag_name(cell) == "td")
                .and_then(|cell| {
                    self.dom
                        .query(Some(cell), &Selector::tag("input").attr_eq("xtype", "FILE"))
                });

            match attachment {
                Some(file) if self.dom.value(&file).is_empty() => {
                    self.dom.set_display(&row, "none");
                    for field in self.dom.query_all(Some(&row), &Selector::any().attr("xname")) {
                        self.dom.set_attribute(&field, "required", "N");
                    }
                }
                _ => {}
            }
        }

        let readonly_decision = Selector::tag("input")
            .attr_prefix("xname", &format!("inp{}", self.options.field_prefix))
            .attr_eq("type", "hidden")
            .attr_eq("xtype", "SELECT");

        for cell in self
            .dom
            .query_all(Some(&self.table), &Selector::any().attr(&self.options.data_attr))
        {
            self.dom.set_display(&cell, "table-cell");

            for field in self.dom.query_all(Some(&cell), &readonly_decision) {
                let Some(row) = self.dom.closest(&field, &Selector::tag("tr")) else {
                    continue;
                };

                if self.is_rejected(&self.dom.value(&field)) {
                    self.dom.add_class(&row, ROW_ERROR_CLASS);
                } else {
                    self.render_row_readonly(&row);
                    if let Some(button) = self.dom.query(Some(&row), &Selector::tag("button")) {
                        self.dom.set_display(&button, "none");
                    }
                }
            }
        }
    }

    // Replace editable selects and text inputs with their value as static text
    fn render_row_readonly(&self, row: &D::Node) {
        let editable = self
            .dom
            .query_all(Some(row), &Selector::any().attr("xname"))
            .into_iter()
            .filter(|field| match self.dom.tag_name(field).as_str() {
                "select" => true,
                "input" => {
                    self.dom.control_kind(field) == ControlKind::Text
                        && !is_file_field(&self.dom, field)
                }
                _ => false,
            });

        for field in editable {
            let value = self.dom.value(&field);
            self.dom.set_display(&field, "none");
            self.dom.insert_text_after(&field, &value);
        }
    }
}
