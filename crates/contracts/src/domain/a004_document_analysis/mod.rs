//! Document tables reviewed during the analysis stages

use crate::enums::{AnalysisDecision, TaskAlias};

pub const GENERAL_TABLE: &str = "#tbl-doumentos-gerais";
pub const SECURITY_TABLE: &str = "#tbl-doumentos-seguranca";
pub const HEALTH_TABLE: &str = "#tbl-doumentos-saude";

/// Button that sends the request back with pending items
pub const PENDING_ITEMS_BUTTON: &str = "#customBtn_Pendências";

/// A document table and the analysis stage responsible for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTable {
    pub table: &'static str,
    pub stage: TaskAlias,
}

pub fn analysis_tables() -> Vec<AnalysisTable> {
    vec![
        AnalysisTable {
            table: GENERAL_TABLE,
            stage: TaskAlias::GeneralAnalysis,
        },
        AnalysisTable {
            table: SECURITY_TABLE,
            stage: TaskAlias::SecurityAnalysis,
        },
        AnalysisTable {
            table: HEALTH_TABLE,
            stage: TaskAlias::HealthAnalysis,
        },
    ]
}

impl AnalysisTable {
    /// The table is interactive on its own stage and on correction
    pub fn is_active_on(&self, alias: &TaskAlias) -> bool {
        *alias == self.stage || *alias == TaskAlias::Correction
    }
}

/// Buttons that conclude the task when nothing is rejected
pub fn approve_buttons_for(alias: &TaskAlias) -> Vec<&'static str> {
    match alias {
        TaskAlias::GeneralAnalysis => vec!["#btnApprove", "#BtnReject"],
        _ => vec!["#btnFinish"],
    }
}

/// Decisions that flag a document row as rejected
pub fn reject_decisions() -> Vec<AnalysisDecision> {
    vec![AnalysisDecision::Rejected]
}
