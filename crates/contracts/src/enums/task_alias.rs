use serde::{Deserialize, Serialize};

/// Workflow stage the form is rendered for (`inpDsFlowElementAlias`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskAlias {
    Request,
    GeneralAnalysis,
    SecurityAnalysis,
    HealthAnalysis,
    Correction,
    Other(String),
}

impl TaskAlias {
    pub fn code(&self) -> &str {
        match self {
            TaskAlias::Request => "requisicao",
            TaskAlias::GeneralAnalysis => "analise-geral",
            TaskAlias::SecurityAnalysis => "analise-seguranca",
            TaskAlias::HealthAnalysis => "analise-saude",
            TaskAlias::Correction => "correcao",
            TaskAlias::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "requisicao" => TaskAlias::Request,
            "analise-geral" => TaskAlias::GeneralAnalysis,
            "analise-seguranca" => TaskAlias::SecurityAnalysis,
            "analise-saude" => TaskAlias::HealthAnalysis,
            "correcao" => TaskAlias::Correction,
            other => TaskAlias::Other(other.to_string()),
        }
    }

    pub fn is_analysis(&self) -> bool {
        matches!(
            self,
            TaskAlias::GeneralAnalysis | TaskAlias::SecurityAnalysis | TaskAlias::HealthAnalysis
        )
    }

    /// Stages where the request data is already filled and shown as cards
    pub fn is_static(&self) -> bool {
        self.is_analysis() || matches!(self, TaskAlias::Correction)
    }

    /// Stages where the employee data can no longer be edited
    pub fn is_readonly(&self) -> bool {
        matches!(
            self,
            TaskAlias::SecurityAnalysis | TaskAlias::HealthAnalysis | TaskAlias::Correction
        )
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TaskAlias::Other(_))
    }
}
