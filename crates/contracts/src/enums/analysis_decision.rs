use serde::{Deserialize, Serialize};

/// Decision selected for a document row in an analysis table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisDecision {
    Pending,
    Approved,
    Rejected,
    Other(String),
}

impl AnalysisDecision {
    pub fn code(&self) -> &str {
        match self {
            AnalysisDecision::Pending => "",
            AnalysisDecision::Approved => "Aprovado",
            AnalysisDecision::Rejected => "Reprovado",
            AnalysisDecision::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "" => AnalysisDecision::Pending,
            "Aprovado" => AnalysisDecision::Approved,
            "Reprovado" => AnalysisDecision::Rejected,
            other => AnalysisDecision::Other(other.to_string()),
        }
    }
}
