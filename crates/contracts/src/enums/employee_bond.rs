use serde::{Deserialize, Serialize};

const SUBCONTRACTED: &str =
    "Empresa subcontratada por outra empresa, diretamente contratada pela CMPC";

/// Bond between the worker and the contracting company (`vinculo` radio group)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeBond {
    /// Company subcontracted by another company that CMPC hired directly
    Subcontracted,
    Other(String),
}

impl EmployeeBond {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "" => None,
            SUBCONTRACTED => Some(EmployeeBond::Subcontracted),
            other => Some(EmployeeBond::Other(other.to_string())),
        }
    }

    /// Whether a linked (intermediate) company has to be informed
    pub fn requires_linked_company(&self) -> bool {
        matches!(self, EmployeeBond::Subcontracted)
    }
}
