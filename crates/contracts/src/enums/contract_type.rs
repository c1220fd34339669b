use serde::{Deserialize, Serialize};
use std::fmt;

/// Contract type chosen on the request form (`tipoDeContrato`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    Employee,
    Temporary,
    Intern,
    Remote,
    Company,
    Foreign,
    /// A value the form renderer offered that this crate does not know about
    Other(String),
}

impl ContractType {
    /// Literal used by the form renderer
    pub fn code(&self) -> &str {
        match self {
            ContractType::Employee => "Empregado/CLT",
            ContractType::Temporary => "Temporário",
            ContractType::Intern => "Estagiário",
            ContractType::Remote => "Remoto",
            ContractType::Company => "PJ",
            ContractType::Foreign => "Estrangeiro",
            ContractType::Other(code) => code,
        }
    }

    /// Decode a field value; an empty selection means no contract yet
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "" => None,
            "Empregado/CLT" => Some(ContractType::Employee),
            "Temporário" => Some(ContractType::Temporary),
            "Estagiário" => Some(ContractType::Intern),
            "Remoto" => Some(ContractType::Remote),
            "PJ" => Some(ContractType::Company),
            "Estrangeiro" => Some(ContractType::Foreign),
            other => Some(ContractType::Other(other.to_string())),
        }
    }

    pub fn is_foreign(&self) -> bool {
        matches!(self, ContractType::Foreign)
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
