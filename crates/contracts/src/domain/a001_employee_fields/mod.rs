//! Employee section of the request form

use crate::enums::ContractType;

/// Nationality option id the renderer uses for "Brasileiro"
pub const BRAZILIAN_NATIONALITY_ID: &str = "10";

/// Fields shown for every contract type
pub const DEFAULT_FIELDS: [&str; 4] = [
    "colaboradorNome",
    "colaboradorSexo",
    "colaboradorDataNascimento",
    "colaboradorCargo",
];

/// Brazilian workers: CPF and work card data
pub const NATIVE_FIELDS: [&str; 7] = [
    "colaboradorCpf",
    "colaboradorCtps",
    "colaboradorCtpsSerie",
    "colaboradorCtpsExpedicao",
    "colaboradorCtpsUf",
    "colaboradorCtpsPis",
    "colaboradorCptsAdmissao",
];

/// Foreign workers: RNE and visa data
pub const FOREIGN_FIELDS: [&str; 5] = [
    "colaboradorRne",
    "colaboradorNacionalidade",
    "colaboradorDataChegadaBrasil",
    "colaboradorTipoVisto",
    "colaboradorVistoValidade",
];

/// Card elements (read-only stages) that only apply to Brazilian workers
pub const NATIVE_CARD_PARTS: [&str; 3] = [
    "#employee-card-cpf",
    "#employee-card-startAt",
    "#employee-card-native",
];

/// Card elements that only apply to foreign workers
pub const FOREIGN_CARD_PARTS: [&str; 2] = ["#employee-card-rne", "#employee-card-foreign"];

/// Which employee form a contract type needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeForm {
    Native,
    Foreign,
}

impl EmployeeForm {
    pub fn for_contract(contract: Option<&ContractType>) -> Self {
        match contract {
            Some(contract) if contract.is_foreign() => EmployeeForm::Foreign,
            _ => EmployeeForm::Native,
        }
    }

    /// `(shown, hidden)` field ids
    pub fn field_split(&self) -> (&'static [&'static str], &'static [&'static str]) {
        match self {
            EmployeeForm::Native => (&NATIVE_FIELDS, &FOREIGN_FIELDS),
            EmployeeForm::Foreign => (&FOREIGN_FIELDS, &NATIVE_FIELDS),
        }
    }

    /// Card parts to hide on read-only stages
    pub fn hidden_card_parts(&self) -> &'static [&'static str] {
        match self {
            EmployeeForm::Native => &FOREIGN_CARD_PARTS,
            EmployeeForm::Foreign => &NATIVE_CARD_PARTS,
        }
    }

    /// Value written to the hidden nationality field on editable stages
    pub fn nationality_value(&self) -> &'static str {
        match self {
            EmployeeForm::Native => BRAZILIAN_NATIONALITY_ID,
            EmployeeForm::Foreign => "",
        }
    }
}
