use crate::shared::tax_id::digits_only;
use serde::{Deserialize, Serialize};

/// Query string of the blocklist datasource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningQuery {
    pub inpcpf: String,
}

impl ScreeningQuery {
    /// The datasource expects the CPF without punctuation
    pub fn new(cpf: &str) -> Self {
        Self {
            inpcpf: digits_only(cpf),
        }
    }
}
