//! CPF screening against the blocklist datasource

pub mod request;
pub mod response;

pub use request::ScreeningQuery;
pub use response::{DatasourceEnvelope, DatasourceFields, DatasourceRecord};

use crate::enums::BlockType;

/// Fixed Orquestra datasource that lists blocked CPFs
pub const BLOCKLIST_DATASOURCE_URL: &str = concat!(
    "https://cmpc.orquestrabpm.com.br/api/internal/legacy/1.0/datasource/get/1.0",
    "/qw0Xk6xWKL563BI8VvBqJk4y6mPjvrmxBQq6eoT8pt8ur8KUEZgwGJytjQ7dnXqMrz9lai2J91TCIoxPbrW8Mg__"
);

pub const INVALID_FORMAT_MESSAGE: &str = "O CPF informado não possui um formato válido";
pub const VALID_MESSAGE: &str = "O CPF informado é válido!";

/// Blocklist match for a CPF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRecord {
    pub cpf: String,
    pub block_type: Option<BlockType>,
}

impl BlockRecord {
    pub fn message(&self) -> &'static str {
        match self.block_type {
            Some(BlockType::PendingItems) => "O CPF informado tem pendências a tratar com a META",
            Some(BlockType::Blocked) => "O CPF informado está bloqueado pela CMPC",
            None => "O CPF informado não é permitido",
        }
    }
}

/// Result of a screening round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreeningOutcome {
    Clear,
    Blocked(BlockRecord),
}

impl ScreeningOutcome {
    /// Only the first match counts; no match means the CPF is not blocked
    pub fn from_envelope(envelope: DatasourceEnvelope) -> Self {
        match envelope.success.into_iter().next() {
            None => ScreeningOutcome::Clear,
            Some(record) => ScreeningOutcome::Blocked(BlockRecord {
                cpf: record.cod,
                block_type: record
                    .fields
                    .tipo_bloqueio
                    .as_deref()
                    .and_then(BlockType::from_code),
            }),
        }
    }
}
