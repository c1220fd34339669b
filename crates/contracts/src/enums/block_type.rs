use serde::{Deserialize, Serialize};

/// Classification of a CPF found in the blocklist datasource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockType {
    /// Pending items to settle with META (`P`)
    PendingItems,
    /// Hard block (`B`)
    Blocked,
}

impl BlockType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "P" => Some(BlockType::PendingItems),
            "B" => Some(BlockType::Blocked),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BlockType::PendingItems => "P",
            BlockType::Blocked => "B",
        }
    }
}
