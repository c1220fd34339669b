//! General documents table (`#tbl-doumentos-gerais`)

use crate::enums::ContractType;

/// When a document row applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentVisibility {
    Always,
    For(Vec<ContractType>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRule {
    pub field: &'static str,
    pub visible_at: DocumentVisibility,
}

impl DocumentRule {
    pub fn is_visible_for(&self, contract: Option<&ContractType>) -> bool {
        match (&self.visible_at, contract) {
            (DocumentVisibility::Always, _) => true,
            (DocumentVisibility::For(contracts), Some(contract)) => contracts.contains(contract),
            (DocumentVisibility::For(_), None) => false,
        }
    }
}

fn rule(field: &'static str, visible_at: DocumentVisibility) -> DocumentRule {
    DocumentRule { field, visible_at }
}

/// Attachment rows of the general documents table
pub fn general_document_rules() -> Vec<DocumentRule> {
    use ContractType::*;
    use DocumentVisibility::*;

    vec![
        rule("anexo_Identidade", Always),
        rule("anexo_CopiaVisto", For(vec![Foreign])),
        rule("anexo_ContratoEstrangeiro", For(vec![Foreign])),
        rule("anexo_DeclaracaoResponsabilidade", For(vec![Foreign])),
        rule("anexo_SegVidaESaude", For(vec![Foreign])),
        rule("anexo_CopiaPassagemRetorno", For(vec![Foreign])),
        rule("anexo_Cpts", For(vec![Employee, Temporary])),
        rule("anexo_Contrato", For(vec![Employee, Temporary])),
        rule("anexo_contratoSocial", For(vec![Company])),
    ]
}

/// 3x4 photo attachment; optional on the page
pub const PHOTO_FIELD: &str = "anexo_foto3x4";

pub const PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "png", "bmp"];

/// Extension check for an uploaded file path.
///
/// Returns the offending extension when it is not in `allowed`.
pub fn check_extension(path: &str, allowed: &[&str]) -> Result<(), String> {
    let extension = path.rsplit('.').next().unwrap_or(path);
    if allowed.contains(&extension) {
        Ok(())
    } else {
        Err(extension.to_string())
    }
}

/// Alert shown when the photo has a forbidden extension
pub fn photo_extension_message(extension: &str) -> String {
    format!(
        "A extensão {} não é permitida. A foto 3x4 deve estar em um dos seguintes formatos:\n {}.",
        extension,
        PHOTO_EXTENSIONS.join(", ")
    )
}
