use thiserror::Error;

/// Workflow identifiers read from the page, attached to errors for support
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub codflow_execute: Option<String>,
    pub codflow: Option<String>,
}

/// Configuration error raised while mounting a component
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// A `[xname=inp<id>]` control referenced by the page is missing
    #[error("{component}: {message}")]
    FieldNotFound {
        component: String,
        message: String,
        field_id: String,
        context: PageContext,
    },
    /// A structural element (table, card, container) is missing
    #[error("{component}: element '{selector}' not found")]
    ElementNotFound {
        component: String,
        selector: String,
        context: PageContext,
    },
}

impl ComponentError {
    pub fn field_not_found(component: &str, field_id: &str, context: PageContext) -> Self {
        ComponentError::FieldNotFound {
            component: component.to_string(),
            message: format!(
                "Erro ao montar componente.\nNenhum campo do Orquestra encontrado para a referência {}",
                field_id
            ),
            field_id: field_id.to_string(),
            context,
        }
    }

    pub fn element_not_found(component: &str, selector: &str, context: PageContext) -> Self {
        ComponentError::ElementNotFound {
            component: component.to_string(),
            selector: selector.to_string(),
            context,
        }
    }

    /// Machine-readable tag
    pub fn type_tag(&self) -> &'static str {
        match self {
            ComponentError::FieldNotFound { .. } => "field_not_found",
            ComponentError::ElementNotFound { .. } => "element_not_found",
        }
    }

    pub fn context(&self) -> &PageContext {
        match self {
            ComponentError::FieldNotFound { context, .. } => context,
            ComponentError::ElementNotFound { context, .. } => context,
        }
    }
}
