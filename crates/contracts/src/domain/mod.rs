pub mod a001_employee_fields;
pub mod a002_general_documents;
pub mod a003_health_documents;
pub mod a004_document_analysis;
