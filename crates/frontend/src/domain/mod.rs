pub mod a001_request_contract;
pub mod a002_request_company;
pub mod a003_request_employee;
pub mod a004_documents_general;
pub mod a005_documents_security;
pub mod a006_documents_health;
