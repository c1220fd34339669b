pub mod u501_cpf_screening;
pub mod u502_request_form;
pub mod u503_documents_tables;
