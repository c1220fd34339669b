pub mod binder;
pub mod component_error;
pub mod components;
pub mod config;
pub mod controllers;
pub mod dom;
pub mod form_utils;
pub mod page_info;
pub mod table_docs;
