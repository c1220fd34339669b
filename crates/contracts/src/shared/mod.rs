pub mod date_utils;
pub mod filters;
pub mod number_format;
pub mod tax_id;
