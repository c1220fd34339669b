pub mod field_hint;
