pub mod export;
pub mod import;
pub mod import_form;
