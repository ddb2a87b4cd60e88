pub mod create_project_form;
pub mod projects;
pub mod update_description_form;
