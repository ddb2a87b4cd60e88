pub mod api;
pub mod app_state;
pub mod cli;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod views;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    projects::{
        create_project_form::CreateProjectForm,
        projects::{
            create_project, delete_project, get_description, home, show_project,
            update_description,
        },
        update_description_form::UpdateDescriptionForm,
    },
    steps::{
        create_step_form::CreateStepForm,
        steps::{create_step, steps_fragment},
        steps_fragment_query::StepsFragmentQuery,
    },
    sync::{export::export_page, import::import_data, import::import_page, import_form::ImportForm},
};
pub use app_state::AppState;
pub use cli::Cli;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
