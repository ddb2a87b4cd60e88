pub mod error;
pub mod form_value;
pub mod models;
pub mod repositories;
pub mod sync;


pub use error::{CoreError, Result};
pub use form_value::{FlagSource, FormFlag, is_blank, parse_bool_with_default, parse_step_number};
pub use models::project::Project;
pub use models::project_step::ProjectStep;
pub use repositories::project_repository::ProjectRepository;
pub use sync::entity_import_counts::EntityImportCounts;
pub use sync::import_result::ImportResult;
