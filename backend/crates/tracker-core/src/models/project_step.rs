use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single numbered task belonging to one project.
///
/// `project_id` is a back-reference by value; the owning `Project` holds the
/// step directly. Step numbers are user supplied and carry no uniqueness or
/// ordering constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProjectStep {
    pub id: String,
    pub project_id: String,
    pub step_number: i64,
    pub description: String,
}

impl ProjectStep {
    pub fn new(
        project_id: impl Into<String>,
        step_number: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            project_id: project_id.into(),
            step_number,
            description: description.into(),
        }
    }
}
