//! Project entity - a named unit of work owning an ordered list of steps.

use crate::ProjectStep;
use crate::sync::null_as_empty;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project and its steps.
///
/// Field names on the wire are PascalCase (`Name`, `Description`, `Id`,
/// `Steps`) so exports stay compatible with datasets saved by earlier
/// versions of the tracker. Missing fields decode to empty values and unknown
/// fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub id: String,
    /// Insertion order, not sorted by step number
    #[serde(deserialize_with = "null_as_empty")]
    pub steps: Vec<ProjectStep>,
}

impl Project {
    /// Create a new project with a fresh id and no steps
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            id: Uuid::new_v4().to_string(),
            steps: Vec::new(),
        }
    }

    /// Replace the step list
    pub fn with_steps(mut self, steps: Vec<ProjectStep>) -> Self {
        self.steps = steps;
        self
    }
}
