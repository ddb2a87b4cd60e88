use tracker_core::Project;

use serde::Serialize;

/// Context for the full page and the steps fragment
#[derive(Debug, Serialize)]
pub struct ProjectViewModel<'a> {
    pub projects: &'a [Project],
    pub selected_project: SelectedProjectView<'a>,
}

/// The selected project plus render-only hints. The hint never reaches the
/// entity, so it can't leak into exports.
#[derive(Debug, Serialize)]
pub struct SelectedProjectView<'a> {
    #[serde(flatten)]
    pub project: &'a Project,
    #[serde(rename = "WithEditRow")]
    pub with_edit_row: bool,
}

impl<'a> ProjectViewModel<'a> {
    pub fn page(projects: &'a [Project], selected: &'a Project) -> Self {
        Self {
            projects,
            selected_project: SelectedProjectView {
                project: selected,
                with_edit_row: false,
            },
        }
    }

    /// The steps fragment only needs the selected project
    pub fn fragment(selected: &'a Project, with_edit_row: bool) -> Self {
        Self {
            projects: &[],
            selected_project: SelectedProjectView {
                project: selected,
                with_edit_row,
            },
        }
    }
}
