//! In-memory project repository.
//!
//! The repository is the only stateful component of the tracker. It owns
//! every project, and each project owns its steps. All lookups are linear
//! scans; the dataset is expected to stay small.
//!
//! ## At least one project
//!
//! `remove_project` refuses to run when exactly one project remains, even if
//! that project does not match the requested id. The home page always renders
//! the project at index 0, so an empty repository is only reachable through
//! `ProjectRepository::new()`.

use crate::{CoreError, ImportResult, Project, ProjectStep, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info, warn};

const SEED_PROJECT_NAME: &str = "TestProj1";
const SEED_PROJECT_DESCRIPTION: &str = "This is a description for a thing that is being described";

#[derive(Debug, Default, Clone)]
pub struct ProjectRepository {
    projects: Vec<Project>,
}

impl ProjectRepository {
    /// Empty repository. The server never starts from this state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository holding one demo project with two steps.
    pub fn seeded() -> Self {
        let project = Project::new(SEED_PROJECT_NAME, SEED_PROJECT_DESCRIPTION);
        let steps = vec![
            ProjectStep::new(&project.id, 1, "Step Description"),
            ProjectStep::new(&project.id, 2, "Step Description 2"),
        ];

        Self {
            projects: vec![project.with_steps(steps)],
        }
    }

    pub fn get_all_projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    #[track_caller]
    pub fn get_project_by_id(&self, id: &str) -> CoreErrorResult<&Project> {
        let location = Location::caller();
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound {
                message: format!("Project {} not found", id),
                location: ErrorLocation::from(location),
            })
    }

    #[track_caller]
    pub fn get_project_by_index(&self, idx: usize) -> CoreErrorResult<&Project> {
        let location = Location::caller();
        self.projects
            .get(idx)
            .ok_or_else(|| CoreError::IndexOutOfRange {
                index: idx,
                len: self.projects.len(),
                location: ErrorLocation::from(location),
            })
    }

    /// Append a project. Ids are not checked for duplicates.
    pub fn add_project(&mut self, project: Project) {
        info!("Adding project {} ({})", project.name, project.id);
        self.projects.push(project);
    }

    /// Remove every project with the given id.
    ///
    /// Returns `false` without touching anything when only one project is
    /// left, regardless of whether it matches.
    pub fn remove_project(&mut self, id: &str) -> bool {
        if self.projects.len() == 1 {
            warn!("Refusing to remove project {}: last remaining project", id);
            return false;
        }

        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        let removed = before - self.projects.len();

        if removed > 0 {
            info!("Removed project {} ({} entries)", id, removed);
        } else {
            debug!("No project matched {} for removal", id);
        }

        removed > 0
    }

    /// Update the description of every project with the given id.
    /// Unknown ids are ignored.
    pub fn set_project_description(&mut self, id: &str, description: &str) {
        for project in self.projects.iter_mut().filter(|p| p.id == id) {
            project.description = description.to_string();
        }
    }

    /// Append a step to the project's step list.
    #[track_caller]
    pub fn add_step_to_project(
        &mut self,
        project_id: &str,
        step: ProjectStep,
    ) -> CoreErrorResult<bool> {
        let location = Location::caller();
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| CoreError::NotFound {
                message: format!("Project {} not found", project_id),
                location: ErrorLocation::from(location),
            })?;

        debug!(
            "Adding step {} (#{}) to project {}",
            step.id, step.step_number, project_id
        );
        project.steps.push(step);

        Ok(true)
    }

    /// Import a JSON array of projects.
    ///
    /// Projects whose id already exists are skipped whole: no merge and no
    /// overwrite. New projects are added empty and their steps appended one by
    /// one through `add_step_to_project`, so each step lands exactly once.
    /// The payload is fully parsed before anything is mutated.
    #[track_caller]
    pub fn import_json(&mut self, json: &str) -> CoreErrorResult<ImportResult> {
        let location = Location::caller();
        let incoming: Vec<Project> =
            serde_json::from_str(json).map_err(|source| CoreError::Json {
                source,
                location: ErrorLocation::from(location),
            })?;

        let mut result = ImportResult::default();

        for mut project in incoming {
            if self.get_project_by_id(&project.id).is_ok() {
                debug!("Skipping existing project {}", project.id);
                result.projects.skipped += 1;
                result.steps.skipped += project.steps.len();
                continue;
            }

            let steps = std::mem::take(&mut project.steps);
            let project_id = project.id.clone();
            self.add_project(project);
            result.projects.created += 1;

            for step in steps {
                self.add_step_to_project(&project_id, step)?;
                result.steps.created += 1;
            }
        }

        info!(
            "Import finished: projects created={} skipped={}, steps created={} skipped={}",
            result.projects.created,
            result.projects.skipped,
            result.steps.created,
            result.steps.skipped
        );

        Ok(result)
    }

    /// Serialize all projects, steps included, as a JSON array.
    #[track_caller]
    pub fn export_json(&self) -> CoreErrorResult<String> {
        let location = Location::caller();
        serde_json::to_string(&self.projects).map_err(|source| CoreError::Json {
            source,
            location: ErrorLocation::from(location),
        })
    }
}
