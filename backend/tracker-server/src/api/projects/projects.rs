//! Project page and project CRUD handlers

use crate::api::{form_or_default, render_view, view_context};
use crate::views::{ProjectViewModel, TemplateName};
use crate::{AppState, ApiResult, CreateProjectForm, UpdateDescriptionForm};

use tracker_core::Project;

use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, Redirect},
};
use log::{debug, info};

/// Fallback redirect target when the request carries no Referer
const HOME: &str = "/";

/// GET /
///
/// Full page with the first project selected
pub async fn home(State(state): State<AppState>) -> ApiResult<Html<String>> {
    debug!("Matched GET /");

    let context = {
        let repo = state.repository.read().await;
        let selected = repo.get_project_by_index(0)?;
        debug!("Selected project is {}", selected.id);
        view_context(&ProjectViewModel::page(repo.get_all_projects(), selected))?
    };

    render_view(&state, TemplateName::Base, &context)
}

/// GET /projects/{id}
///
/// Full page with the given project selected. Unknown ids are a 404.
pub async fn show_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Html<String>> {
    debug!("Matched GET /projects/{}", id);

    let context = {
        let repo = state.repository.read().await;
        let selected = repo.get_project_by_id(&id)?;
        view_context(&ProjectViewModel::page(repo.get_all_projects(), selected))?
    };

    render_view(&state, TemplateName::Base, &context)
}

/// POST /projects/
///
/// Create a project and send the browser back where it came from
pub async fn create_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<CreateProjectForm>, FormRejection>,
) -> Redirect {
    debug!("Matched POST /projects/");

    let form = form_or_default(form);
    let project = Project::new(form.name, form.description);
    state.repository.write().await.add_project(project);

    let target = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or(HOME);

    Redirect::to(target)
}

/// DELETE /projects/{id}
///
/// Always lands on the home page, whether or not the delete went through
pub async fn delete_project(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    debug!("Matched DELETE /projects/{}", id);

    let removed = state.repository.write().await.remove_project(&id);
    if !removed {
        info!("Project {} was not removed", id);
    }

    Redirect::to(HOME)
}

/// GET /projects/{id}/description
pub async fn get_description(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<String> {
    debug!("Matched GET /projects/{}/description", id);

    let repo = state.repository.read().await;
    Ok(repo.get_project_by_id(&id)?.description.clone())
}

/// PUT /projects/{id}/description
///
/// Unknown ids are ignored; the response is a 200 either way
pub async fn update_description(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<UpdateDescriptionForm>, FormRejection>,
) -> (StatusCode, &'static str) {
    debug!("Matched PUT /projects/{}/description", id);

    let form = form_or_default(form);
    state
        .repository
        .write()
        .await
        .set_project_description(&id, &form.description);

    (StatusCode::OK, "200")
}
