//! Steps fragment and step creation

use crate::api::{form_or_default, view_context};
use crate::views::{ProjectViewModel, TemplateName};
use crate::{AppState, ApiResult, CreateStepForm, StepsFragmentQuery};

use tracker_core::{FlagSource, ProjectStep, parse_bool_with_default, parse_step_number};

use axum::{
    Form,
    extract::{
        Path, Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    response::{Html, Redirect},
};
use log::{debug, error, info};
use minijinja::HtmlEscape;

/// GET /project/{id}/steps/
///
/// Renders only the steps table. A template failure is reported inside the
/// fragment so the rest of the page keeps working.
pub async fn steps_fragment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<StepsFragmentQuery>, QueryRejection>,
) -> ApiResult<Html<String>> {
    debug!("Matched GET /project/{}/steps/", id);

    let query = query.map(|Query(query)| query).unwrap_or_else(|rejection| {
        info!("Query string not usable ({}), using defaults", rejection);
        StepsFragmentQuery::default()
    });

    let flag = parse_bool_with_default(query.with_edit_row(), false);
    if let FlagSource::Invalid(ref raw) = flag.source {
        info!("Ignoring unparseable WithEditRow value {:?}", raw);
    }
    if flag.is_defaulted() {
        debug!("WithEditRow defaulted to {}", flag.value);
    } else {
        debug!("WithEditRow: {}", flag.value);
    }

    let context = {
        let repo = state.repository.read().await;
        let project = repo.get_project_by_id(&id)?;
        view_context(&ProjectViewModel::fragment(project, flag.value))?
    };

    match state
        .renderer
        .render(TemplateName::ProjectsStepsTable, &context)
    {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            error!("Steps fragment for {} failed to render: {}", id, e);
            Ok(Html(format!(
                "<div style=\"color: red\">{}</div>",
                HtmlEscape(&e.to_string())
            )))
        }
    }
}

/// POST /project/{id}/steps/
///
/// Append a step and reload the project page
pub async fn create_step(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<CreateStepForm>, FormRejection>,
) -> ApiResult<Redirect> {
    debug!("Matched POST /project/{}/steps/", id);

    let form = form_or_default(form);
    let step_number = parse_step_number(&form.step_number)?;
    let step = ProjectStep::new(&id, step_number, form.description);

    state
        .repository
        .write()
        .await
        .add_step_to_project(&id, step)?;

    Ok(Redirect::to(&format!("/projects/{}", id)))
}
