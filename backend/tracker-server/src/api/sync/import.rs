use crate::api::{form_or_default, render_view, view_context};
use crate::views::{PortViewModel, TemplateName};
use crate::{AppState, ApiResult, ImportForm};

use tracker_core::is_blank;

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{Html, Redirect},
};
use log::{debug, info};

/// GET /import
pub async fn import_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    debug!("Matched GET /import");

    let context = view_context(&PortViewModel::import())?;

    render_view(&state, TemplateName::Port, &context)
}

/// POST /import
///
/// Adds every project whose id is not already present; existing ids are
/// skipped whole. A blank or missing payload is a no-op.
pub async fn import_data(
    State(state): State<AppState>,
    form: Result<Form<ImportForm>, FormRejection>,
) -> ApiResult<Redirect> {
    debug!("Matched POST /import");

    let form = form_or_default(form);
    if is_blank(&form.payload) {
        info!("Payload value was empty");
    } else {
        let result = state.repository.write().await.import_json(&form.payload)?;
        info!(
            "Imported {} projects ({} skipped)",
            result.projects.created, result.projects.skipped
        );
    }

    Ok(Redirect::to("/"))
}
