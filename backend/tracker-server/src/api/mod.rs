pub mod error;
pub mod projects;
pub mod steps;
pub mod sync;

use crate::AppState;
use crate::api::error::Result as ApiResult;
use crate::views::{TemplateName, to_context};

use axum::{Form, extract::rejection::FormRejection, response::Html};
use log::info;
use serde::Serialize;

/// Render a template into an HTML response. Build `context` with
/// `view_context` inside the repository lock scope, then call this after the
/// guard is dropped.
pub(crate) fn render_view(
    state: &AppState,
    template: TemplateName,
    context: &serde_json::Value,
) -> ApiResult<Html<String>> {
    Ok(Html(state.renderer.render(template, context)?))
}

pub(crate) fn view_context<T: Serialize>(view_model: &T) -> ApiResult<serde_json::Value> {
    Ok(to_context(view_model)?)
}

/// Unwrap a form body, falling back to every field's default when the body
/// is missing, has the wrong content type or does not decode.
pub(crate) fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(value)) => value,
        Err(rejection) => {
            info!("Form body not usable ({}), using empty fields", rejection);
            T::default()
        }
    }
}
