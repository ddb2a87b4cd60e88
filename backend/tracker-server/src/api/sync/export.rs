use crate::api::{render_view, view_context};
use crate::views::{PortViewModel, TemplateName};
use crate::{AppState, ApiResult};

use axum::{extract::State, response::Html};
use log::debug;

/// GET /export
///
/// Page with the whole dataset as JSON text, ready to copy out
pub async fn export_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    debug!("Matched GET /export");

    let export_data = state.repository.read().await.export_json()?;
    let context = view_context(&PortViewModel::export(export_data))?;

    render_view(&state, TemplateName::Port, &context)
}
