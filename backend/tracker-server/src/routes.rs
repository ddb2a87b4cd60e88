use crate::{
    AppState, create_project, create_step, delete_project, export_page, get_description, health,
    home, import_data, import_page, show_project, steps_fragment, update_description,
};

use axum::{
    Router,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(home))
        .route("/projects/", post(create_project))
        .route("/projects/{id}", get(show_project).delete(delete_project))
        .route(
            "/projects/{id}/description",
            get(get_description).put(update_description),
        )
        // Steps fragment
        .route("/project/{id}/steps/", get(steps_fragment).post(create_step))
        // Import / export
        .route("/export", get(export_page))
        .route("/import", get(import_page).post(import_data))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .with_state(state)
}
