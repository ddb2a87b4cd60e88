use crate::views::ViewRenderer;

use tracker_core::ProjectRepository;

use std::sync::Arc;

use tokio::sync::RwLock;

/// Shared state handed to every handler.
///
/// The repository sits behind a single lock; handlers hold it only for the
/// duration of one repository call or one view-model build.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<RwLock<ProjectRepository>>,
    pub renderer: Arc<dyn ViewRenderer>,
}

impl AppState {
    pub fn new(repository: ProjectRepository, renderer: Arc<dyn ViewRenderer>) -> Self {
        Self {
            repository: Arc::new(RwLock::new(repository)),
            renderer,
        }
    }
}
