//! View layer: template names, view models and the renderer seam.

mod error;
mod port_view_model;
mod project_view_model;
mod renderer;
mod template_name;
mod template_renderer;

pub use error::{RenderError, Result as RenderResult};
pub use port_view_model::PortViewModel;
pub use project_view_model::{ProjectViewModel, SelectedProjectView};
pub use renderer::{ViewRenderer, to_context};
pub use template_name::TemplateName;
pub use template_renderer::TemplateRenderer;
