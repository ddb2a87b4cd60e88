use crate::views::{RenderError, RenderResult, TemplateName, ViewRenderer};

use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use log::{debug, info};
use minijinja::{Environment, path_loader};

/// minijinja-backed renderer reading templates from an asset directory.
///
/// Every template is compiled once in `load`, so a missing or broken file
/// stops the server at startup instead of failing the first request.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    #[track_caller]
    pub fn load(dir: &Path) -> RenderResult<Self> {
        let location = Location::caller();
        std::fs::metadata(dir).map_err(|source| RenderError::AssetDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut env = Environment::new();
        env.set_loader(path_loader(dir));

        for file in TemplateName::FILES {
            env.get_template(file).map_err(|source| RenderError::Load {
                file: file.to_string(),
                source,
                location: ErrorLocation::from(location),
            })?;
            debug!("Loaded template {}", file);
        }

        info!(
            "Loaded {} templates from {}",
            TemplateName::FILES.len(),
            dir.display()
        );

        Ok(Self { env })
    }
}

impl ViewRenderer for TemplateRenderer {
    #[track_caller]
    fn render(&self, template: TemplateName, context: &serde_json::Value) -> RenderResult<String> {
        let location = Location::caller();
        let to_render_error = move |e: minijinja::Error| RenderError::Render {
            template,
            message: e.to_string(),
            location: ErrorLocation::from(location),
        };

        self.env
            .get_template(template.file_name())
            .map_err(to_render_error)?
            .render(context)
            .map_err(to_render_error)
    }
}
