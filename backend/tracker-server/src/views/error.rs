use crate::views::TemplateName;

use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template directory {path} is not readable: {source}")]
    AssetDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load template {file}: {source} {location}")]
    Load {
        file: String,
        #[source]
        source: minijinja::Error,
        location: ErrorLocation,
    },

    #[error("Failed to render {template}: {message} {location}")]
    Render {
        template: TemplateName,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to build view context: {source} {location}")]
    Context {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
