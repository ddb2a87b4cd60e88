use crate::views::{RenderError, RenderResult, TemplateName};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// Renders a named template against a JSON view context.
///
/// Handlers build the context while holding the repository lock and render
/// after releasing it, so the context is an owned `serde_json::Value`.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, template: TemplateName, context: &serde_json::Value) -> RenderResult<String>;
}

/// Serialize a view model into a render context
#[track_caller]
pub fn to_context<T: Serialize>(view_model: &T) -> RenderResult<serde_json::Value> {
    let location = Location::caller();
    serde_json::to_value(view_model).map_err(|source| RenderError::Context {
        source,
        location: ErrorLocation::from(location),
    })
}
