use serde::Deserialize;

/// Form body of `POST /import`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImportForm {
    /// JSON array of projects as produced by `/export`
    pub payload: String,
}
