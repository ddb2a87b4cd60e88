use serde::Deserialize;

/// Form body of `PUT /projects/{id}/description`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateDescriptionForm {
    #[serde(rename = "project-description")]
    pub description: String,
}
