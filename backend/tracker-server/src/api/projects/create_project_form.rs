use serde::Deserialize;

/// Form body of `POST /projects/`. Missing fields become empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateProjectForm {
    #[serde(rename = "project-name")]
    pub name: String,

    #[serde(rename = "project-description")]
    pub description: String,
}
