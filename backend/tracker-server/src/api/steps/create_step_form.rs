use serde::Deserialize;

/// Form body of `POST /project/{id}/steps/`.
///
/// `stepNumber` stays a string here so a bad value becomes a validation
/// error naming the field instead of a generic form rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateStepForm {
    #[serde(rename = "stepNumber")]
    pub step_number: String,

    #[serde(rename = "Description")]
    pub description: String,
}
