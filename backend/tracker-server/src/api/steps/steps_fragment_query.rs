use serde::Deserialize;

const WITH_EDIT_ROW: &str = "WithEditRow";

/// Query of `GET /project/{id}/steps/`.
///
/// Kept as raw pairs so a repeated key never rejects the request; the first
/// `WithEditRow` wins.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct StepsFragmentQuery {
    pairs: Vec<(String, String)>,
}

impl StepsFragmentQuery {
    /// Raw `WithEditRow` value; parsed leniently by the handler
    pub fn with_edit_row(&self) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == WITH_EDIT_ROW)
            .map(|(_, value)| value.as_str())
    }
}
