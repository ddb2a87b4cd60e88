use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Index {index} out of range for {len} projects {location}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        location: ErrorLocation,
    },

    #[error("Parse error for {field}: {value:?} {location}")]
    Parse {
        field: String,
        value: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
