//! Typed parsing for HTML form values.
//!
//! Form fields arrive as optional strings. Booleans fall back to a default
//! when absent or malformed, and report which of those happened so callers
//! and tests can tell a real `false` from a defaulted one.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Where a parsed flag value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagSource {
    /// The raw value parsed as a boolean
    Parsed,
    /// No value was submitted
    Absent,
    /// A value was submitted but did not parse; holds the raw text
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFlag {
    pub value: bool,
    pub source: FlagSource,
}

impl FormFlag {
    pub fn is_defaulted(&self) -> bool {
        self.source != FlagSource::Parsed
    }
}

/// Parse a boolean form value, falling back to `default`.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool_with_default(raw: Option<&str>, default: bool) -> FormFlag {
    let Some(raw) = raw else {
        return FormFlag {
            value: default,
            source: FlagSource::Absent,
        };
    };

    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => FormFlag {
            value: true,
            source: FlagSource::Parsed,
        },
        "0" | "f" | "F" | "FALSE" | "false" | "False" => FormFlag {
            value: false,
            source: FlagSource::Parsed,
        },
        "" => FormFlag {
            value: default,
            source: FlagSource::Absent,
        },
        other => FormFlag {
            value: default,
            source: FlagSource::Invalid(other.to_string()),
        },
    }
}

/// Parse the `stepNumber` form field
#[track_caller]
pub fn parse_step_number(raw: &str) -> CoreErrorResult<i64> {
    let location = Location::caller();
    raw.trim().parse::<i64>().map_err(|_| CoreError::Parse {
        field: "stepNumber".to_string(),
        value: raw.to_string(),
        location: ErrorLocation::from(location),
    })
}

/// True for empty or whitespace-only input
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
