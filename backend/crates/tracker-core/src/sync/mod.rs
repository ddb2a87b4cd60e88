pub mod entity_import_counts;
pub mod import_result;

use serde::{Deserialize, Deserializer};

/// Decode `null` as an empty list. Older exports wrote `"Steps": null` for
/// projects that never had a step added.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
