use crate::sync::entity_import_counts::EntityImportCounts;

use serde::Serialize;

/// Outcome of a JSON import. Existing projects are never merged, so there is
/// no `updated` bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportResult {
    pub projects: EntityImportCounts,
    pub steps: EntityImportCounts,
}
