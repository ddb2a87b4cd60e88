use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityImportCounts {
    pub created: usize,
    pub skipped: usize,
}
