use serde::Serialize;

const EXPORT_TITLE: &str = "Export Data";
const IMPORT_TITLE: &str = "Import Data";

/// Context for the shared import/export page
#[derive(Debug, Serialize)]
pub struct PortViewModel {
    pub export_data: String,
    pub page_title: &'static str,
    pub display_submit: bool,
}

impl PortViewModel {
    pub fn export(export_data: String) -> Self {
        Self {
            export_data,
            page_title: EXPORT_TITLE,
            display_submit: false,
        }
    }

    pub fn import() -> Self {
        Self {
            export_data: String::new(),
            page_title: IMPORT_TITLE,
            display_submit: true,
        }
    }
}
