use std::fmt;

/// Named entry points into the template set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateName {
    /// Full page: project list, description panel and steps table
    Base,
    /// The steps table on its own, for fragment swaps
    ProjectsStepsTable,
    /// Import/export page
    Port,
}

impl TemplateName {
    /// Every file the template set needs, including partials pulled in by
    /// `{% include %}`
    pub const FILES: [&'static str; 5] = [
        "main.html",
        "projects-list.html",
        "projects-description.html",
        "projects-steps-table.html",
        "port.html",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::ProjectsStepsTable => "projectsStepsTable",
            Self::Port => "port",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Base => "main.html",
            Self::ProjectsStepsTable => "projects-steps-table.html",
            Self::Port => "port.html",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
