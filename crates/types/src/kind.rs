use serde::{Deserialize, Serialize};

/// The four output kinds the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Presentation,
    Document,
    Spreadsheet,
    PageDocument,
}

impl DocumentKind {
    pub const fn extension(self) -> &'static str {
        match self {
            DocumentKind::Presentation => "pptx",
            DocumentKind::Document => "docx",
            DocumentKind::Spreadsheet => "xlsx",
            DocumentKind::PageDocument => "pdf",
        }
    }

    /// Prefix used in generated filenames.
    pub const fn file_prefix(self) -> &'static str {
        match self {
            DocumentKind::Presentation => "presentation",
            DocumentKind::Document => "document",
            DocumentKind::Spreadsheet => "spreadsheet",
            DocumentKind::PageDocument => "report",
        }
    }
}
