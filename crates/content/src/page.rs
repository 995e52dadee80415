use crate::{TableData, ValidationError};
use serde::Deserialize;

/// A request to generate a paged (PDF) document.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDocumentRequest {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub palette: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    /// "a4" (default) or "letter".
    #[serde(default)]
    pub page_size: Option<String>,
    #[serde(default)]
    pub blocks: Vec<PageBlock>,
}

/// One typed block in the linear page flow. The type tag is the block's
/// only required field; unknown tags render as paragraphs.
#[derive(Debug, Clone, Deserialize)]
pub struct PageBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub table: Option<TableData>,
    /// Logical image asset name.
    #[serde(default)]
    pub image: Option<String>,
    /// Spacer height in points.
    #[serde(default)]
    pub height: Option<f64>,
}

impl PageDocumentRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}
