use crate::{TableData, ValidationError};
use serde::Deserialize;

fn default_level() -> u8 {
    1
}

/// A request to generate a word-processor document.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentRequest {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub palette: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    /// Emit a contents page listing the section headings.
    #[serde(default)]
    pub include_toc: bool,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One document section: a heading plus optional flowing content.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub heading: String,
    /// Heading tier, 1 or 2; anything deeper clamps to 2.
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub table: Option<TableData>,
}

impl DocumentRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        for (i, section) in self.sections.iter().enumerate() {
            if section.heading.trim().is_empty() {
                return Err(ValidationError::EmptySectionHeading(i));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_one() {
        let section: Section = serde_json::from_str(r#"{"heading": "Intro"}"#).unwrap();
        assert_eq!(section.level, 1);
    }

    #[test]
    fn heading_is_required_per_section() {
        let req: DocumentRequest =
            serde_json::from_str(r#"{"title": "Spec", "sections": [{"heading": ""}]}"#).unwrap();
        assert_eq!(req.validate(), Err(ValidationError::EmptySectionHeading(0)));
    }
}
