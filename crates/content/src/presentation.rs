use crate::{StatBlock, TableData, ValidationError};
use serde::Deserialize;

/// A request to generate a slide deck.
#[derive(Debug, Clone, Deserialize)]
pub struct PresentationRequest {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Palette name; unknown names resolve to the default palette.
    #[serde(default)]
    pub palette: Option<String>,
    /// Logical logo asset name.
    #[serde(default)]
    pub logo: Option<String>,
    /// Logical template asset name.
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub include_closing_slide: bool,
    #[serde(default)]
    pub slides: Vec<SlideContent>,
}

/// One slide. Only the title is required; every other field that is absent
/// simply produces no corresponding visual element.
#[derive(Debug, Clone, Deserialize)]
pub struct SlideContent {
    pub title: String,
    /// Raw layout-variant tag; unknown tags select the standard layout.
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub table: Option<TableData>,
    /// Logical image asset name.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stats: Vec<StatBlock>,
}

impl PresentationRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        for (i, slide) in self.slides.iter().enumerate() {
            if slide.title.trim().is_empty() {
                return Err(ValidationError::EmptySlideTitle(i));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_request_is_valid() {
        let req: PresentationRequest = serde_json::from_str(
            r#"{"title": "Q3", "slides": [{"title": "Agenda"}]}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        assert!(req.slides[0].bullets.is_empty());
        assert!(req.slides[0].layout.is_none());
    }

    #[test]
    fn blank_slide_title_is_rejected() {
        let req: PresentationRequest =
            serde_json::from_str(r#"{"title": "Q3", "slides": [{"title": "  "}]}"#).unwrap();
        assert_eq!(req.validate(), Err(ValidationError::EmptySlideTitle(0)));
    }

    #[test]
    fn unknown_layout_tags_survive_deserialization() {
        let slide: SlideContent =
            serde_json::from_str(r#"{"title": "x", "layout": "hexagonal"}"#).unwrap();
        assert_eq!(slide.layout.as_deref(), Some("hexagonal"));
    }
}
