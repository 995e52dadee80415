use crate::model::{DocBlock, DocModel};
use papermill_content::DocumentRequest;
use papermill_ooxml::MediaImage;

/// Builds the flowing block sequence for one document request. Styling is
/// deferred to the serializer; the composer only decides order and levels.
pub struct DocComposer {
    logo: Option<MediaImage>,
}

impl DocComposer {
    pub fn new() -> Self {
        Self { logo: None }
    }

    pub fn with_logo(mut self, logo: Option<MediaImage>) -> Self {
        self.logo = logo;
        self
    }

    pub fn compose(&self, request: &DocumentRequest) -> DocModel {
        let mut model = DocModel {
            blocks: Vec::new(),
            logo: self.logo.clone(),
        };

        if model.logo.is_some() {
            model.blocks.push(DocBlock::Logo);
        }
        model.blocks.push(DocBlock::Title(request.title.clone()));
        if let Some(subtitle) = &request.subtitle {
            model.blocks.push(DocBlock::Subtitle(subtitle.clone()));
        }
        if let Some(author) = &request.author {
            model.blocks.push(DocBlock::Byline(author.clone()));
        }

        if request.include_toc && !request.sections.is_empty() {
            model.blocks.push(DocBlock::PageBreak);
            model.blocks.push(DocBlock::Heading {
                text: "Contents".to_string(),
                level: 1,
            });
            for section in &request.sections {
                model.blocks.push(DocBlock::TocEntry {
                    text: section.heading.clone(),
                    level: section.level.clamp(1, 2),
                });
            }
            model.blocks.push(DocBlock::PageBreak);
        }

        for section in &request.sections {
            model.blocks.push(DocBlock::Heading {
                text: section.heading.clone(),
                level: section.level.clamp(1, 2),
            });
            if let Some(body) = &section.body {
                model.blocks.push(DocBlock::Paragraph(body.clone()));
            }
            for bullet in &section.bullets {
                model.blocks.push(DocBlock::Bullet(bullet.clone()));
            }
            if let Some(table) = &section.table {
                if !table.is_empty() {
                    model.blocks.push(DocBlock::Table(table.clone()));
                }
            }
        }
        model
    }
}

impl Default for DocComposer {
    fn default() -> Self {
        Self::new()
    }
}
