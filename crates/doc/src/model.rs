use papermill_content::TableData;
use papermill_ooxml::MediaImage;

/// One flowing block in the composed document, in reading order.
#[derive(Debug, Clone)]
pub enum DocBlock {
    /// The document title, styled `Title`.
    Title(String),
    Subtitle(String),
    Byline(String),
    /// A section heading; level 1 or 2 selects `Heading1`/`Heading2`.
    Heading { text: String, level: u8 },
    Paragraph(String),
    Bullet(String),
    /// One contents-page line, indented by heading level.
    TocEntry { text: String, level: u8 },
    Table(TableData),
    PageBreak,
    /// Right-aligned inline logo; the image lives in [`DocModel::logo`].
    Logo,
}

/// Composition output handed to the serializer.
#[derive(Debug, Clone, Default)]
pub struct DocModel {
    pub blocks: Vec<DocBlock>,
    pub logo: Option<MediaImage>,
}
