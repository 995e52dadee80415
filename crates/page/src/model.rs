use crate::layout::PageSize;
use papermill_ooxml::MediaImage;
use papermill_types::Color;

/// One positioned element. Coordinates are top-down in points; the
/// serializer flips into PDF's bottom-up space.
#[derive(Debug, Clone)]
pub enum PageElement {
    Text {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        color: Color,
        text: String,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    /// Index into [`PdfModel::media`].
    Image {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        media: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct PdfPage {
    pub elements: Vec<PageElement>,
}

/// The fully placed page model, ready for serialization.
#[derive(Debug, Clone)]
pub struct PdfModel {
    pub size: PageSize,
    pub pages: Vec<PdfPage>,
    pub media: Vec<MediaImage>,
}

impl PdfModel {
    pub fn new(size: PageSize) -> Self {
        Self { size, pages: vec![PdfPage::default()], media: Vec::new() }
    }

    pub fn add_media(&mut self, image: MediaImage) -> usize {
        self.media.push(image);
        self.media.len() - 1
    }
}
