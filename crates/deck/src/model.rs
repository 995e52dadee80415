use papermill_content::TableData;
use papermill_ooxml::MediaImage;
use papermill_types::{Color, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One styled paragraph inside a text shape.
#[derive(Debug, Clone)]
pub struct Para {
    pub text: String,
    pub size_pt: u32,
    pub bold: bool,
    pub color: Color,
    pub align: Align,
}

impl Para {
    pub fn new(text: impl Into<String>, size_pt: u32, color: Color) -> Self {
        Self {
            text: text.into(),
            size_pt,
            bold: false,
            color,
            align: Align::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }
}

/// A placed element on a slide. Every variant carries its explicit frame;
/// nothing on a slide is positioned by the consuming application.
#[derive(Debug, Clone)]
pub enum Shape {
    Text {
        frame: Rect,
        paras: Vec<Para>,
        /// Solid background fill (stat blocks); `None` renders no fill.
        fill: Option<Color>,
        /// Anchor text to the vertical center of the frame.
        middle: bool,
    },
    /// A plain filled rectangle (accent rules).
    Block { frame: Rect, fill: Color },
    Table { frame: Rect, data: TableData },
    /// Index into [`Deck::media`].
    Picture { frame: Rect, media: usize },
}

#[derive(Debug, Clone, Default)]
pub struct Slide {
    pub shapes: Vec<Shape>,
}

impl Slide {
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }
}

/// The fully composed in-memory deck, ready for serialization.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    pub slides: Vec<Slide>,
    pub media: Vec<MediaImage>,
}

impl Deck {
    /// Register an image and return its media index.
    pub fn add_media(&mut self, image: MediaImage) -> usize {
        self.media.push(image);
        self.media.len() - 1
    }
}
