/// Page geometry in PDF points and the closed page-block strategy set.

/// Outer margin on every page edge.
pub const MARGIN: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

pub const A4: PageSize = PageSize { width: 595.276, height: 841.89 };
pub const LETTER: PageSize = PageSize { width: 612.0, height: 792.0 };

impl PageSize {
    /// "a4" or "letter", case-insensitive; anything else is A4.
    pub fn select(tag: Option<&str>) -> Self {
        match tag.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("letter") => LETTER,
            Some("a4") | None => A4,
            Some(other) => {
                log::debug!("unknown page size {other:?}, using a4");
                A4
            }
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * MARGIN
    }
}

/// The closed set of page-block placement strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading1,
    Heading2,
    Table,
    Image,
    Spacer,
    PageBreak,
}

impl BlockKind {
    /// Unknown tags render as paragraphs.
    pub fn select(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "paragraph" | "text" => BlockKind::Paragraph,
            "heading" | "heading1" => BlockKind::Heading1,
            "heading2" | "subheading" => BlockKind::Heading2,
            "table" => BlockKind::Table,
            "image" => BlockKind::Image,
            "spacer" => BlockKind::Spacer,
            "page_break" | "page-break" | "pagebreak" => BlockKind::PageBreak,
            other => {
                log::debug!("unknown page block type {other:?}, rendering as paragraph");
                BlockKind::Paragraph
            }
        }
    }
}
