use crate::layout::{BlockKind, PageSize, MARGIN};
use crate::model::{PageElement, PdfModel, PdfPage};
use crate::text;
use papermill_content::{PageBlock, PageDocumentRequest, TableData};
use papermill_ooxml::MediaImage;
use papermill_style::Palette;
use papermill_types::Color;

const TITLE_SIZE: f32 = 24.0;
const HEADING1_SIZE: f32 = 20.0;
const HEADING2_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 11.0;
const TABLE_SIZE: f32 = 10.0;
const LINE_SPACING: f32 = 1.4;
const TABLE_ROW_H: f32 = 18.0;
const GRID_RULE: f32 = 0.5;
const GRID_COLOR: Color = Color::gray(0xC8);
const ROW_SHADE: Color = Color::gray(0xF2);
const IMAGE_MAX_H: f32 = 300.0;
/// Fitted height of the header logo mark.
const LOGO_H: f32 = 36.0;

/// Flows page blocks down the page, breaking to a new page whenever the
/// next element would cross the bottom margin.
pub struct PageComposer<'a> {
    palette: &'a Palette,
    logo: Option<MediaImage>,
}

struct Flow {
    model: PdfModel,
    y: f32,
}

impl Flow {
    fn push(&mut self, element: PageElement) {
        self.model
            .pages
            .last_mut()
            .expect("model always has a page")
            .elements
            .push(element);
    }

    fn break_page(&mut self) {
        self.model.pages.push(PdfPage::default());
        self.y = MARGIN;
    }

    /// Start a new page unless `needed` points still fit on this one.
    fn ensure(&mut self, needed: f32) {
        if self.y + needed > self.model.size.height - MARGIN && self.y > MARGIN {
            self.break_page();
        }
    }
}

impl<'a> PageComposer<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette, logo: None }
    }

    pub fn with_logo(mut self, logo: Option<MediaImage>) -> Self {
        self.logo = logo;
        self
    }

    pub fn compose<F>(&self, request: &PageDocumentRequest, mut lookup_image: F) -> PdfModel
    where
        F: FnMut(&str) -> Option<MediaImage>,
    {
        let size = PageSize::select(request.page_size.as_deref());
        let mut flow = Flow { model: PdfModel::new(size), y: MARGIN };

        if let Some(logo) = self.logo.clone() {
            let (w, h) = logo.fit_emu(
                papermill_types::Emu::from_points(120.0).raw(),
                papermill_types::Emu::from_points(f64::from(LOGO_H)).raw(),
            );
            let (w, h) = (emu_to_pt(w), emu_to_pt(h));
            let index = flow.model.add_media(logo);
            flow.push(PageElement::Image {
                x: size.width - MARGIN - w,
                y: MARGIN,
                w,
                h,
                media: index,
            });
        }

        self.title_block(&mut flow, request);

        for block in &request.blocks {
            match BlockKind::select(&block.kind) {
                BlockKind::Paragraph => {
                    self.paragraph(&mut flow, block.text.as_deref().unwrap_or_default())
                }
                BlockKind::Heading1 => self.heading(
                    &mut flow,
                    block.text.as_deref().unwrap_or_default(),
                    HEADING1_SIZE,
                    self.palette.primary,
                ),
                BlockKind::Heading2 => self.heading(
                    &mut flow,
                    block.text.as_deref().unwrap_or_default(),
                    HEADING2_SIZE,
                    self.palette.secondary,
                ),
                BlockKind::Table => {
                    if let Some(table) = &block.table {
                        if !table.is_empty() {
                            self.table(&mut flow, table);
                        }
                    }
                }
                BlockKind::Image => self.image(&mut flow, block, &mut lookup_image),
                BlockKind::Spacer => {
                    let height = block.height.unwrap_or(12.0) as f32;
                    flow.ensure(height);
                    flow.y += height;
                }
                BlockKind::PageBreak => flow.break_page(),
            }
        }
        flow.model
    }

    fn title_block(&self, flow: &mut Flow, request: &PageDocumentRequest) {
        let line_h = TITLE_SIZE * LINE_SPACING;
        flow.push(PageElement::Text {
            x: MARGIN,
            y: flow.y,
            size: TITLE_SIZE,
            bold: true,
            color: self.palette.primary,
            text: request.title.clone(),
        });
        flow.y += line_h;
        flow.push(PageElement::Rect {
            x: MARGIN,
            y: flow.y,
            w: 160.0,
            h: 2.0,
            color: self.palette.accent,
        });
        flow.y += 10.0;
        if let Some(author) = &request.author {
            flow.push(PageElement::Text {
                x: MARGIN,
                y: flow.y,
                size: BODY_SIZE,
                bold: false,
                color: self.palette.text_dark,
                text: author.clone(),
            });
            flow.y += BODY_SIZE * LINE_SPACING;
        }
        flow.y += 12.0;
    }

    fn paragraph(&self, flow: &mut Flow, body: &str) {
        let measure = flow.model.size.content_width();
        let line_h = BODY_SIZE * LINE_SPACING;
        for line in text::wrap(body, BODY_SIZE, measure) {
            flow.ensure(line_h);
            flow.push(PageElement::Text {
                x: MARGIN,
                y: flow.y,
                size: BODY_SIZE,
                bold: false,
                color: self.palette.text_dark,
                text: line,
            });
            flow.y += line_h;
        }
        flow.y += 6.0;
    }

    fn heading(&self, flow: &mut Flow, heading: &str, size: f32, color: Color) {
        let line_h = size * LINE_SPACING;
        flow.ensure(line_h + 8.0);
        flow.y += 8.0;
        flow.push(PageElement::Text {
            x: MARGIN,
            y: flow.y,
            size,
            bold: true,
            color,
            text: heading.to_string(),
        });
        flow.y += line_h;
    }

    fn table(&self, flow: &mut Flow, table: &TableData) {
        let measure = flow.model.size.content_width();
        let columns = table.column_count().max(1);
        let col_w = measure / columns as f32;

        if !table.headers.is_empty() {
            flow.ensure(TABLE_ROW_H);
            flow.push(PageElement::Rect {
                x: MARGIN,
                y: flow.y,
                w: measure,
                h: TABLE_ROW_H,
                color: self.palette.primary,
            });
            row_rules(flow, columns, col_w, measure);
            for (i, header) in table.headers.iter().enumerate() {
                flow.push(PageElement::Text {
                    x: MARGIN + col_w * i as f32 + 4.0,
                    y: flow.y + 4.0,
                    size: TABLE_SIZE,
                    bold: true,
                    color: self.palette.text_light,
                    text: header.clone(),
                });
            }
            flow.y += TABLE_ROW_H;
        }

        for (r, row) in table.rows.iter().enumerate() {
            flow.ensure(TABLE_ROW_H);
            if r % 2 == 1 {
                flow.push(PageElement::Rect {
                    x: MARGIN,
                    y: flow.y,
                    w: measure,
                    h: TABLE_ROW_H,
                    color: ROW_SHADE,
                });
            }
            row_rules(flow, columns, col_w, measure);
            for (i, cell) in row.iter().enumerate().take(columns) {
                flow.push(PageElement::Text {
                    x: MARGIN + col_w * i as f32 + 4.0,
                    y: flow.y + 4.0,
                    size: TABLE_SIZE,
                    bold: false,
                    color: self.palette.text_dark,
                    text: cell.display(),
                });
            }
            flow.y += TABLE_ROW_H;
        }
        flow.y += 8.0;
    }

    fn image<F>(&self, flow: &mut Flow, block: &PageBlock, lookup_image: &mut F)
    where
        F: FnMut(&str) -> Option<MediaImage>,
    {
        let Some(image) = block.image.as_deref().and_then(lookup_image) else {
            return;
        };
        let measure = flow.model.size.content_width();
        let (w, h) = image.fit_emu(
            papermill_types::Emu::from_points(f64::from(measure)).raw(),
            papermill_types::Emu::from_points(f64::from(IMAGE_MAX_H)).raw(),
        );
        let (w, h) = (emu_to_pt(w), emu_to_pt(h));
        flow.ensure(h);
        let index = flow.model.add_media(image);
        flow.push(PageElement::Image {
            x: MARGIN + (measure - w) / 2.0,
            y: flow.y,
            w,
            h,
            media: index,
        });
        flow.y += h + 8.0;
    }
}

/// Thin grid rules around one table row: top and bottom edges plus a
/// vertical at every column boundary. Emitted per row, so a table split
/// across a page break keeps closed edges on both pages.
fn row_rules(flow: &mut Flow, columns: usize, col_w: f32, measure: f32) {
    flow.push(PageElement::Rect {
        x: MARGIN,
        y: flow.y,
        w: measure,
        h: GRID_RULE,
        color: GRID_COLOR,
    });
    flow.push(PageElement::Rect {
        x: MARGIN,
        y: flow.y + TABLE_ROW_H - GRID_RULE,
        w: measure,
        h: GRID_RULE,
        color: GRID_COLOR,
    });
    for i in 0..=columns {
        flow.push(PageElement::Rect {
            x: MARGIN + col_w * i as f32,
            y: flow.y,
            w: GRID_RULE,
            h: TABLE_ROW_H,
            color: GRID_COLOR,
        });
    }
}

fn emu_to_pt(emu: i64) -> f32 {
    emu as f32 / papermill_types::EMU_PER_POINT as f32
}
