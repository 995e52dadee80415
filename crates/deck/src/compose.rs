use crate::layout::{self, SlideLayout, BULLET_STEP, CANVAS_H, MARGIN};
use crate::model::{Deck, Para, Shape, Slide};
use papermill_content::{PresentationRequest, SlideContent, StatBlock};
use papermill_ooxml::MediaImage;
use papermill_style::Palette;
use papermill_types::{Emu, Rect};

/// Builds the in-memory deck for one presentation request.
///
/// The composer owns all placement decisions; the serializer only writes
/// what it is handed. Missing optional content produces no shapes, and an
/// image name that resolves to nothing is silently skipped.
pub struct DeckComposer<'a> {
    palette: &'a Palette,
    logo: Option<MediaImage>,
}

impl<'a> DeckComposer<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette, logo: None }
    }

    pub fn with_logo(mut self, logo: Option<MediaImage>) -> Self {
        self.logo = logo;
        self
    }

    /// `lookup_image` resolves a logical image name to embeddable bytes;
    /// `None` means the slide simply renders without that picture.
    pub fn compose<F>(&self, request: &PresentationRequest, mut lookup_image: F) -> Deck
    where
        F: FnMut(&str) -> Option<MediaImage>,
    {
        let mut deck = Deck::default();
        let logo_index = self.logo.clone().map(|logo| deck.add_media(logo));

        let title_slide = self.title_slide(request, logo_index);
        deck.slides.push(title_slide);

        for content in &request.slides {
            let layout = SlideLayout::select(content.layout.as_deref());
            let image = self
                .image_slot(content, layout)
                .and_then(|name| lookup_image(name))
                .map(|img| (deck.add_media(img.clone()), img));
            let slide = self.content_slide(content, layout, image, logo_index);
            deck.slides.push(slide);
        }

        if request.include_closing_slide {
            deck.slides.push(self.closing_slide(logo_index));
        }
        deck
    }

    /// Whether this slide's layout will actually place its image. A table
    /// takes precedence over an image on the standard layout.
    fn image_slot<'c>(&self, content: &'c SlideContent, layout: SlideLayout) -> Option<&'c str> {
        let name = content.image.as_deref()?;
        match layout {
            SlideLayout::Standard if content.table.is_none() => Some(name),
            SlideLayout::ImageLeft | SlideLayout::ImageRight => Some(name),
            _ => None,
        }
    }

    fn title_slide(&self, request: &PresentationRequest, logo_index: Option<usize>) -> Slide {
        let mut slide = Slide::default();
        slide.push(Shape::Text {
            frame: layout::cover_title_frame(),
            paras: vec![
                Para::new(&request.title, 44, self.palette.primary)
                    .bold()
                    .centered(),
            ],
            fill: None,
            middle: true,
        });
        slide.push(Shape::Block {
            frame: layout::cover_rule_frame(),
            fill: self.palette.accent,
        });
        if let Some(subtitle) = &request.subtitle {
            slide.push(Shape::Text {
                frame: layout::cover_subtitle_frame(),
                paras: vec![Para::new(subtitle, 24, self.palette.secondary).centered()],
                fill: None,
                middle: false,
            });
        }
        if let Some(author) = &request.author {
            slide.push(Shape::Text {
                frame: layout::cover_author_frame(),
                paras: vec![Para::new(author, 14, self.palette.text_dark).centered()],
                fill: None,
                middle: false,
            });
        }
        if let (Some(index), Some(logo)) = (logo_index, &self.logo) {
            let (w, h) = logo.fit_emu(Emu::from_inches(1.2).raw(), Emu::from_inches(0.9).raw());
            slide.push(Shape::Picture {
                frame: layout::cover_logo_frame(Emu(w), Emu(h)),
                media: index,
            });
        }
        slide
    }

    fn content_slide(
        &self,
        content: &SlideContent,
        layout: SlideLayout,
        image: Option<(usize, MediaImage)>,
        logo_index: Option<usize>,
    ) -> Slide {
        let mut slide = Slide::default();
        slide.push(Shape::Text {
            frame: layout::title_frame(),
            paras: vec![Para::new(&content.title, 32, self.palette.primary).bold()],
            fill: None,
            middle: true,
        });
        slide.push(Shape::Block {
            frame: layout::title_rule_frame(),
            fill: self.palette.accent,
        });

        match layout {
            SlideLayout::Standard => self.standard_body(&mut slide, content, image),
            SlideLayout::TwoColumn => self.two_column_body(&mut slide, content),
            SlideLayout::Stats => self.stats_body(&mut slide, content),
            SlideLayout::ImageLeft => self.split_body(&mut slide, content, image, true),
            SlideLayout::ImageRight => self.split_body(&mut slide, content, image, false),
        }

        self.corner_logo(&mut slide, logo_index);
        slide
    }

    /// Body text, then bullets, then at most one of table or image in the
    /// remaining vertical space.
    fn standard_body(
        &self,
        slide: &mut Slide,
        content: &SlideContent,
        image: Option<(usize, MediaImage)>,
    ) {
        let mut row = 0usize;
        if let Some(body) = &content.body {
            slide.push(Shape::Text {
                frame: layout::body_frame(row, BULLET_STEP * 2),
                paras: vec![Para::new(body, 18, self.palette.text_dark)],
                fill: None,
                middle: false,
            });
            row += 2;
        }
        for bullet in &content.bullets {
            slide.push(Shape::Text {
                frame: layout::body_frame(row, BULLET_STEP),
                paras: vec![Para::new(format!("\u{2022} {bullet}"), 18, self.palette.text_dark)],
                fill: None,
                middle: false,
            });
            row += 1;
        }
        let remaining = self.remaining_frame(row);
        if let Some(table) = &content.table {
            if !table.is_empty() && remaining.h.raw() > 0 {
                slide.push(Shape::Table {
                    frame: remaining,
                    data: table.clone(),
                });
            }
        } else if let Some((index, img)) = image {
            self.fitted_picture(slide, remaining, index, &img);
        }
    }

    /// Bullets split across two columns, with body text heading the left.
    fn two_column_body(&self, slide: &mut Slide, content: &SlideContent) {
        let (left, right) = layout::column_frames();
        let mut left_paras = Vec::new();
        if let Some(body) = &content.body {
            left_paras.push(Para::new(body, 18, self.palette.text_dark));
        }
        let split = content.bullets.len().div_ceil(2);
        for bullet in &content.bullets[..split.min(content.bullets.len())] {
            left_paras.push(Para::new(format!("\u{2022} {bullet}"), 18, self.palette.text_dark));
        }
        let right_paras: Vec<Para> = content.bullets[split.min(content.bullets.len())..]
            .iter()
            .map(|b| Para::new(format!("\u{2022} {b}"), 18, self.palette.text_dark))
            .collect();
        if !left_paras.is_empty() {
            slide.push(Shape::Text {
                frame: left,
                paras: left_paras,
                fill: None,
                middle: false,
            });
        }
        if !right_paras.is_empty() {
            slide.push(Shape::Text {
                frame: right,
                paras: right_paras,
                fill: None,
                middle: false,
            });
        }
    }

    /// One filled block per stat, equal widths, left to right.
    fn stats_body(&self, slide: &mut Slide, content: &SlideContent) {
        if let Some(body) = &content.body {
            slide.push(Shape::Text {
                frame: layout::body_frame(0, BULLET_STEP * 2),
                paras: vec![Para::new(body, 18, self.palette.text_dark)],
                fill: None,
                middle: false,
            });
        }
        if content.stats.is_empty() {
            return;
        }
        let frames = layout::stat_frames(content.stats.len());
        for (frame, stat) in frames.into_iter().zip(&content.stats) {
            slide.push(self.stat_block(frame, stat));
        }
    }

    fn stat_block(&self, frame: Rect, stat: &StatBlock) -> Shape {
        let mut paras = vec![
            Para::new(&stat.value, 40, self.palette.text_light)
                .bold()
                .centered(),
        ];
        if !stat.label.is_empty() {
            paras.push(Para::new(&stat.label, 14, self.palette.text_light).centered());
        }
        Shape::Text {
            frame,
            paras,
            fill: Some(self.palette.secondary),
            middle: true,
        }
    }

    /// Image in one half, body text and bullets in the other.
    fn split_body(
        &self,
        slide: &mut Slide,
        content: &SlideContent,
        image: Option<(usize, MediaImage)>,
        image_on_left: bool,
    ) {
        let (left, right) = layout::column_frames();
        let (image_frame, text_frame) = if image_on_left { (left, right) } else { (right, left) };

        if let Some((index, img)) = image {
            self.fitted_picture(slide, image_frame, index, &img);
        }

        let mut paras = Vec::new();
        if let Some(body) = &content.body {
            paras.push(Para::new(body, 18, self.palette.text_dark));
        }
        for bullet in &content.bullets {
            paras.push(Para::new(format!("\u{2022} {bullet}"), 18, self.palette.text_dark));
        }
        if !paras.is_empty() {
            slide.push(Shape::Text {
                frame: text_frame,
                paras,
                fill: None,
                middle: false,
            });
        }
    }

    fn closing_slide(&self, logo_index: Option<usize>) -> Slide {
        let mut slide = Slide::default();
        slide.push(Shape::Text {
            frame: layout::closing_frame(),
            paras: vec![
                Para::new("Thank you", 40, self.palette.primary)
                    .bold()
                    .centered(),
            ],
            fill: None,
            middle: true,
        });
        slide.push(Shape::Block {
            frame: layout::cover_rule_frame(),
            fill: self.palette.accent,
        });
        self.corner_logo(&mut slide, logo_index);
        slide
    }

    fn corner_logo(&self, slide: &mut Slide, logo_index: Option<usize>) {
        if let (Some(index), Some(logo)) = (logo_index, &self.logo) {
            let half_inch = Emu::from_inches(0.5).raw();
            let (w, h) = logo.fit_emu(half_inch, half_inch);
            slide.push(Shape::Picture {
                frame: layout::corner_logo_frame(Emu(w), Emu(h)),
                media: index,
            });
        }
    }

    /// Space left under `row` stacked body rows, down to the bottom margin.
    fn remaining_frame(&self, row: usize) -> Rect {
        let frame = layout::body_frame(row, Emu(0));
        Rect::new(
            frame.x,
            frame.y,
            frame.w,
            Emu((CANVAS_H - MARGIN - frame.y).raw().max(0)),
        )
    }

    /// Center the image within `frame` at its aspect-preserving fitted size.
    fn fitted_picture(&self, slide: &mut Slide, frame: Rect, index: usize, img: &MediaImage) {
        if frame.w.raw() <= 0 || frame.h.raw() <= 0 {
            return;
        }
        let (w, h) = img.fit_emu(frame.w.raw(), frame.h.raw());
        let x = frame.x.raw() + (frame.w.raw() - w) / 2;
        let y = frame.y.raw() + (frame.h.raw() - h) / 2;
        slide.push(Shape::Picture {
            frame: Rect::new(Emu(x), Emu(y), Emu(w), Emu(h)),
            media: index,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use papermill_style::default_palette;
    use std::sync::Arc;

    fn no_images(_: &str) -> Option<MediaImage> {
        None
    }

    fn request(slides: Vec<SlideContent>) -> PresentationRequest {
        PresentationRequest {
            title: "Deck".into(),
            subtitle: None,
            author: None,
            palette: None,
            logo: None,
            template: None,
            include_closing_slide: false,
            slides,
        }
    }

    fn slide(json: serde_json::Value) -> SlideContent {
        serde_json::from_value(json).unwrap()
    }

    fn fake_logo() -> MediaImage {
        MediaImage {
            bytes: Arc::new(vec![0u8; 4]),
            extension: "png",
            content_type: "image/png",
            px_width: 96,
            px_height: 96,
        }
    }

    #[test]
    fn minimal_request_yields_only_a_title_slide() {
        let deck = DeckComposer::new(default_palette()).compose(&request(vec![]), no_images);
        assert_eq!(deck.slides.len(), 1);
        assert!(deck.media.is_empty());
    }

    #[test]
    fn title_only_slide_has_no_body_shapes() {
        let deck = DeckComposer::new(default_palette())
            .compose(&request(vec![slide(serde_json::json!({"title": "Agenda"}))]), no_images);
        // title text + accent rule only
        assert_eq!(deck.slides[1].shapes.len(), 2);
    }

    #[test]
    fn bullets_stack_with_a_fixed_stride() {
        let deck = DeckComposer::new(default_palette()).compose(
            &request(vec![slide(
                serde_json::json!({"title": "T", "bullets": ["a", "b", "c"]}),
            )]),
            no_images,
        );
        let frames: Vec<Rect> = deck.slides[1]
            .shapes
            .iter()
            .skip(2)
            .map(|s| match s {
                Shape::Text { frame, .. } => *frame,
                other => panic!("unexpected shape {other:?}"),
            })
            .collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1].y - frames[0].y, BULLET_STEP);
        assert_eq!(frames[2].y - frames[0].y, BULLET_STEP * 2);
    }

    #[test]
    fn table_takes_precedence_over_image() {
        let mut calls = 0;
        let deck = DeckComposer::new(default_palette()).compose(
            &request(vec![slide(serde_json::json!({
                "title": "T",
                "table": {"headers": ["A"], "rows": [[1]]},
                "image": "diagram"
            }))]),
            |_| {
                calls += 1;
                None
            },
        );
        assert_eq!(calls, 0);
        assert!(deck.slides[1]
            .shapes
            .iter()
            .any(|s| matches!(s, Shape::Table { .. })));
    }

    #[test]
    fn unresolved_image_is_silently_skipped() {
        let deck = DeckComposer::new(default_palette()).compose(
            &request(vec![slide(
                serde_json::json!({"title": "T", "layout": "image_left", "image": "missing"}),
            )]),
            no_images,
        );
        assert!(!deck.slides[1]
            .shapes
            .iter()
            .any(|s| matches!(s, Shape::Picture { .. })));
    }

    #[test]
    fn stats_layout_places_equal_width_filled_blocks() {
        let deck = DeckComposer::new(default_palette()).compose(
            &request(vec![slide(serde_json::json!({
                "title": "KPIs",
                "layout": "stats",
                "stats": [
                    {"value": "12", "label": "a"},
                    {"value": "34", "label": "b"},
                    {"value": "56", "label": "c"},
                    {"value": "78", "label": "d"}
                ]
            }))]),
            no_images,
        );
        let blocks: Vec<Rect> = deck.slides[1]
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { frame, fill: Some(_), .. } => Some(*frame),
                _ => None,
            })
            .collect();
        assert_eq!(blocks.len(), 4);
        let expected_w = Emu((layout::CANVAS_W.0 - 2 * MARGIN.0) / 4);
        for block in &blocks {
            assert_eq!(block.w, expected_w);
        }
        for pair in blocks.windows(2) {
            assert_eq!(pair[0].right(), pair[1].x);
        }
    }

    #[test]
    fn logo_appears_on_cover_and_content_slides() {
        let composer = DeckComposer::new(default_palette()).with_logo(Some(fake_logo()));
        let deck = composer.compose(
            &request(vec![slide(serde_json::json!({"title": "T"}))]),
            no_images,
        );
        assert_eq!(deck.media.len(), 1);
        for s in &deck.slides {
            assert!(s.shapes.iter().any(|s| matches!(s, Shape::Picture { .. })));
        }
    }

    #[test]
    fn closing_slide_is_appended_on_request() {
        let mut req = request(vec![]);
        req.include_closing_slide = true;
        let deck = DeckComposer::new(default_palette()).compose(&req, no_images);
        assert_eq!(deck.slides.len(), 2);
    }

    #[test]
    fn empty_table_is_not_placed() {
        let deck = DeckComposer::new(default_palette()).compose(
            &request(vec![slide(serde_json::json!({"title": "T", "table": {}}))]),
            no_images,
        );
        assert!(!deck.slides[1]
            .shapes
            .iter()
            .any(|s| matches!(s, Shape::Table { .. })));
    }
}
