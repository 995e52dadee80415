use papermill_types::{Emu, Rect};

/// 16:9 slide canvas, 13.333in x 7.5in.
pub const CANVAS_W: Emu = Emu(12_192_000);
pub const CANVAS_H: Emu = Emu(6_858_000);
/// Outer margin on every slide edge (0.5in).
pub const MARGIN: Emu = Emu(457_200);
/// Horizontal span available to content between the margins.
pub const CONTENT_W: Emu = Emu(CANVAS_W.0 - 2 * MARGIN.0);

/// Gutter between side-by-side frames (0.25in).
const GUTTER: Emu = Emu(228_600);
/// Top of the content area below a slide title and its underline.
const BODY_TOP: Emu = Emu(1_371_600);
/// Vertical stride for stacked bullet lines (0.5in).
pub const BULLET_STEP: Emu = Emu(457_200);

/// The closed set of slide placement strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    Standard,
    TwoColumn,
    Stats,
    ImageLeft,
    ImageRight,
}

impl SlideLayout {
    /// Map a raw layout tag to a strategy. Unknown tags fall back to the
    /// standard layout rather than failing the request.
    pub fn select(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return SlideLayout::Standard;
        };
        match tag.trim().to_ascii_lowercase().as_str() {
            "" | "standard" => SlideLayout::Standard,
            "two_column" | "two-column" | "twocolumn" => SlideLayout::TwoColumn,
            "stats" => SlideLayout::Stats,
            "image_left" | "image-left" => SlideLayout::ImageLeft,
            "image_right" | "image-right" => SlideLayout::ImageRight,
            other => {
                log::debug!("unknown slide layout {other:?}, using standard");
                SlideLayout::Standard
            }
        }
    }
}

/// Title band of a content slide.
pub fn title_frame() -> Rect {
    Rect::new(MARGIN, Emu(274_320), CONTENT_W, Emu(685_800))
}

/// Short accent rule under a content slide title.
pub fn title_rule_frame() -> Rect {
    Rect::new(MARGIN, Emu(1_051_560), Emu::from_inches(2.5), Emu(45_720))
}

/// Full-width frame for stacked body content, starting below the title.
pub fn body_frame(index: usize, height: Emu) -> Rect {
    Rect::new(MARGIN, BODY_TOP + BULLET_STEP * index as i64, CONTENT_W, height)
}

/// Horizontal row of N stat blocks: each block is exactly one Nth of the
/// content width, placed left to right with no overlap.
pub fn stat_frames(n: usize) -> Vec<Rect> {
    let width = CONTENT_W / n as i64;
    (0..n)
        .map(|i| Rect::new(MARGIN + width * i as i64, Emu(2_286_000), width, Emu(1_828_800)))
        .collect()
}

/// Left and right halves of the content area.
pub fn column_frames() -> (Rect, Rect) {
    let half = Emu((CONTENT_W.0 - GUTTER.0) / 2);
    let height = Emu(CANVAS_H.0 - BODY_TOP.0 - MARGIN.0);
    let left = Rect::new(MARGIN, BODY_TOP, half, height);
    let right = Rect::new(MARGIN + half + GUTTER, BODY_TOP, half, height);
    (left, right)
}

/// Headline position on the title slide.
pub fn cover_title_frame() -> Rect {
    Rect::new(MARGIN, Emu(2_057_400), CONTENT_W, Emu(914_400))
}

/// Centered accent rule between the cover title and subtitle.
pub fn cover_rule_frame() -> Rect {
    let width = Emu::from_inches(3.0);
    Rect::new(Emu((CANVAS_W.0 - width.0) / 2), Emu(3_154_680), width, Emu(45_720))
}

pub fn cover_subtitle_frame() -> Rect {
    Rect::new(MARGIN, Emu(3_429_000), CONTENT_W, Emu(548_640))
}

pub fn cover_author_frame() -> Rect {
    Rect::new(MARGIN, Emu(4_114_800), CONTENT_W, Emu(365_760))
}

/// Logo anchor on the title slide: top-right, inside the margins.
pub fn cover_logo_frame(w: Emu, h: Emu) -> Rect {
    Rect::new(Emu(CANVAS_W.0 - MARGIN.0 - w.0), Emu(MARGIN.0 / 2), w, h)
}

/// Small corner mark on content slides: bottom-right, inside the margins.
pub fn corner_logo_frame(w: Emu, h: Emu) -> Rect {
    Rect::new(
        Emu(CANVAS_W.0 - MARGIN.0 - w.0),
        Emu(CANVAS_H.0 - MARGIN.0 - h.0),
        w,
        h,
    )
}

/// Centerpiece frame for the closing slide.
pub fn closing_frame() -> Rect {
    Rect::new(MARGIN, Emu(2_743_200), CONTENT_W, Emu(914_400))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tags_select_standard() {
        assert_eq!(SlideLayout::select(None), SlideLayout::Standard);
        assert_eq!(SlideLayout::select(Some("hexagonal")), SlideLayout::Standard);
        assert_eq!(SlideLayout::select(Some(" STATS ")), SlideLayout::Stats);
        assert_eq!(SlideLayout::select(Some("two-column")), SlideLayout::TwoColumn);
    }

    #[test]
    fn four_stat_blocks_split_the_content_width_without_overlap() {
        let frames = stat_frames(4);
        assert_eq!(frames.len(), 4);
        let expected = Emu((CANVAS_W.0 - 2 * MARGIN.0) / 4);
        for pair in frames.windows(2) {
            assert_eq!(pair[0].right(), pair[1].x);
        }
        for frame in &frames {
            assert_eq!(frame.w, expected);
        }
        assert_eq!(frames[0].x, MARGIN);
    }

    #[test]
    fn stacked_body_frames_advance_by_a_fixed_stride() {
        let a = body_frame(0, BULLET_STEP);
        let b = body_frame(3, BULLET_STEP);
        assert_eq!(b.y - a.y, BULLET_STEP * 3);
    }

    #[test]
    fn columns_do_not_overlap() {
        let (left, right) = column_frames();
        assert!(left.right() < right.x);
        assert_eq!(right.right(), MARGIN + CONTENT_W);
    }

    #[test]
    fn logos_stay_inside_the_canvas() {
        let cover = cover_logo_frame(Emu::from_inches(1.2), Emu::from_inches(0.8));
        assert_eq!(cover.right(), CANVAS_W - MARGIN);
        let corner = corner_logo_frame(Emu::from_inches(0.5), Emu::from_inches(0.5));
        assert_eq!(corner.bottom(), CANVAS_H - MARGIN);
    }
}
