use image::ImageFormat;
use std::io::Cursor;
use std::sync::Arc;

/// EMU per pixel at the 96 dpi OOXML assumes for raster images.
const EMU_PER_PIXEL: i64 = 9_525;

/// An embeddable raster image: original bytes plus the sniffed format and
/// pixel size needed to name its media part and compute placement extents.
#[derive(Debug, Clone)]
pub struct MediaImage {
    pub bytes: Arc<Vec<u8>>,
    pub extension: &'static str,
    pub content_type: &'static str,
    pub px_width: u32,
    pub px_height: u32,
}

impl MediaImage {
    /// Sniff format and dimensions from raw bytes. Returns `None` for
    /// anything that is not a supported raster image; callers skip the
    /// visual element in that case.
    pub fn sniff(bytes: Arc<Vec<u8>>) -> Option<Self> {
        let reader = image::ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .ok()?;
        let format = reader.format()?;
        let (extension, content_type) = match format {
            ImageFormat::Png => ("png", "image/png"),
            ImageFormat::Jpeg => ("jpeg", "image/jpeg"),
            ImageFormat::Gif => ("gif", "image/gif"),
            other => {
                log::debug!("unsupported embedded image format: {other:?}");
                return None;
            }
        };
        let (px_width, px_height) = reader.into_dimensions().ok()?;
        if px_width == 0 || px_height == 0 {
            return None;
        }
        Some(Self {
            bytes,
            extension,
            content_type,
            px_width,
            px_height,
        })
    }

    /// Natural size in EMU at 96 dpi.
    pub fn natural_emu(&self) -> (i64, i64) {
        (
            i64::from(self.px_width) * EMU_PER_PIXEL,
            i64::from(self.px_height) * EMU_PER_PIXEL,
        )
    }

    /// Largest size preserving aspect ratio that fits the given EMU box.
    pub fn fit_emu(&self, max_w: i64, max_h: i64) -> (i64, i64) {
        let (w, h) = self.natural_emu();
        if w <= max_w && h <= max_h {
            return (w, h);
        }
        let scale_w = max_w as f64 / w as f64;
        let scale_h = max_h as f64 / h as f64;
        let scale = scale_w.min(scale_h);
        ((w as f64 * scale) as i64, (h as f64 * scale) as i64)
    }
}
