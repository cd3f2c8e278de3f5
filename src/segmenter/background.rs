use crate::error::{Result, SegmentationError};
use crate::image::PixelSource;
use image::RgbaImage;

/// Channel level above which all of R, G and B mark studio background.
pub const DEFAULT_BACKGROUND_THRESHOLD: u8 = 240;

/// Copy `source` with background made transparent.
///
/// A pixel is background when R, G and B all exceed `threshold`; it gets
/// alpha 0. Every other pixel gets alpha 255. Colors are kept.
pub fn remove_background<S: PixelSource + ?Sized>(source: &S, threshold: u8) -> Result<RgbaImage> {
    let frame = source.rgba_frame()?;
    let (w, h) = (frame.width(), frame.height());
    let mut data = frame.into_data();
    for px in data.chunks_exact_mut(4) {
        let background = px[..3].iter().all(|&c| c > threshold);
        px[3] = if background { 0 } else { 255 };
    }
    let (Ok(w32), Ok(h32)) = (u32::try_from(w), u32::try_from(h)) else {
        return Err(SegmentationError::UnsupportedSource(format!(
            "{w}x{h} frame exceeds RGBA image limits"
        )));
    };
    RgbaImage::from_raw(w32, h32, data).ok_or_else(|| {
        SegmentationError::UnsupportedSource(format!("{w}x{h} frame has a malformed buffer"))
    })
}
