//! Normalization of heterogeneous pixel inputs into one RGBA frame.
//!
//! Each concrete input kind has exactly one [`PixelSource`] implementation:
//!
//! - [`ImageRgba8`]: a raw RGBA buffer that carries its own shape;
//! - [`image::RgbaImage`]: an already rendered RGBA8 surface;
//! - [`image::DynamicImage`]: a decoded image of any color type, drawn into
//!   RGBA8 first;
//! - [`RawPixels`]: bare bytes without a shape, always rejected.
//!
//! Downstream stages only ever see an [`RgbaFrame`].
use super::ImageRgba8;
use crate::error::{Result, SegmentationError};
use image::{DynamicImage, RgbaImage};
use std::borrow::Cow;

/// Flat RGBA8 buffer (4 bytes per pixel, row-major, top to bottom).
///
/// `data` always holds exactly `width * height * 4` bytes.
#[derive(Clone, Debug)]
pub struct RgbaFrame<'a> {
    width: usize,
    height: usize,
    data: Cow<'a, [u8]>,
}

impl<'a> RgbaFrame<'a> {
    /// Wrap a packed RGBA buffer. Bytes past the declared shape are dropped.
    pub fn new(width: usize, height: usize, data: impl Into<Cow<'a, [u8]>>) -> Result<Self> {
        let data = data.into();
        let expected = width.checked_mul(height).and_then(|n| n.checked_mul(4));
        let expected = match expected {
            Some(n) if n <= data.len() => n,
            _ => {
                return Err(SegmentationError::BufferTooSmall {
                    width,
                    height,
                    stride: width.saturating_mul(4),
                    expected: expected.unwrap_or(usize::MAX),
                    actual: data.len(),
                })
            }
        };
        let data = match data {
            Cow::Borrowed(bytes) => Cow::Borrowed(&bytes[..expected]),
            Cow::Owned(mut bytes) => {
                bytes.truncate(expected);
                Cow::Owned(bytes)
            }
        };
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data.into_owned()
    }

    /// RGBA bytes of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width * 4;
        &self.data[start..start + self.width * 4]
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Anything that can be normalized to an [`RgbaFrame`].
pub trait PixelSource {
    fn rgba_frame(&self) -> Result<RgbaFrame<'_>>;
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn rgba_frame(&self) -> Result<RgbaFrame<'_>> {
        (**self).rgba_frame()
    }
}

impl<'a> PixelSource for ImageRgba8<'a> {
    fn rgba_frame(&self) -> Result<RgbaFrame<'_>> {
        let too_small = |expected: Option<usize>| SegmentationError::BufferTooSmall {
            width: self.w,
            height: self.h,
            stride: self.stride,
            expected: expected.unwrap_or(usize::MAX),
            actual: self.data.len(),
        };
        let row_len = self.w.checked_mul(4).ok_or_else(|| too_small(None))?;
        let expected = self.required_len();
        match expected {
            Some(n) if self.stride >= row_len && n <= self.data.len() => {}
            _ => return Err(too_small(expected)),
        }
        if self.is_packed() {
            return RgbaFrame::new(self.w, self.h, self.data);
        }
        let mut packed = Vec::with_capacity(row_len * self.h);
        for y in 0..self.h {
            packed.extend_from_slice(self.row(y));
        }
        RgbaFrame::new(self.w, self.h, packed)
    }
}

impl PixelSource for RgbaImage {
    fn rgba_frame(&self) -> Result<RgbaFrame<'_>> {
        RgbaFrame::new(
            self.width() as usize,
            self.height() as usize,
            self.as_raw().as_slice(),
        )
    }
}

impl PixelSource for DynamicImage {
    fn rgba_frame(&self) -> Result<RgbaFrame<'_>> {
        if let Some(rgba) = self.as_rgba8() {
            return rgba.rgba_frame();
        }
        let rgba = self.to_rgba8();
        let (w, h) = (rgba.width() as usize, rgba.height() as usize);
        RgbaFrame::new(w, h, rgba.into_raw())
    }
}

/// Pixel bytes with no declared shape.
///
/// Kept as an explicit type so that callers holding a bare buffer get a
/// descriptive error instead of a guessed layout. Wrap the bytes in
/// [`ImageRgba8`] to supply the shape.
#[derive(Clone, Copy, Debug)]
pub struct RawPixels<'a>(pub &'a [u8]);

impl<'a> PixelSource for RawPixels<'a> {
    fn rgba_frame(&self) -> Result<RgbaFrame<'_>> {
        Err(SegmentationError::UnsupportedSource(format!(
            "raw buffer of {} bytes has no width/height; wrap it in ImageRgba8",
            self.0.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba};

    #[test]
    fn packed_buffer_is_borrowed() {
        let bytes = [1u8, 2, 3, 255, 4, 5, 6, 255];
        let view = ImageRgba8::packed(2, 1, &bytes);
        let frame = view.rgba_frame().unwrap();
        assert!(matches!(frame.data, Cow::Borrowed(_)));
        assert_eq!((frame.width(), frame.height()), (2, 1));
        assert_eq!(frame.row(0), &bytes[..]);
    }

    #[test]
    fn padded_rows_are_repacked() {
        // 1x2 image with 4 bytes of padding after each row.
        let bytes = [9u8, 9, 9, 255, 0, 0, 0, 0, 7, 7, 7, 255];
        let view = ImageRgba8 {
            w: 1,
            h: 2,
            stride: 8,
            data: &bytes,
        };
        let frame = view.rgba_frame().unwrap();
        assert_eq!(&*frame.data, &[9, 9, 9, 255, 7, 7, 7, 255]);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let bytes = [0u8; 7];
        let err = ImageRgba8::packed(2, 1, &bytes).rgba_frame().unwrap_err();
        assert!(matches!(
            err,
            SegmentationError::BufferTooSmall {
                expected: 8,
                actual: 7,
                ..
            }
        ));
    }

    #[test]
    fn frame_shorter_than_shape_is_rejected() {
        let err = RgbaFrame::new(2, 2, vec![0u8; 4]).unwrap_err();
        assert!(matches!(
            err,
            SegmentationError::BufferTooSmall {
                width: 2,
                height: 2,
                expected: 16,
                actual: 4,
                ..
            }
        ));
    }

    #[test]
    fn frame_drops_trailing_bytes() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
        let frame = RgbaFrame::new(1, 2, &bytes[..]).unwrap();
        assert_eq!(frame.data(), &bytes[..8]);
        assert!(matches!(frame.data, Cow::Borrowed(_)));
        let owned = RgbaFrame::new(1, 1, bytes.to_vec()).unwrap();
        assert_eq!(owned.into_data(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn overflowing_shapes_are_rejected() {
        let bytes = [0u8; 16];
        assert!(matches!(
            RgbaFrame::new(usize::MAX, 2, &bytes[..]),
            Err(SegmentationError::BufferTooSmall { expected: usize::MAX, .. })
        ));
        let view = ImageRgba8 {
            w: 2,
            h: usize::MAX,
            stride: 8,
            data: &bytes,
        };
        assert!(matches!(
            view.rgba_frame(),
            Err(SegmentationError::BufferTooSmall { expected: usize::MAX, .. })
        ));
        let wide = ImageRgba8::packed(usize::MAX / 2, 1, &bytes);
        assert!(matches!(
            wide.rgba_frame(),
            Err(SegmentationError::BufferTooSmall { .. })
        ));
    }

    #[test]
    fn raw_pixels_are_unsupported() {
        let bytes = [0u8; 16];
        let err = RawPixels(&bytes).rgba_frame().unwrap_err();
        assert!(matches!(err, SegmentationError::UnsupportedSource(_)));
    }

    #[test]
    fn surface_and_decoded_images_normalize_to_rgba() {
        let mut surface = RgbaImage::new(2, 2);
        surface.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
        let frame = surface.rgba_frame().unwrap();
        assert_eq!(&frame.row(0)[4..8], &[255, 0, 0, 255]);

        let mut gray = GrayImage::new(1, 1);
        gray.put_pixel(0, 0, Luma([128]));
        let decoded = DynamicImage::ImageLuma8(gray);
        let frame = decoded.rgba_frame().unwrap();
        assert_eq!(&*frame.data, &[128, 128, 128, 255]);
    }
}
