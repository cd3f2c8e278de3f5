/// Borrowed RGBA8 pixel buffer with an explicit shape.
///
/// `stride` is the number of bytes between the starts of consecutive rows and
/// is at least `4 * w`. This is the in-memory counterpart of a canvas
/// `ImageData`: the shape travels with the bytes.
#[derive(Clone, Debug)]
pub struct ImageRgba8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageRgba8<'a> {
    /// Tightly packed view (`stride == 4 * w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w.saturating_mul(4),
            data,
        }
    }

    /// Bytes required to hold the declared shape, `None` on overflow.
    pub fn required_len(&self) -> Option<usize> {
        if self.h == 0 {
            return Some(0);
        }
        (self.h - 1)
            .checked_mul(self.stride)?
            .checked_add(self.w.checked_mul(4)?)
    }

    #[inline]
    pub fn is_packed(&self) -> bool {
        self.w.checked_mul(4) == Some(self.stride)
    }

    /// RGBA bytes of row `y` (exactly `4 * w` long).
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * 4]
    }
}
