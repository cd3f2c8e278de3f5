use crate::image::{ImageF32, ImageView, ImageViewMut, RgbaFrame};
use crate::labels::LabelMatrix;
use crate::types::{Label, BACKGROUND};
use serde::ser::{Serialize, Serializer};

/// Threshold above which a probability counts as garment.
pub const FOREGROUND_THRESHOLD: f32 = 0.5;

/// Gray level below which a pixel counts as garment in the luminance fallback.
pub const DEFAULT_LUMINANCE_THRESHOLD: u8 = 240;

/// `height × width` grid of 0/1 values, 1 = garment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMask {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BinaryMask {
    /// All-background mask.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Build from a predicate evaluated at each `(x, y)`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                mask.data[y * width + x] = f(x, y) as u8;
            }
        }
        mask
    }

    /// Every non-background label is garment.
    pub fn from_labels(labels: &LabelMatrix) -> Self {
        Self::from_labels_where(labels, |l| l != BACKGROUND)
    }

    /// Garment where `keep(label)` holds, e.g. to isolate one garment part.
    pub fn from_labels_where(labels: &LabelMatrix, keep: impl Fn(Label) -> bool) -> Self {
        Self {
            width: labels.width(),
            height: labels.height(),
            data: labels.data().iter().map(|&l| keep(l) as u8).collect(),
        }
    }

    /// Threshold a probability image at [`FOREGROUND_THRESHOLD`].
    pub fn from_probability(prob: &ImageF32) -> Self {
        Self {
            width: prob.w,
            height: prob.h,
            data: prob
                .data
                .iter()
                .map(|&p| (p > FOREGROUND_THRESHOLD) as u8)
                .collect(),
        }
    }

    /// Garment wherever the pixel is darker than `threshold`, which separates
    /// product shots from a near-white studio background.
    pub fn from_luminance(frame: &RgbaFrame<'_>, threshold: u8) -> Self {
        let data = frame
            .data()
            .chunks_exact(4)
            .map(|px| (luminance(px[0], px[1], px[2]) < threshold as f32) as u8)
            .collect();
        Self {
            width: frame.width(),
            height: frame.height(),
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.data[y * self.width + x] = on as u8;
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Foreground pixels over all pixels; `0.0` for an empty mask.
    pub fn coverage(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.foreground_count() as f32 / self.data.len() as f32
    }

    pub fn to_f32(&self) -> ImageF32 {
        ImageF32::from_view(self)
    }
}

/// ITU-R BT.601 luma, matching the usual RGB → grayscale conversion.
#[inline]
fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.2989 * r as f32 + 0.5870 * g as f32 + 0.1140 * b as f32
}

impl ImageView for BinaryMask {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl ImageViewMut for BinaryMask {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

impl Serialize for BinaryMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::clean;

    #[test]
    fn labels_binarize_on_background() {
        let labels = LabelMatrix::from_vec(3, 1, vec![0, 4, 26]).unwrap();
        let mask = BinaryMask::from_labels(&labels);
        assert_eq!(mask.data(), &[0, 1, 1]);
        let torso = BinaryMask::from_labels_where(&labels, |l| l == 4);
        assert_eq!(torso.data(), &[0, 1, 0]);
    }

    #[test]
    fn probability_threshold_is_strict() {
        let prob = ImageF32::from_vec(3, 1, vec![0.5, 0.51, 1.0]).unwrap();
        assert_eq!(BinaryMask::from_probability(&prob).data(), &[0, 1, 1]);
    }

    #[test]
    fn luminance_separates_white_background() {
        let frame = RgbaFrame::new(2, 1, vec![250, 250, 250, 255, 30, 60, 200, 255]).unwrap();
        let mask = BinaryMask::from_luminance(&frame, DEFAULT_LUMINANCE_THRESHOLD);
        assert_eq!(mask.data(), &[0, 1]);
        assert!((mask.coverage() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn luminance_mask_matches_frame_shape() {
        // Trailing bytes beyond the 2x1 shape must not leak into the mask.
        let frame = RgbaFrame::new(2, 1, vec![0u8; 12]).unwrap();
        let mask = BinaryMask::from_luminance(&frame, DEFAULT_LUMINANCE_THRESHOLD);
        assert_eq!((mask.width(), mask.height()), (2, 1));
        assert_eq!(mask.data().len(), 2);
        assert_eq!(clean(&mask), mask);
    }

    #[test]
    fn serializes_as_nested_rows() {
        let mask = BinaryMask::from_fn(2, 2, |x, y| x == y);
        assert_eq!(serde_json::to_string(&mask).unwrap(), "[[1,0],[0,1]]");
    }
}
