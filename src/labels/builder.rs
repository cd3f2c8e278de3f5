use super::LabelMatrix;
use crate::error::Result;
use crate::image::{PixelSource, RgbaFrame};
use crate::palette::{Palette, DEFAULT_TOLERANCE_SQ};
use crate::types::{Label, Rgb};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Decodes every pixel of a source through a palette.
///
/// Rows are decoded in parallel; the output does not depend on scheduling.
#[derive(Clone, Copy, Debug)]
pub struct LabelMatrixBuilder<'p> {
    palette: &'p Palette,
    tolerance_sq: u32,
}

impl Default for LabelMatrixBuilder<'static> {
    fn default() -> Self {
        Self::new(Palette::standard())
    }
}

impl<'p> LabelMatrixBuilder<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self {
            palette,
            tolerance_sq: DEFAULT_TOLERANCE_SQ,
        }
    }

    pub fn with_tolerance_sq(mut self, tolerance_sq: u32) -> Self {
        self.tolerance_sq = tolerance_sq;
        self
    }

    /// Normalize `source` and decode it.
    pub fn build<S: PixelSource + ?Sized>(&self, source: &S) -> Result<LabelMatrix> {
        let frame = source.rgba_frame()?;
        Ok(self.build_frame(&frame))
    }

    /// Decode an already normalized frame. Alpha is ignored.
    pub(crate) fn build_frame(&self, frame: &RgbaFrame<'_>) -> LabelMatrix {
        let (w, h) = (frame.width(), frame.height());
        if w == 0 || h == 0 {
            return LabelMatrix::new(w, h);
        }
        let start = Instant::now();
        let mut matrix = LabelMatrix::new(w, h);
        matrix
            .data_mut()
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, out)| self.decode_row(frame.row(y), out));

        debug!(
            "LabelMatrixBuilder::build_frame w={} h={} unknown={} elapsed_ms={:.3}",
            w,
            h,
            matrix.unknown_count(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        matrix
    }

    fn decode_row(&self, rgba: &[u8], out: &mut [Label]) {
        for (px, label) in rgba.chunks_exact(4).zip(out.iter_mut()) {
            *label = self
                .palette
                .label_for(Rgb(px[0], px[1], px[2]), self.tolerance_sq);
        }
    }
}

/// Decode `source` with the standard palette and default tolerance.
pub fn to_label_matrix<S: PixelSource + ?Sized>(source: &S) -> Result<LabelMatrix> {
    LabelMatrixBuilder::default().build(source)
}
