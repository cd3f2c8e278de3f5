//! End-to-end cloth segmentation.
//!
//! [`ClothSegmenter`] normalizes a pixel source, decodes it into a label
//! matrix, derives and cleans the garment mask, scans its boundaries and
//! extracts garment key points, timing every stage.
//!
//! ```no_run
//! use garment_segmentation::{ClothSegmenter, GarmentType, SegmenterParams};
//! use garment_segmentation::image::ImageRgba8;
//!
//! # fn example(bytes: &[u8]) -> garment_segmentation::Result<()> {
//! let source = ImageRgba8::packed(256, 256, bytes);
//! let segmenter = ClothSegmenter::new(SegmenterParams::default());
//! let report = segmenter.segment(&source, GarmentType::LowerBody)?;
//! println!("waist points: {}", report.key_points.waist.len());
//! # Ok(())
//! # }
//! ```
use super::params::{MaskStrategy, SegmenterParams};
use crate::boundary::{extract_boundaries, extract_key_points, GarmentType};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{InputDescriptor, PaletteCoverage, SegmentationReport, TimingBreakdown};
use crate::error::Result;
use crate::image::{PixelSource, RgbaFrame};
use crate::labels::{LabelMatrix, LabelMatrixBuilder};
use crate::mask::{clean, mask_confidence, BinaryMask};
use crate::palette::Palette;
use log::{debug, warn};
use rayon::prelude::*;
use std::time::Instant;

/// Cloth segmenter holding a palette and pipeline parameters.
///
/// Stateless between calls; one instance can serve many images, including
/// from several threads at once.
#[derive(Clone, Debug)]
pub struct ClothSegmenter {
    params: SegmenterParams,
    palette: Palette,
}

impl Default for ClothSegmenter {
    fn default() -> Self {
        Self::new(SegmenterParams::default())
    }
}

impl ClothSegmenter {
    /// Create a segmenter using the standard palette.
    pub fn new(params: SegmenterParams) -> Self {
        Self {
            params,
            palette: Palette::standard().clone(),
        }
    }

    /// Replace the palette, e.g. with a project-specific color scheme.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn params(&self) -> &SegmenterParams {
        &self.params
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Label matrix only, with this segmenter's palette and tolerance.
    pub fn label_matrix<S: PixelSource + ?Sized>(&self, source: &S) -> Result<LabelMatrix> {
        self.builder().build(source)
    }

    /// Run the full pipeline on one image.
    pub fn segment<S: PixelSource + ?Sized>(
        &self,
        source: &S,
        garment_type: GarmentType,
    ) -> Result<SegmentationReport> {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let start = Instant::now();
        let frame = source.rgba_frame()?;
        timing.record_since("normalize", start);
        debug!(
            "ClothSegmenter::segment start w={} h={} type={} strategy={:?}",
            frame.width(), frame.height(), garment_type, self.params.mask_strategy
        );

        let start = Instant::now();
        let labels = self.builder().build_frame(&frame);
        timing.record_since("labels", start);

        let start = Instant::now();
        let (mut mask, mask_strategy) = self.derive_mask(&frame, &labels);
        if self.params.clean {
            mask = clean(&mask);
        }
        timing.record_since("mask", start);

        let start = Instant::now();
        let boundary = extract_boundaries(&mask);
        let key_points = extract_key_points(&boundary, garment_type);
        timing.record_since("keypoints", start);
        if key_points.is_empty() {
            debug!("ClothSegmenter::segment no key points for type={garment_type}");
        }

        let start = Instant::now();
        let confidence = mask_confidence(&mask);
        timing.record_since("confidence", start);

        timing.total_ms = elapsed_ms(total_start);
        debug!(
            "ClothSegmenter::segment done coverage={:.3} confidence={:.1} total_ms={:.3}",
            confidence.coverage, confidence.score, timing.total_ms
        );

        Ok(SegmentationReport {
            garment_type,
            input: InputDescriptor {
                width: frame.width(),
                height: frame.height(),
            },
            mask_strategy,
            palette_coverage: PaletteCoverage::from_labels(&labels),
            labels,
            mask,
            boundary,
            key_points,
            confidence,
            timing,
        })
    }

    /// Segment independent images in parallel. Results keep input order.
    pub fn segment_batch<S>(
        &self,
        sources: &[S],
        garment_type: GarmentType,
    ) -> Vec<Result<SegmentationReport>>
    where
        S: PixelSource + Sync,
    {
        sources
            .par_iter()
            .map(|source| self.segment(source, garment_type))
            .collect()
    }

    fn builder(&self) -> LabelMatrixBuilder<'_> {
        LabelMatrixBuilder::new(&self.palette).with_tolerance_sq(self.params.tolerance_sq)
    }

    fn derive_mask(&self, frame: &RgbaFrame<'_>, labels: &LabelMatrix) -> (BinaryMask, MaskStrategy) {
        let luminance = || BinaryMask::from_luminance(frame, self.params.luminance_threshold);
        match self.params.mask_strategy {
            MaskStrategy::Palette => (BinaryMask::from_labels(labels), MaskStrategy::Palette),
            MaskStrategy::Luminance => (luminance(), MaskStrategy::Luminance),
            MaskStrategy::Auto => {
                let mask = BinaryMask::from_labels(labels);
                if mask.foreground_count() > 0 || frame.pixel_count() == 0 {
                    (mask, MaskStrategy::Palette)
                } else {
                    warn!(
                        "palette found no garment pixels in {}x{} image, falling back to luminance < {}",
                        frame.width(), frame.height(), self.params.luminance_threshold
                    );
                    (luminance(), MaskStrategy::Luminance)
                }
            }
        }
    }
}
