use crate::boundary::{Boundary, GarmentType, KeyPointSet};
use crate::diagnostics::TimingBreakdown;
use crate::labels::LabelMatrix;
use crate::mask::{BinaryMask, MaskConfidence};
use crate::segmenter::MaskStrategy;
use serde::Serialize;

/// Everything produced by one [`ClothSegmenter::segment`](crate::ClothSegmenter::segment) call.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationReport {
    pub garment_type: GarmentType,
    pub input: InputDescriptor,
    /// Strategy that actually produced the mask (after any fallback).
    pub mask_strategy: MaskStrategy,
    pub labels: LabelMatrix,
    pub mask: BinaryMask,
    pub boundary: Boundary,
    pub key_points: KeyPointSet,
    pub confidence: MaskConfidence,
    pub palette_coverage: PaletteCoverage,
    pub timing: TimingBreakdown,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// How much of the image the palette recognised.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteCoverage {
    /// Pixels decoded as label 0 (background or out of palette).
    pub unknown_pixels: usize,
    /// Pixel count per label value.
    pub label_histogram: Vec<usize>,
}

impl PaletteCoverage {
    pub fn from_labels(labels: &LabelMatrix) -> Self {
        Self {
            unknown_pixels: labels.unknown_count(),
            label_histogram: labels.histogram(),
        }
    }
}

impl SegmentationReport {
    /// Short human-readable summary for logs and demos.
    pub fn summary(&self) -> String {
        let kp = &self.key_points;
        format!(
            "{}x{} {} via {:?}: coverage={:.3} edge_density={:.3} confidence={:.1} \
             shoulders={} collar={} sleeves={} waist={} hem={} total_ms={:.3}",
            self.input.width,
            self.input.height,
            self.garment_type,
            self.mask_strategy,
            self.confidence.coverage,
            self.confidence.edge_density,
            self.confidence.score,
            kp.shoulders.len(),
            kp.collar.len(),
            kp.sleeves.len(),
            kp.waist.len(),
            kp.hem.len(),
            self.timing.total_ms
        )
    }
}
