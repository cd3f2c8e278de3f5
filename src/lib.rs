#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod boundary;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod labels;
pub mod mask;
pub mod palette;
pub mod segmenter;
pub mod types;

// Tooling support.
pub mod config;
pub mod edges;

// --- High-level re-exports -------------------------------------------------

pub use crate::boundary::{extract_boundaries, extract_key_points, Boundary, GarmentType, KeyPointSet};
pub use crate::diagnostics::SegmentationReport;
pub use crate::error::{Result, SegmentationError};
pub use crate::labels::{to_label_matrix, LabelMatrix, LabelMatrixBuilder};
pub use crate::mask::{clean, mask_confidence, BinaryMask, MaskConfidence};
pub use crate::palette::{label_for, label_for_with_tolerance, Palette, DEFAULT_TOLERANCE_SQ};
pub use crate::segmenter::{remove_background, ClothSegmenter, MaskStrategy, SegmenterParams};
pub use crate::types::{Label, PixelCoord, Rgb};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use garment_segmentation::prelude::*;
///
/// // 2x1 RGBA buffer: red then black.
/// let bytes = [255u8, 0, 0, 255, 0, 0, 0, 255];
/// let labels = to_label_matrix(&ImageRgba8::packed(2, 1, &bytes)).unwrap();
/// assert_eq!(labels.to_rows(), vec![vec![2, 0]]);
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgba8, ImageView, PixelSource};
    pub use crate::{
        to_label_matrix, ClothSegmenter, GarmentType, KeyPointSet, LabelMatrix, SegmenterParams,
    };
}
