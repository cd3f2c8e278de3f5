//! Garment masks: binarization, 3×3 cleanup and an advisory quality score.
//!
//! A [`BinaryMask`] is derived from a label matrix (label > 0), a probability
//! image (value > 0.5) or, as a fallback for plain product photos, from
//! luminance against a bright background. [`clean`] smooths it with one 3×3
//! closing before boundaries are extracted.

mod binary;
mod confidence;
mod morphology;

pub use binary::{BinaryMask, DEFAULT_LUMINANCE_THRESHOLD, FOREGROUND_THRESHOLD};
pub use confidence::{mask_confidence, MaskConfidence, COVERAGE_RANGE, EDGE_DENSITY_RANGE};
pub use morphology::{clean, dilate3x3, erode3x3};
