//! Cloth segmentation pipeline.
//!
//! Stages, in order: source normalization → palette decoding → garment mask
//! (palette labels, luminance, or palette with luminance fallback) → optional
//! 3×3 closing → boundary scan → key points → confidence. Every call is
//! independent; [`ClothSegmenter::segment_batch`] fans images out over rayon.

mod background;
mod params;
mod pipeline;

pub use background::{remove_background, DEFAULT_BACKGROUND_THRESHOLD};
pub use params::{MaskStrategy, SegmenterParams};
pub use pipeline::ClothSegmenter;
