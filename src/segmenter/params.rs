//! Parameters for the segmentation pipeline.
//!
//! Defaults reproduce the standard decoding: tolerance² 1000, palette mask
//! with a luminance fallback, one cleanup pass.
use crate::mask::DEFAULT_LUMINANCE_THRESHOLD;
use crate::palette::DEFAULT_TOLERANCE_SQ;
use serde::{Deserialize, Serialize};

/// How the garment mask is derived from the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskStrategy {
    /// Every non-background palette label is garment.
    Palette,
    /// Pixels darker than the luminance threshold are garment.
    Luminance,
    /// Palette mask, or luminance when the palette finds no garment pixel.
    #[default]
    Auto,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterParams {
    /// Squared RGB distance accepted by the palette fallback. Lower it for
    /// strict segmentation maps, raise it for lossy (JPEG) inputs.
    pub tolerance_sq: u32,
    pub mask_strategy: MaskStrategy,
    /// Gray level separating garment from a bright background.
    pub luminance_threshold: u8,
    /// Apply the 3×3 closing before boundary extraction.
    pub clean: bool,
}

impl Default for SegmenterParams {
    fn default() -> Self {
        Self {
            tolerance_sq: DEFAULT_TOLERANCE_SQ,
            mask_strategy: MaskStrategy::Auto,
            luminance_threshold: DEFAULT_LUMINANCE_THRESHOLD,
            clean: true,
        }
    }
}
