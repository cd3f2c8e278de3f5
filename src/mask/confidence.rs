use super::BinaryMask;
use crate::edges::sobel_gradients;
use serde::{Deserialize, Serialize};

/// Coverage band considered plausible for a garment crop.
pub const COVERAGE_RANGE: (f32, f32) = (0.2, 0.8);
/// Mean Sobel magnitude band for a compact, smooth silhouette.
pub const EDGE_DENSITY_RANGE: (f32, f32) = (0.1, 0.5);

/// Advisory mask quality estimate. Not a calibrated probability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskConfidence {
    /// Fraction of pixels marked as garment.
    pub coverage: f32,
    /// Mean Sobel gradient magnitude of the 0/1 mask.
    pub edge_density: f32,
    /// 0.5 per satisfied heuristic, so one of 0.0, 0.5 or 1.0.
    pub score: f32,
}

#[inline]
fn within(v: f32, (lo, hi): (f32, f32)) -> bool {
    v > lo && v < hi
}

pub fn mask_confidence(mask: &BinaryMask) -> MaskConfidence {
    let coverage = mask.coverage();
    let edge_density = sobel_gradients(&mask.to_f32()).mean_magnitude();
    let mut score = 0.0;
    if within(coverage, COVERAGE_RANGE) {
        score += 0.5;
    }
    if within(edge_density, EDGE_DENSITY_RANGE) {
        score += 0.5;
    }
    MaskConfidence {
        coverage,
        edge_density,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_full_masks_score_zero() {
        assert_eq!(mask_confidence(&BinaryMask::new(0, 0)).score, 0.0);
        assert_eq!(mask_confidence(&BinaryMask::new(8, 8)).score, 0.0);
        let full = BinaryMask::from_fn(8, 8, |_, _| true);
        let c = mask_confidence(&full);
        assert_eq!(c.coverage, 1.0);
        assert_eq!(c.edge_density, 0.0);
        assert_eq!(c.score, 0.0);
    }

    #[test]
    fn centered_blob_scores_full_marks() {
        // 40x40 square in a 64x64 frame: coverage 0.39, edge density ~0.31.
        let m = BinaryMask::from_fn(64, 64, |x, y| (12..52).contains(&x) && (12..52).contains(&y));
        let c = mask_confidence(&m);
        assert!(within(c.coverage, COVERAGE_RANGE), "{c:?}");
        assert!(within(c.edge_density, EDGE_DENSITY_RANGE), "{c:?}");
        assert_eq!(c.score, 1.0);
    }

    #[test]
    fn noisy_mask_fails_edge_heuristic() {
        // Two-pixel stripes: half coverage, edges everywhere.
        let m = BinaryMask::from_fn(16, 16, |x, _| x % 4 < 2);
        let c = mask_confidence(&m);
        assert!(c.edge_density >= EDGE_DENSITY_RANGE.1, "{c:?}");
        assert_eq!(c.score, 0.5);
    }
}
