use crate::image::ImageView;
use crate::mask::FOREGROUND_THRESHOLD;
use crate::types::PixelCoord;
use serde::{Deserialize, Serialize};

/// Silhouette outline as four directional scans.
///
/// `top`/`bottom` hold at most one point per column in increasing `x`;
/// `left`/`right` at most one point per row in increasing `y`. Columns and
/// rows without foreground contribute nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    pub top: Vec<PixelCoord>,
    pub bottom: Vec<PixelCoord>,
    pub left: Vec<PixelCoord>,
    pub right: Vec<PixelCoord>,
}

impl Boundary {
    /// True when no foreground pixel was found.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.left.is_empty()
    }
}

/// Scan a mask for its directional boundaries.
///
/// Works on any single-channel view whose pixels widen to `f32`: binary masks
/// (0/1) as well as probability images. A pixel is foreground when its value
/// exceeds [`FOREGROUND_THRESHOLD`].
pub fn extract_boundaries<I>(mask: &I) -> Boundary
where
    I: ImageView,
    I::Pixel: Into<f32>,
{
    let (w, h) = (mask.width(), mask.height());
    let fg = |x: usize, y: usize| -> bool {
        let v: f32 = mask.pixel(x, y).into();
        v > FOREGROUND_THRESHOLD
    };
    let on = |v: &I::Pixel| -> bool {
        let v: f32 = (*v).into();
        v > FOREGROUND_THRESHOLD
    };

    let mut boundary = Boundary::default();
    for x in 0..w {
        if let Some(y) = (0..h).find(|&y| fg(x, y)) {
            boundary.top.push(PixelCoord::new(x, y));
        }
        if let Some(y) = (0..h).rev().find(|&y| fg(x, y)) {
            boundary.bottom.push(PixelCoord::new(x, y));
        }
    }
    for (y, row) in mask.rows().enumerate() {
        if let Some(x) = row.iter().position(on) {
            boundary.left.push(PixelCoord::new(x, y));
        }
        if let Some(x) = row.iter().rposition(on) {
            boundary.right.push(PixelCoord::new(x, y));
        }
    }
    boundary
}
