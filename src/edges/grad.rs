//! Sobel image gradients with magnitude.
//!
//! - Convolves the 3×3 Sobel pair with border clamping (replicate).
//! - Outputs per-pixel `gx`, `gy` and `mag = sqrt(gx^2 + gy^2)`.
//!
//! On a 0/1 mask the magnitude is zero inside flat regions and peaks along the
//! silhouette, which is what the mask confidence heuristic measures.
//!
//! Complexity: O(W·H); memory: three float buffers.
use crate::image::{ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative
    pub gx: ImageF32,
    /// Vertical derivative
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel
    pub mag: ImageF32,
}

impl Grad {
    /// Mean gradient magnitude over the whole image.
    pub fn mean_magnitude(&self) -> f32 {
        self.mag.mean()
    }
}

/// Compute Sobel gradients on a single-channel float image.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let (w, h) = (l.w, l.h);
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let rows = [
            l.row(y.saturating_sub(1)),
            l.row(y),
            l.row((y + 1).min(h - 1)),
        ];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let xs = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                for (kx, &xx) in xs.iter().enumerate() {
                    let sample = row[xx];
                    sum_x += sample * SOBEL_KERNEL_X[ky][kx];
                    sum_y += sample * SOBEL_KERNEL_Y[ky][kx];
                }
            }
            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Grad { gx, gy, mag }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_has_no_gradient() {
        let mut img = ImageF32::new(5, 4);
        img.data.iter_mut().for_each(|v| *v = 1.0);
        let g = sobel_gradients(&img);
        assert!(g.mag.data.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn vertical_step_responds_in_x() {
        let mut img = ImageF32::new(6, 3);
        for y in 0..3 {
            for x in 3..6 {
                img.set(x, y, 1.0);
            }
        }
        let g = sobel_gradients(&img);
        assert_eq!(g.gx.get(2, 1), 4.0);
        assert_eq!(g.gy.get(2, 1), 0.0);
        assert_eq!(g.mag.get(0, 1), 0.0);
    }
}
