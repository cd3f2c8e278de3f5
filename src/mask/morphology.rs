//! 3×3 binary morphology.
//!
//! Neighbours outside the image are ignored: dilation never grows in from the
//! border and erosion never eats in from it. With this convention dilation and
//! erosion form an adjoint pair, so [`clean`] (a closing) is idempotent.
use super::BinaryMask;
use crate::image::{ImageView, ImageViewMut};

/// Side of the square structuring element.
const WINDOW: usize = 3;

fn window(i: usize, len: usize) -> std::ops::RangeInclusive<usize> {
    let r = WINDOW / 2;
    i.saturating_sub(r)..=(i + r).min(len - 1)
}

/// Min (`erode`) or max filter over each clipped 3×3 neighbourhood.
fn filter3x3(mask: &BinaryMask, erode: bool) -> BinaryMask {
    let (w, h) = (mask.width(), mask.height());
    let mut out = BinaryMask::new(w, h);
    if mask.is_empty() {
        return out;
    }
    for y in 0..h {
        let rows: Vec<&[u8]> = window(y, h).map(|yy| mask.row(yy)).collect();
        for (x, dst) in out.row_mut(y).iter_mut().enumerate() {
            let xs = window(x, w);
            let mut hood = rows.iter().flat_map(|row| row[xs.clone()].iter());
            let on = if erode {
                hood.all(|&v| v != 0)
            } else {
                hood.any(|&v| v != 0)
            };
            *dst = on as u8;
        }
    }
    out
}

/// Pixel is set if any in-image neighbour is set.
pub fn dilate3x3(mask: &BinaryMask) -> BinaryMask {
    filter3x3(mask, false)
}

/// Pixel stays set only if every in-image neighbour is set.
pub fn erode3x3(mask: &BinaryMask) -> BinaryMask {
    filter3x3(mask, true)
}

/// One dilation followed by one erosion (morphological closing).
///
/// Fills holes and gaps narrower than the 3×3 window. Wider structures pass
/// through unchanged; the operation is not iterated.
pub fn clean(mask: &BinaryMask) -> BinaryMask {
    erode3x3(&dilate3x3(mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(w: usize, h: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> BinaryMask {
        BinaryMask::from_fn(w, h, |x, y| (x0..=x1).contains(&x) && (y0..=y1).contains(&y))
    }

    #[test]
    fn dilate_and_erode_single_pixel() {
        let dot = rect(5, 5, 2, 2, 2, 2);
        let grown = dilate3x3(&dot);
        assert_eq!(grown, rect(5, 5, 1, 1, 3, 3));
        assert_eq!(erode3x3(&grown), dot);
        assert_eq!(erode3x3(&dot).foreground_count(), 0);
    }

    #[test]
    fn border_is_not_eroded() {
        let full = BinaryMask::from_fn(4, 3, |_, _| true);
        assert_eq!(erode3x3(&full), full);
    }

    #[test]
    fn closing_fills_single_pixel_hole() {
        let mut m = rect(10, 10, 2, 2, 7, 7);
        m.set(4, 4, false);
        let cleaned = clean(&m);
        assert!(cleaned.get(4, 4));
        assert_eq!(cleaned, rect(10, 10, 2, 2, 7, 7));
    }

    #[test]
    fn closing_bridges_one_pixel_gap() {
        let m = BinaryMask::from_fn(9, 5, |x, y| (1..=3).contains(&y) && x != 4);
        let cleaned = clean(&m);
        assert!(cleaned.get(4, 2));
    }

    #[test]
    fn clean_is_idempotent_on_clean_masks() {
        // Touches the bottom border, keeps a 2+ pixel margin elsewhere.
        let m = rect(12, 9, 3, 2, 8, 8);
        let once = clean(&m);
        assert_eq!(once, m);
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn empty_mask_passes_through() {
        let m = BinaryMask::new(0, 0);
        assert_eq!(clean(&m), m);
    }
}
