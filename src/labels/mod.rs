//! Label matrix construction.
//!
//! [`LabelMatrixBuilder`] normalizes any [`PixelSource`](crate::image::PixelSource)
//! to RGBA and decodes each pixel with a [`Palette`](crate::palette::Palette).
//! The result always has exactly `height` rows of `width` labels; colors
//! outside the palette become label `0`.

mod builder;
mod matrix;

pub use builder::{to_label_matrix, LabelMatrixBuilder};
pub use matrix::LabelMatrix;
