//! Image containers, views and pixel-source normalization.

pub mod f32;
pub mod io;
pub mod rgba;
pub mod source;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::rgba::ImageRgba8;
pub use self::source::{PixelSource, RawPixels, RgbaFrame};
pub use self::traits::{ImageView, ImageViewMut, Rows};
