//! I/O helpers for garment images, masks and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/WebP into an owned RGBA8 surface.
//! - `save_mask_png`: write a binary mask as a black/white PNG.
//! - `save_label_png`: write a label matrix colorized through a palette.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageView;
use crate::error::{Result, SegmentationError};
use crate::labels::LabelMatrix;
use crate::mask::BinaryMask;
use crate::palette::Palette;
use image::error::{ImageError, LimitError, LimitErrorKind};
use image::{GrayImage, Luma, Rgb as RgbPixel, RgbImage, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to RGBA8.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| SegmentationError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.into_rgba8())
}

/// Save a mask as an 8-bit PNG (garment = 255).
pub fn save_mask_png(mask: &BinaryMask, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let (w, h) = encode_dims(mask, path)?;
    let mut out = GrayImage::new(w, h);
    for (y, row) in (0..h).zip(mask.rows()) {
        for (x, &v) in (0..w).zip(row) {
            out.put_pixel(x, y, Luma([if v != 0 { 255 } else { 0 }]));
        }
    }
    out.save(path).map_err(|source| SegmentationError::ImageEncode {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a label matrix as an RGB PNG using the first palette color of each
/// label. Labels without a color are drawn black.
pub fn save_label_png(labels: &LabelMatrix, palette: &Palette, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let lut: Vec<[u8; 3]> = (0..=u8::MAX)
        .map(|l| palette.color_for(l).map_or([0, 0, 0], Into::into))
        .collect();
    let (w, h) = encode_dims(labels, path)?;
    let mut out = RgbImage::new(w, h);
    for (y, row) in (0..h).zip(labels.rows()) {
        for (x, &label) in (0..w).zip(row) {
            out.put_pixel(x, y, RgbPixel(lut[label as usize]));
        }
    }
    out.save(path).map_err(|source| SegmentationError::ImageEncode {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| SegmentationError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| SegmentationError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Image dimensions as `u32`, rejecting shapes the encoders cannot hold.
fn encode_dims<I: ImageView>(img: &I, path: &Path) -> Result<(u32, u32)> {
    match (u32::try_from(img.width()), u32::try_from(img.height())) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(SegmentationError::ImageEncode {
            path: path.to_path_buf(),
            source: ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError)),
        }),
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| SegmentationError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
