//! Error type shared by every fallible entry point of the crate.
//!
//! Only source normalization and file I/O can fail. Palette decoding degrades
//! to label `0` and key point extraction degrades to empty lists instead.
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SegmentationError>;

#[derive(Debug, Error)]
pub enum SegmentationError {
    /// The input cannot be normalized to an RGBA frame with a known shape.
    #[error("unsupported pixel source: {0}")]
    UnsupportedSource(String),

    #[error(
        "pixel buffer too small for {width}x{height} (stride {stride}): expected at least {expected} bytes, got {actual}"
    )]
    BufferTooSmall {
        width: usize,
        height: usize,
        stride: usize,
        expected: usize,
        actual: usize,
    },

    #[error("failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode image {path}: {source}")]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown garment type: {0}")]
    UnknownGarmentType(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_error_mentions_shape() {
        let err = SegmentationError::BufferTooSmall {
            width: 4,
            height: 2,
            stride: 16,
            expected: 32,
            actual: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("4x2"), "{msg}");
        assert!(msg.contains("expected at least 32"), "{msg}");
    }
}
