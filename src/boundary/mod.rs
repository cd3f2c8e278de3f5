//! Silhouette boundaries and garment key points.
//!
//! [`extract_boundaries`] scans a mask column-wise (top/bottom) and row-wise
//! (left/right). [`extract_key_points`] turns those scans into named anchor
//! points according to the [`GarmentType`]. Neither step fails: missing
//! foreground produces empty lists.
//!
//! The percentile positions used for shoulders, collar and sleeves are
//! placeholder heuristics and have not been calibrated on real garments.

mod keypoints;
mod scan;

pub use keypoints::{extract_key_points, GarmentType, KeyPointSet};
pub use scan::{extract_boundaries, Boundary};
