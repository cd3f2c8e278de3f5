use super::Boundary;
use crate::error::SegmentationError;
use crate::types::PixelCoord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse garment class selecting the key point rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentType {
    /// Shirts, jackets, tops.
    #[default]
    UpperBody,
    /// Pants, skirts, shorts.
    LowerBody,
    /// Dresses, jumpsuits.
    FullBody,
    /// Hats, scarves, jewelry.
    Accessories,
}

impl GarmentType {
    pub const ALL: [GarmentType; 4] = [
        GarmentType::UpperBody,
        GarmentType::LowerBody,
        GarmentType::FullBody,
        GarmentType::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentType::UpperBody => "upper_body",
            GarmentType::LowerBody => "lower_body",
            GarmentType::FullBody => "full_body",
            GarmentType::Accessories => "accessories",
        }
    }
}

impl fmt::Display for GarmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GarmentType {
    type Err = SegmentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GarmentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SegmentationError::UnknownGarmentType(s.to_string()))
    }
}

/// Named anchor points for garment warping.
///
/// Lists a garment type has no rule for stay empty. An empty list means the
/// region could not be extracted, not a zero-sized garment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPointSet {
    /// Left then right shoulder.
    pub shoulders: Vec<PixelCoord>,
    pub collar: Vec<PixelCoord>,
    /// Left then right sleeve.
    pub sleeves: Vec<PixelCoord>,
    pub waist: Vec<PixelCoord>,
    pub hem: Vec<PixelCoord>,
}

impl KeyPointSet {
    pub fn is_empty(&self) -> bool {
        self.shoulders.is_empty()
            && self.collar.is_empty()
            && self.sleeves.is_empty()
            && self.waist.is_empty()
            && self.hem.is_empty()
    }
}

/// Derive key points from a boundary.
///
/// Upper body: shoulders at `top[n/4]` and `top[3n/4]`, collar at `top[n/2]`,
/// sleeves at the middle row of `left`/`right`. Lower body: the whole `top`
/// scan is the waist and the whole `bottom` scan is the hem. Full body and
/// accessories have no rule yet. Indices use floor division.
pub fn extract_key_points(boundary: &Boundary, garment_type: GarmentType) -> KeyPointSet {
    let mut kp = KeyPointSet::default();
    match garment_type {
        GarmentType::UpperBody => {
            let top = &boundary.top;
            let n = top.len();
            if n > 0 {
                kp.shoulders = vec![top[n / 4], top[n * 3 / 4]];
                kp.collar = vec![top[n / 2]];
            }
            let mid = boundary.left.len() / 2;
            if let (Some(&l), Some(&r)) = (boundary.left.get(mid), boundary.right.get(mid)) {
                kp.sleeves = vec![l, r];
            }
        }
        GarmentType::LowerBody => {
            kp.waist = boundary.top.clone();
            kp.hem = boundary.bottom.clone();
        }
        // TODO: define full-body rules once dress keypoints are calibrated on real masks.
        GarmentType::FullBody | GarmentType::Accessories => {}
    }
    kp
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(y: u32, xs: std::ops::Range<u32>) -> Vec<PixelCoord> {
        xs.map(|x| PixelCoord { x, y }).collect()
    }

    fn sample_boundary() -> Boundary {
        Boundary {
            top: row(2, 10..18),
            bottom: row(9, 10..18),
            left: (2..10).map(|y| PixelCoord { x: 10, y }).collect(),
            right: (2..10).map(|y| PixelCoord { x: 17, y }).collect(),
        }
    }

    #[test]
    fn upper_body_percentile_points() {
        let kp = extract_key_points(&sample_boundary(), GarmentType::UpperBody);
        // n = 8: indices 2, 6 and 4.
        assert_eq!(kp.shoulders, vec![PixelCoord { x: 12, y: 2 }, PixelCoord { x: 16, y: 2 }]);
        assert_eq!(kp.collar, vec![PixelCoord { x: 14, y: 2 }]);
        assert_eq!(kp.sleeves, vec![PixelCoord { x: 10, y: 6 }, PixelCoord { x: 17, y: 6 }]);
        assert!(kp.waist.is_empty() && kp.hem.is_empty());
    }

    #[test]
    fn single_point_top_repeats_index_zero() {
        let b = Boundary {
            top: row(0, 3..4),
            ..Boundary::default()
        };
        let kp = extract_key_points(&b, GarmentType::UpperBody);
        assert_eq!(kp.shoulders, vec![PixelCoord { x: 3, y: 0 }; 2]);
        assert_eq!(kp.collar.len(), 1);
        assert!(kp.sleeves.is_empty());
    }

    #[test]
    fn lower_body_uses_full_scans() {
        let b = sample_boundary();
        let kp = extract_key_points(&b, GarmentType::LowerBody);
        assert_eq!(kp.waist, b.top);
        assert_eq!(kp.hem, b.bottom);
        assert!(kp.shoulders.is_empty() && kp.collar.is_empty() && kp.sleeves.is_empty());
    }

    #[test]
    fn other_types_and_empty_boundaries_yield_nothing() {
        let b = sample_boundary();
        assert!(extract_key_points(&b, GarmentType::FullBody).is_empty());
        assert!(extract_key_points(&b, GarmentType::Accessories).is_empty());
        for t in GarmentType::ALL {
            assert!(extract_key_points(&Boundary::default(), t).is_empty());
        }
    }

    #[test]
    fn garment_type_names_round_trip() {
        for t in GarmentType::ALL {
            assert_eq!(t.to_string().parse::<GarmentType>().unwrap(), t);
            assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{t}\""));
        }
        assert!(matches!(
            "hat".parse::<GarmentType>(),
            Err(SegmentationError::UnknownGarmentType(_))
        ));
    }
}
