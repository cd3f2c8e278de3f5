use crate::boundary::GarmentType;
use crate::error::{Result, SegmentationError};
use crate::segmenter::SegmenterParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration for the `segment_demo` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct SegmentToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub garment_type: GarmentType,
    #[serde(default)]
    pub params: SegmenterParams,
    #[serde(default)]
    pub output: SegmentOutputConfig,
}

/// Artifacts to write; every entry is optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SegmentOutputConfig {
    pub report_json: Option<PathBuf>,
    pub labels_json: Option<PathBuf>,
    pub keypoints_json: Option<PathBuf>,
    pub mask_image: Option<PathBuf>,
    pub labels_image: Option<PathBuf>,
}

impl SegmentOutputConfig {
    pub fn is_empty(&self) -> bool {
        self.report_json.is_none()
            && self.labels_json.is_none()
            && self.keypoints_json.is_none()
            && self.mask_image.is_none()
            && self.labels_image.is_none()
    }
}

pub fn load_config(path: &Path) -> Result<SegmentToolConfig> {
    let data = fs::read_to_string(path).map_err(|source| SegmentationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&data).map_err(|e| SegmentationError::InvalidConfig(format!("{}: {e}", path.display())))
}

pub fn parse_config(json: &str) -> std::result::Result<SegmentToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::MaskStrategy;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{ "input": "shirt.png" }"#).unwrap();
        assert_eq!(cfg.input, PathBuf::from("shirt.png"));
        assert_eq!(cfg.garment_type, GarmentType::UpperBody);
        assert_eq!(cfg.params.mask_strategy, MaskStrategy::Auto);
        assert!(cfg.output.is_empty());
    }

    #[test]
    fn full_config_parses() {
        let cfg = parse_config(
            r#"{
                "input": "pants.png",
                "garment_type": "lower_body",
                "params": { "tolerance_sq": 200, "clean": false },
                "output": { "keypoints_json": "out/kp.json", "mask_image": "out/mask.png" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.garment_type, GarmentType::LowerBody);
        assert_eq!(cfg.params.tolerance_sq, 200);
        assert!(!cfg.params.clean);
        assert_eq!(cfg.output.mask_image, Some(PathBuf::from("out/mask.png")));
        assert!(cfg.output.report_json.is_none());
    }

    #[test]
    fn load_config_maps_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = load_config(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(missing, SegmentationError::Io { .. }));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ \"input\": ").unwrap();
        let err = load_config(&broken).unwrap_err();
        assert!(matches!(err, SegmentationError::InvalidConfig(ref msg) if msg.contains("broken.json")));

        let good = dir.path().join("good.json");
        fs::write(&good, r#"{ "input": "a.png", "garment_type": "accessories" }"#).unwrap();
        assert_eq!(load_config(&good).unwrap().garment_type, GarmentType::Accessories);
    }

    #[test]
    fn unknown_garment_type_is_rejected() {
        assert!(parse_config(r#"{ "input": "x.png", "garment_type": "shoes" }"#).is_err());
    }
}
