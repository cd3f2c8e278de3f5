use garment_segmentation::config::segment::{load_config, SegmentToolConfig};
use garment_segmentation::image::io::{
    load_rgba_image, save_label_png, save_mask_png, write_json_file,
};
use garment_segmentation::{ClothSegmenter, Result, SegmentationReport};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let Some(config_path) = env::args().nth(1) else {
        eprintln!("Usage: segment_demo <config.json>");
        std::process::exit(2);
    };
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgba_image(&config.input)?;
    let segmenter = ClothSegmenter::new(config.params.clone());
    let report = segmenter.segment(&image, config.garment_type)?;

    println!("{}", report.summary());
    write_outputs(&config, &segmenter, &report)
}

fn write_outputs(
    config: &SegmentToolConfig,
    segmenter: &ClothSegmenter,
    report: &SegmentationReport,
) -> Result<()> {
    let out = &config.output;
    if let Some(path) = &out.report_json {
        write_json_file(path, report)?;
        println!("Report written to {}", path.display());
    }
    if let Some(path) = &out.labels_json {
        write_json_file(path, &report.labels)?;
        println!("Label matrix written to {}", path.display());
    }
    if let Some(path) = &out.keypoints_json {
        write_json_file(path, &report.key_points)?;
        println!("Key points written to {}", path.display());
    }
    if let Some(path) = &out.mask_image {
        save_mask_png(&report.mask, path)?;
        println!("Mask written to {}", path.display());
    }
    if let Some(path) = &out.labels_image {
        save_label_png(&report.labels, segmenter.palette(), path)?;
        println!("Label image written to {}", path.display());
    }
    Ok(())
}
