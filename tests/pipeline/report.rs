//! Reports written from real analysis runs.

use std::fs;
use std::path::Path;
use stegscan::report::{Report, ReportWriter, TIMESTAMP_FORMAT};
use stegscan::analyze_path;

use crate::common::*;

#[test]
fn test_report_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_solid_rgb_png(dir.path(), "cover.png", 2, 2, [0, 0, 0]);
    let config = config_with(dir.path(), &["lsb_analysis"], &[]);

    let record = analyze_path(&input, &config).unwrap();
    let report = Report::new(&input, &record);
    let path = ReportWriter::from_config(&config).write(&report).unwrap();

    let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("steganalysis_report_cover.png_"));
    assert!(file_name.ends_with(".json"));

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["input_file"].as_str(), input.to_str());
    let ts = value["timestamp"].as_str().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).is_ok());
    assert_eq!(
        value["analysis_results"]["detection_results"]["lsb_analysis"]["lsb_statistical_anomalies"]
            ["channel_1"]["chi2_value"],
        4.0
    );
}

#[test]
fn test_bit_plane_export_alongside_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_gradient_gray_png(dir.path(), "grad.png", 4, 4);
    let mut config = config_with(dir.path(), &["visual_lsb_analysis"], &[]);
    config.export_bit_planes = true;

    let record = analyze_path(&input, &config).unwrap();
    let report = Report::with_timestamp(Path::new(&input), &record, "2025-01-01_00-00-00".into());
    let writer = ReportWriter::from_config(&config);
    writer.write(&report).unwrap();
    let planes = writer.export_bit_planes(&report).unwrap();

    assert_eq!(planes.len(), 8);
    let lsb = image::open(&planes[0]).unwrap().to_luma8();
    // pixel values 0..16: LSB plane alternates 0, 255
    assert_eq!(lsb.get_pixel(0, 0).0, [0]);
    assert_eq!(lsb.get_pixel(1, 0).0, [255]);
    assert!(writer
        .output_dir()
        .join("bitplane_grad.png_2025-01-01_00-00-00_7.png")
        .exists());
}
