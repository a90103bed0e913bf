//! Analysis records produced from files on disk.

use serde_json::{json, Value};
use stegscan::{analyze_path, FileType};

use crate::common::*;

/// 2x2 black RGB image: every channel has observed [4, 0] against [2, 2].
#[test]
fn test_black_rgb_lsb_chi_square() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_solid_rgb_png(dir.path(), "black.png", 2, 2, [0, 0, 0]);
    let config = config_with(dir.path(), &["lsb_analysis"], &[]);

    let record = analyze_path(&path, &config).unwrap();
    assert_eq!(record.file_type, FileType::Image);

    let value = serde_json::to_value(&record).unwrap();
    let channels = &value["detection_results"]["lsb_analysis"]["lsb_statistical_anomalies"];
    assert_eq!(
        channels,
        &json!({
            "channel_0": {"chi2_value": 4.0},
            "channel_1": {"chi2_value": 4.0},
            "channel_2": {"chi2_value": 4.0},
        })
    );
    assert_eq!(value["features"]["pixel_mean"], 0.0);
    assert_eq!(value["features"]["pixel_std"], 0.0);
}

#[test]
fn test_grayscale_image_single_channel() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gradient_gray_png(dir.path(), "gradient.png", 16, 16);
    let config = config_with(
        dir.path(),
        &["lsb_analysis", "visual_lsb_analysis", "histogram_analysis"],
        &[],
    );

    let value = serde_json::to_value(analyze_path(&path, &config).unwrap()).unwrap();
    let results = &value["detection_results"];

    // 0..=255 once each: perfectly balanced LSBs
    assert_eq!(
        results["lsb_analysis"]["lsb_statistical_anomalies"],
        json!({"channel_0": {"chi2_value": 0.0}})
    );
    assert_eq!(
        results["visual_lsb_analysis"],
        json!({"bit_planes": "Generated (can't be directly shown in report)"})
    );
    assert_eq!(
        results["histogram_analysis"],
        json!({"color_histograms": "Analysis performed (histograms in report)"})
    );
    assert_eq!(value["features"]["channels"], 1);
    assert_eq!(value["features"]["pixel_mean"], 127.5);
}

#[test]
fn test_histograms_embedded_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_solid_rgb_png(dir.path(), "red.png", 3, 3, [255, 0, 0]);
    let mut config = config_with(dir.path(), &["histogram_analysis"], &[]);
    config.include_histograms = true;

    let value = serde_json::to_value(analyze_path(&path, &config).unwrap()).unwrap();
    let histograms = &value["detection_results"]["histogram_analysis"]["histograms"];
    assert_eq!(histograms["channel_0"], json!({"255": 9}));
    assert_eq!(histograms["channel_1"], json!({"0": 9}));
    assert_eq!(histograms["channel_2"], json!({"0": 9}));
}

#[test]
fn test_binary_file_methods() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_bytes(dir.path(), "sevens.bin", &[7u8; 1000]);
    let config = config_with(
        dir.path(),
        &["lsb_analysis"],
        &["metadata_analysis", "byte_frequency_analysis"],
    );

    let record = analyze_path(&path, &config).unwrap();
    assert_eq!(record.file_type, FileType::File);

    let value = serde_json::to_value(&record).unwrap();
    let results = &value["detection_results"];
    assert!(results.get("lsb_analysis").is_none());
    assert_eq!(
        results["metadata_analysis"]["metadata_anomalies"]["file_size"],
        "Size: 1000 bytes (further analysis needed)"
    );

    let deviations = results["byte_frequency_analysis"]["byte_frequency_deviations"]
        .as_object()
        .unwrap();
    assert_eq!(deviations.len(), 256);
    let seven = deviations["7"].as_f64().unwrap();
    assert!((seven - 996.09375).abs() < 1e-9);
    let other = deviations["8"].as_f64().unwrap();
    assert!((other + 3.90625).abs() < 1e-9);
}

#[test]
fn test_uniform_file_has_no_deviations() {
    let dir = tempfile::tempdir().unwrap();
    let data: Vec<u8> = (0..=255).collect();
    let path = write_bytes(dir.path(), "uniform.bin", &data);
    let config = config_with(dir.path(), &[], &["byte_frequency_analysis"]);

    let value = serde_json::to_value(analyze_path(&path, &config).unwrap()).unwrap();
    assert_eq!(
        value["detection_results"]["byte_frequency_analysis"],
        json!({"byte_frequency_deviations": {}})
    );
}

#[test]
fn test_unknown_configured_methods_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_solid_rgb_png(dir.path(), "white.png", 2, 2, [255, 255, 255]);
    let config = config_with(dir.path(), &["dct_analysis", "lsb_analysis"], &["nope"]);

    let value = serde_json::to_value(analyze_path(&path, &config).unwrap()).unwrap();
    let results = value["detection_results"].as_object().unwrap();
    assert_eq!(results.keys().collect::<Vec<_>>(), vec!["lsb_analysis"]);
    assert_eq!(
        results["lsb_analysis"]["lsb_statistical_anomalies"]["channel_0"],
        json!({"chi2_value": 4.0})
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gradient_gray_png(dir.path(), "g.png", 8, 8);
    let config = config_with(dir.path(), &["lsb_analysis", "histogram_analysis"], &[]);

    let first: Value = serde_json::to_value(analyze_path(&path, &config).unwrap()).unwrap();
    let second: Value = serde_json::to_value(analyze_path(&path, &config).unwrap()).unwrap();
    assert_eq!(first, second);
}
