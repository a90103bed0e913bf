//! Input resolution failures and routing.

use stegscan::input::{resolve, IOLimits, RawInput};
use stegscan::{analyze_path, FileType, StegError};

use crate::common::*;

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with(dir.path(), &["lsb_analysis"], &[]);
    let err = analyze_path(&dir.path().join("absent.png"), &config).unwrap_err();
    assert!(matches!(err, StegError::InputNotFound { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn test_corrupt_image_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
    data.extend_from_slice(&[0xAB; 64]);
    let path = write_bytes(dir.path(), "corrupt.png", &data);

    let err = resolve(&path, IOLimits::default()).unwrap_err();
    assert!(matches!(err, StegError::InputUnreadable { .. }));
}

#[test]
fn test_image_extension_on_plain_bytes_routes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_bytes(dir.path(), "fake.png", b"just some text pretending");

    let resolved = resolve(&path, IOLimits::default()).unwrap();
    assert!(matches!(resolved.input, RawInput::Bytes(_)));
}

#[test]
fn test_png_without_extension_routes_to_image() {
    let dir = tempfile::tempdir().unwrap();
    let png = write_solid_rgb_png(dir.path(), "tmp.png", 1, 1, [1, 2, 3]);
    let bare = dir.path().join("noextension");
    std::fs::rename(&png, &bare).unwrap();

    let resolved = resolve(&bare, IOLimits::default()).unwrap();
    match resolved.input {
        RawInput::Image(grid) => assert_eq!(grid.samples(), &[1, 2, 3]),
        RawInput::Bytes(_) => panic!("PNG content should decode as an image"),
    }
}

#[test]
fn test_size_limit_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_bytes(dir.path(), "big.bin", &[0u8; 2048]);
    let mut config = config_with(dir.path(), &[], &["metadata_analysis"]);
    config.max_input_size = 1024;

    let err = analyze_path(&path, &config).unwrap_err();
    assert!(matches!(err, StegError::InputUnreadable { .. }));
}

#[test]
fn test_undecodable_image_formats_route_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut psd = b"8BPS\x00\x01".to_vec();
    psd.extend_from_slice(&[0u8; 32]);
    let mut heic = b"\x00\x00\x00\x18ftypheic\x00\x00\x00\x00mif1heic".to_vec();
    heic.extend_from_slice(&[0u8; 32]);

    for (name, data) in [("layers.psd", psd), ("photo.heic", heic)] {
        let path = write_bytes(dir.path(), name, &data);
        let resolved = resolve(&path, IOLimits::default()).unwrap();
        assert_eq!(resolved.input, RawInput::Bytes(data), "{name}");

        let config = config_with(dir.path(), &["lsb_analysis"], &["metadata_analysis"]);
        let record = analyze_path(&path, &config).unwrap();
        assert_eq!(record.file_type, FileType::File);
        assert!(record.detection_results.get("metadata_analysis").is_some());
    }
}

#[test]
fn test_netpbm_routes_to_image() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = b"P5\n3 1\n255\n".to_vec();
    data.extend_from_slice(&[0, 2, 4]);
    let path = write_bytes(dir.path(), "gray.pgm", &data);

    let config = config_with(dir.path(), &["lsb_analysis"], &[]);
    let record = analyze_path(&path, &config).unwrap();
    assert_eq!(record.file_type, FileType::Image);
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value["detection_results"]["lsb_analysis"]["lsb_statistical_anomalies"]["channel_0"]["chi2_value"],
        3.0
    );
}
