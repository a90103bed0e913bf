//! Common test utilities and helpers.
//!
//! Sample inputs are synthesised into temporary directories so the tests do
//! not depend on checked-in binaries.

use image::{GrayImage, Luma, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use stegscan::SuiteConfig;

/// Write a solid-colour RGB PNG and return its path.
pub fn write_solid_rgb_png(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(rgb))
        .save(&path)
        .unwrap_or_else(|e| panic!("Failed to write {:?}: {}", path, e));
    path
}

/// Write a grayscale PNG whose pixels count up from zero.
pub fn write_gradient_gray_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    GrayImage::from_fn(width, height, |x, y| Luma([((y * width + x) % 256) as u8]))
        .save(&path)
        .unwrap_or_else(|e| panic!("Failed to write {:?}: {}", path, e));
    path
}

/// Write raw bytes and return the path.
pub fn write_bytes(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).unwrap_or_else(|e| panic!("Failed to write {:?}: {}", path, e));
    path
}

/// Configuration with the given methods and reports under `dir`.
pub fn config_with(dir: &Path, image: &[&str], file: &[&str]) -> SuiteConfig {
    SuiteConfig {
        default_image_methods: image.iter().map(|s| s.to_string()).collect(),
        default_file_methods: file.iter().map(|s| s.to_string()).collect(),
        report_output_dir: dir.join("reports").to_string_lossy().into_owned(),
        ..SuiteConfig::default()
    }
}
