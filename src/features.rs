//! Lightweight summary features computed once per input.
//!
//! Features are read-only after extraction and are handed by reference to
//! every detector alongside the raw input.

use crate::input::{PixelGrid, RawInput};
use crate::stats::SampleStats;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;

pub const PIXEL_MEAN: &str = "pixel_mean";
pub const PIXEL_STD: &str = "pixel_std";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const CHANNELS: &str = "channels";
pub const FILE_SIZE: &str = "file_size";
pub const SHA256: &str = "sha256";

/// A single feature value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Int(u64),
    Float(f64),
    Text(String),
}

impl FeatureValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Int(v) => Some(*v as f64),
            FeatureValue::Float(v) => Some(*v),
            FeatureValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Int(v) => write!(f, "{v}"),
            FeatureValue::Float(v) => write!(f, "{v}"),
            FeatureValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<u64> for FeatureValue {
    fn from(v: u64) -> Self {
        FeatureValue::Int(v)
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Float(v)
    }
}

impl From<String> for FeatureValue {
    fn from(v: String) -> Self {
        FeatureValue::Text(v)
    }
}

/// Feature name to value, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet(BTreeMap<String, FeatureValue>);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: impl Into<FeatureValue>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Mean and population standard deviation over every sample of every
/// channel, plus the image geometry.
pub fn extract_image_features(image: &PixelGrid) -> FeatureSet {
    let stats = SampleStats::from_samples(image.samples());
    let mut features = FeatureSet::new();
    features.insert(PIXEL_MEAN, stats.mean);
    features.insert(PIXEL_STD, stats.std_dev);
    features.insert(WIDTH, u64::from(image.width()));
    features.insert(HEIGHT, u64::from(image.height()));
    features.insert(CHANNELS, u64::from(image.channels()));
    features
}

pub fn extract_file_features(content: &[u8]) -> FeatureSet {
    let mut features = FeatureSet::new();
    features.insert(FILE_SIZE, content.len() as u64);
    features.insert(SHA256, hex::encode(Sha256::digest(content)));
    features
}

pub fn extract_features(input: &RawInput) -> FeatureSet {
    match input {
        RawInput::Image(grid) => extract_image_features(grid),
        RawInput::Bytes(content) => extract_file_features(content),
    }
}
