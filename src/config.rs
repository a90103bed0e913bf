//! Configuration for the steganalysis suite.
//!
//! The defaults are an ordinary value built by [`SuiteConfig::default`] and
//! passed down explicitly. On-disk files are merged over the defaults, so a
//! file only needs the keys it wants to change.

use crate::detection::DetectorOptions;
use crate::error::{Result, StegError};
use crate::input::IOLimits;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// File consulted when no other configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Master configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Image methods to run (default: `["lsb_analysis"]`).
    pub default_image_methods: Vec<String>,
    /// File methods to run (default: none).
    pub default_file_methods: Vec<String>,
    /// Directory that receives report files (default: `reports`).
    pub report_output_dir: String,
    /// Carried for consumers of the report; statistics are not classified
    /// against it (default: 0.7).
    pub suspicious_threshold: f64,
    /// Embed per-channel histograms in `histogram_analysis` output.
    pub include_histograms: bool,
    /// Write generated bit planes as PNG files next to the report.
    pub export_bit_planes: bool,
    /// Largest input accepted, in bytes (default: 100MB).
    pub max_input_size: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            default_image_methods: vec!["lsb_analysis".to_string()],
            default_file_methods: Vec::new(),
            report_output_dir: "reports".to_string(),
            suspicious_threshold: 0.7,
            include_histograms: false,
            export_bit_planes: false,
            max_input_size: 100 * 1024 * 1024,
        }
    }
}

impl SuiteConfig {
    pub fn enabled_image_methods(&self) -> BTreeSet<String> {
        self.default_image_methods.iter().cloned().collect()
    }

    pub fn enabled_file_methods(&self) -> BTreeSet<String> {
        self.default_file_methods.iter().cloned().collect()
    }

    pub fn detector_options(&self) -> DetectorOptions {
        DetectorOptions {
            include_histograms: self.include_histograms,
            keep_bit_planes: self.export_bit_planes,
        }
    }

    pub fn io_limits(&self) -> IOLimits {
        IOLimits::new(self.max_input_size)
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    DefaultMissing,
    DefaultMalformed,
}

impl ConfigSource {
    pub fn is_default(self) -> bool {
        self != ConfigSource::File
    }
}

/// A configuration plus how it was obtained.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: SuiteConfig,
    pub source: ConfigSource,
    /// Why the defaults were used, when they were.
    pub fallback_reason: Option<String>,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Read and parse a configuration file, merging it over the defaults.
    pub fn try_load(path: &Path) -> Result<SuiteConfig> {
        if !path.exists() {
            return Err(StegError::ConfigMissing {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|e| StegError::ConfigMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| StegError::ConfigMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Like [`ConfigLoader::try_load`], but never fails: a missing or
    /// malformed file yields the defaults and a warning.
    pub fn load(path: &Path) -> LoadedConfig {
        match Self::try_load(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                LoadedConfig {
                    config,
                    source: ConfigSource::File,
                    fallback_reason: None,
                }
            }
            Err(err) => {
                let source = match err {
                    StegError::ConfigMissing { .. } => ConfigSource::DefaultMissing,
                    _ => ConfigSource::DefaultMalformed,
                };
                warn!(error = %err, "Using default configuration");
                LoadedConfig {
                    config: SuiteConfig::default(),
                    source,
                    fallback_reason: Some(err.to_string()),
                }
            }
        }
    }

    /// Persist as pretty JSON.
    pub fn save(config: &SuiteConfig, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(path, json)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}
