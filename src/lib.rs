//! Steganalysis of images and arbitrary files.
//!
//! An input is resolved (sniffed and decoded), summarised into a feature set,
//! and passed through the detection methods enabled in the configuration. The
//! resulting [`AnalysisRecord`] is then persisted as a JSON report.

/// Suite configuration
pub mod config;
/// Detection method registry
pub mod detection;
pub mod error;
/// Feature extraction
pub mod features;
/// Input resolution
pub mod input;
pub mod logging;
/// Analysis orchestration
pub mod orchestrator;
pub mod report;
/// Statistics primitives
pub mod stats;

pub use config::{ConfigLoader, SuiteConfig};
pub use detection::{DetectionMethod, Fragment};
pub use error::{Result, StegError};
pub use features::{FeatureSet, FeatureValue};
pub use input::{FileType, PixelGrid, RawInput};
pub use orchestrator::{analyze, AnalysisRecord};

use std::path::Path;

/// Resolve `path` and analyze it in one step.
pub fn analyze_path(path: &Path, config: &SuiteConfig) -> Result<AnalysisRecord> {
    let resolved = input::resolve(path, config.io_limits())?;
    Ok(analyze(&resolved.input, config))
}
