//! Report persistence and console rendering.
//!
//! A report wraps one [`AnalysisRecord`] with the input path and a local
//! timestamp, is written as indented JSON, and is mirrored to the console in
//! a human-readable form.

use crate::config::SuiteConfig;
use crate::detection::Fragment;
use crate::error::{Result, StegError};
use crate::orchestrator::AnalysisRecord;
use chrono::Local;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// `YYYY-MM-DD_HH-MM-SS`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn basename(input: &Path) -> String {
    input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string_lossy().into_owned())
}

/// `steganalysis_report_<basename>_<timestamp>.json`
pub fn report_filename(input: &Path, timestamp: &str) -> String {
    format!("steganalysis_report_{}_{}.json", basename(input), timestamp)
}

#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub input_file: String,
    pub timestamp: String,
    pub analysis_results: &'a AnalysisRecord,
}

impl<'a> Report<'a> {
    pub fn new(input: &Path, record: &'a AnalysisRecord) -> Self {
        Self::with_timestamp(input, record, timestamp_now())
    }

    pub fn with_timestamp(input: &Path, record: &'a AnalysisRecord, timestamp: String) -> Self {
        Self {
            input_file: input.to_string_lossy().into_owned(),
            timestamp,
            analysis_results: record,
        }
    }

    pub fn filename(&self) -> String {
        report_filename(Path::new(&self.input_file), &self.timestamp)
    }
}

/// Serialize with four-space indentation.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| StegError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Human-readable mirror of a report.
pub fn render_console(report: &Report<'_>) -> Result<String> {
    Ok(format!(
        "\n--- Analysis Report ---\nInput File: {}\nTimestamp: {}\n\nAnalysis Results:\n{}",
        report.input_file,
        report.timestamp,
        to_json_pretty(report.analysis_results)?
    ))
}

/// Writes reports and bit-plane artifacts into one output directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn from_config(config: &SuiteConfig) -> Self {
        Self::new(&config.report_output_dir)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|source| StegError::ReportWrite {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Persist the report, returning the file written.
    pub fn write(&self, report: &Report<'_>) -> Result<PathBuf> {
        let path = self.output_dir.join(report.filename());
        let result = self.ensure_dir().and_then(|()| {
            let json = to_json_pretty(report)?;
            fs::write(&path, json).map_err(|source| StegError::ReportWrite {
                path: path.clone(),
                source,
            })
        });
        match result {
            Ok(()) => {
                info!("Report saved to: {}", path.display());
                Ok(path)
            }
            Err(err) => {
                error!(error = %err, "Error saving report");
                Err(err)
            }
        }
    }

    /// Save every bit plane carried by the record as
    /// `bitplane_<basename>_<timestamp>_<bit>.png`. The record only carries
    /// planes when it was analysed with `export_bit_planes` set.
    pub fn export_bit_planes(&self, report: &Report<'_>) -> Result<Vec<PathBuf>> {
        let planes = report
            .analysis_results
            .detection_results
            .iter()
            .find_map(|(_, fragment)| match fragment {
                Fragment::BitPlanes(f) if !f.planes.is_empty() => Some(&f.planes),
                _ => None,
            });
        let Some(planes) = planes else {
            return Ok(Vec::new());
        };

        self.ensure_dir()?;
        let base = basename(Path::new(&report.input_file));
        let mut written = Vec::with_capacity(planes.len());
        for (bit, plane) in planes.iter().enumerate() {
            let path = self
                .output_dir
                .join(format!("bitplane_{}_{}_{}.png", base, report.timestamp, bit));
            let image = plane.to_dynamic().ok_or_else(|| StegError::ReportWrite {
                path: path.clone(),
                source: io::Error::new(io::ErrorKind::InvalidData, "bit plane has no image layout"),
            })?;
            image.save(&path).map_err(|e| StegError::ReportWrite {
                path: path.clone(),
                source: io::Error::other(e),
            })?;
            written.push(path);
        }
        info!("Exported {} bit planes to {}", written.len(), self.output_dir.display());
        Ok(written)
    }
}
