//! Per-method result fragments.
//!
//! Each detector has its own fragment shape. Fragments serialize without a
//! tag so the report shows only the detector's own keys.

use crate::input::PixelGrid;
use serde::Serialize;
use std::collections::BTreeMap;

/// Marker recorded when a channel has no samples to test.
pub const INSUFFICIENT_DATA: &str = "Insufficient data for chi-square test";

pub const BIT_PLANES_GENERATED: &str = "Generated (can't be directly shown in report)";

pub const HISTOGRAMS_COMPUTED: &str = "Analysis performed (histograms in report)";

pub const SIZE_NOTE: &str = "further analysis needed";

/// LSB chi-square outcome for one channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChannelLsb {
    Statistic { chi2_value: f64 },
    Insufficient { error: String },
}

impl ChannelLsb {
    pub fn chi2_value(&self) -> Option<f64> {
        match self {
            ChannelLsb::Statistic { chi2_value } => Some(*chi2_value),
            ChannelLsb::Insufficient { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LsbFragment {
    pub lsb_statistical_anomalies: BTreeMap<String, ChannelLsb>,
}

/// Acknowledgment that bit planes were produced.
///
/// The planes are present only when export was requested, and never reach
/// the serialized report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BitPlaneFragment {
    pub bit_planes: String,
    #[serde(skip)]
    pub planes: Vec<PixelGrid>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramFragment {
    pub color_histograms: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histograms: Option<BTreeMap<String, BTreeMap<u8, usize>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataFragment {
    pub metadata_anomalies: BTreeMap<String, String>,
}

/// Signed deviation from the uniform expectation, keyed by byte value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ByteFrequencyFragment {
    pub byte_frequency_deviations: BTreeMap<u8, f64>,
}

/// The contribution of one detector to an analysis record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fragment {
    Lsb(LsbFragment),
    BitPlanes(BitPlaneFragment),
    Histogram(HistogramFragment),
    Metadata(MetadataFragment),
    ByteFrequency(ByteFrequencyFragment),
}

pub(crate) fn channel_key(channel: u8) -> String {
    format!("channel_{channel}")
}
