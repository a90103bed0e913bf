//! File-domain detectors.

use super::fragment::{ByteFrequencyFragment, MetadataFragment, SIZE_NOTE};
use crate::features::{FeatureSet, FILE_SIZE};
use crate::stats::ByteHistogram;
use std::collections::BTreeMap;
use tracing::debug;

/// Relative band around the uniform expectation that is not reported.
pub const DEVIATION_BAND: f64 = 0.05;

/// Surfaces the file size for manual comparison. No scoring happens here.
pub fn metadata_analysis(_content: &[u8], features: &FeatureSet) -> MetadataFragment {
    debug!("Performing metadata analysis on file");
    let mut anomalies = BTreeMap::new();
    if let Some(size) = features.get(FILE_SIZE) {
        anomalies.insert(
            FILE_SIZE.to_string(),
            format!("Size: {size} bytes ({SIZE_NOTE})"),
        );
    }
    MetadataFragment {
        metadata_anomalies: anomalies,
    }
}

/// Deviation of every byte value's count from `len / 256`, kept only where
/// it leaves the ±5% band.
///
/// All 256 values are checked, so a value that never occurs is reported
/// with a negative deviation once the content is long enough.
pub fn byte_frequency_analysis(content: &[u8], _features: &FeatureSet) -> ByteFrequencyFragment {
    debug!("Performing byte frequency analysis on {} bytes", content.len());
    let hist = ByteHistogram::from_bytes(content);
    let expected = hist.total() as f64 / 256.0;
    let band = DEVIATION_BAND * expected;

    let deviations = hist
        .iter()
        .filter_map(|(value, count)| {
            let deviation = count as f64 - expected;
            (deviation.abs() > band).then_some((value, deviation))
        })
        .collect();

    ByteFrequencyFragment {
        byte_frequency_deviations: deviations,
    }
}
