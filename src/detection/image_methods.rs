//! Image-domain detectors.

use super::fragment::{
    channel_key, BitPlaneFragment, ChannelLsb, HistogramFragment, LsbFragment,
    BIT_PLANES_GENERATED, HISTOGRAMS_COMPUTED, INSUFFICIENT_DATA,
};
use crate::features::FeatureSet;
use crate::input::PixelGrid;
use crate::stats::{chi_square, histogram, ByteHistogram};
use std::collections::BTreeMap;
use tracing::debug;

/// Number of bit planes in an 8-bit sample.
pub const BIT_DEPTH: u8 = 8;

/// Chi-square of each channel's LSB distribution against a 50/50 split.
pub fn lsb_analysis(image: &PixelGrid, _features: &FeatureSet) -> LsbFragment {
    debug!("Performing LSB statistical analysis on {} channels", image.channels());

    let mut anomalies = BTreeMap::new();
    for channel in 0..image.channels() {
        let bits = histogram(image.channel_samples(channel).map(|s| s & 1));
        let zeros = bits.get(&0).copied().unwrap_or(0);
        let ones = bits.get(&1).copied().unwrap_or(0);
        let total = (zeros + ones) as f64;

        let observed = [zeros as f64, ones as f64];
        let expected = [total * 0.5, total * 0.5];
        let result = match chi_square(&observed, &expected) {
            Some(chi2_value) => ChannelLsb::Statistic { chi2_value },
            None => ChannelLsb::Insufficient {
                error: INSUFFICIENT_DATA.to_string(),
            },
        };
        anomalies.insert(channel_key(channel), result);
    }

    LsbFragment {
        lsb_statistical_anomalies: anomalies,
    }
}

/// One same-shape grid per bit position, LSB first, scaled to 0 or 255.
pub fn bit_planes(image: &PixelGrid) -> Vec<PixelGrid> {
    (0..BIT_DEPTH)
        .map(|bit| image.map_samples(|s| ((s >> bit) & 1) * 255))
        .collect()
}

/// The planes are only materialised when `keep` is set; otherwise the
/// fragment carries the acknowledgment alone.
pub fn visual_lsb_analysis(image: &PixelGrid, _features: &FeatureSet, keep: bool) -> BitPlaneFragment {
    let planes = if keep {
        debug!("Generating bit planes for visual LSB analysis");
        bit_planes(image)
    } else {
        Vec::new()
    };
    BitPlaneFragment {
        bit_planes: BIT_PLANES_GENERATED.to_string(),
        planes,
    }
}

/// Per-channel value histograms over the 0..=255 domain.
pub fn channel_histograms(image: &PixelGrid) -> BTreeMap<String, BTreeMap<u8, usize>> {
    (0..image.channels())
        .map(|channel| {
            let hist: ByteHistogram = image.channel_samples(channel).collect();
            (channel_key(channel), hist.to_map())
        })
        .collect()
}

/// Histograms are always computed; they are only embedded in the fragment
/// when `include` is set, keeping the default report small.
pub fn histogram_analysis(
    image: &PixelGrid,
    _features: &FeatureSet,
    include: bool,
) -> HistogramFragment {
    debug!("Performing histogram analysis on {} channels", image.channels());
    let histograms = channel_histograms(image);
    HistogramFragment {
        color_histograms: HISTOGRAMS_COMPUTED.to_string(),
        histograms: include.then_some(histograms),
    }
}
