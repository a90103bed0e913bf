//! Detection method registry.
//!
//! Two disjoint registries exist, one per input domain. Each method is a pure
//! function of the decoded input and its feature set, identified by a stable
//! string name used in configuration and in the report.
//!
//! Registry order is declaration order and is the order in which the
//! orchestrator runs enabled methods:
//!
//! - image: `lsb_analysis`, `visual_lsb_analysis`, `histogram_analysis`
//! - file: `metadata_analysis`, `byte_frequency_analysis`

pub mod file_methods;
pub mod fragment;
pub mod image_methods;

pub use self::fragment::{
    BitPlaneFragment, ByteFrequencyFragment, ChannelLsb, Fragment, HistogramFragment,
    LsbFragment, MetadataFragment, INSUFFICIENT_DATA,
};

use crate::features::FeatureSet;
use crate::input::{FileType, PixelGrid};
use std::fmt;

/// Knobs that change what a detector puts in its fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectorOptions {
    /// Embed full per-channel histograms in `histogram_analysis`.
    pub include_histograms: bool,
    /// Keep the planes built by `visual_lsb_analysis` for export.
    pub keep_bit_planes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageMethod {
    LsbAnalysis,
    VisualLsbAnalysis,
    HistogramAnalysis,
}

impl ImageMethod {
    pub const ALL: [ImageMethod; 3] = [
        ImageMethod::LsbAnalysis,
        ImageMethod::VisualLsbAnalysis,
        ImageMethod::HistogramAnalysis,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ImageMethod::LsbAnalysis => "lsb_analysis",
            ImageMethod::VisualLsbAnalysis => "visual_lsb_analysis",
            ImageMethod::HistogramAnalysis => "histogram_analysis",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    pub fn run(self, image: &PixelGrid, features: &FeatureSet, options: DetectorOptions) -> Fragment {
        match self {
            ImageMethod::LsbAnalysis => Fragment::Lsb(image_methods::lsb_analysis(image, features)),
            ImageMethod::VisualLsbAnalysis => {
                Fragment::BitPlanes(image_methods::visual_lsb_analysis(
                    image,
                    features,
                    options.keep_bit_planes,
                ))
            }
            ImageMethod::HistogramAnalysis => Fragment::Histogram(image_methods::histogram_analysis(
                image,
                features,
                options.include_histograms,
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileMethod {
    MetadataAnalysis,
    ByteFrequencyAnalysis,
}

impl FileMethod {
    pub const ALL: [FileMethod; 2] = [FileMethod::MetadataAnalysis, FileMethod::ByteFrequencyAnalysis];

    pub fn name(self) -> &'static str {
        match self {
            FileMethod::MetadataAnalysis => "metadata_analysis",
            FileMethod::ByteFrequencyAnalysis => "byte_frequency_analysis",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    pub fn run(self, content: &[u8], features: &FeatureSet) -> Fragment {
        match self {
            FileMethod::MetadataAnalysis => Fragment::Metadata(file_methods::metadata_analysis(content, features)),
            FileMethod::ByteFrequencyAnalysis => {
                Fragment::ByteFrequency(file_methods::byte_frequency_analysis(content, features))
            }
        }
    }
}

/// Any registered detection method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DetectionMethod {
    Image(ImageMethod),
    File(FileMethod),
}

impl DetectionMethod {
    pub const ALL: [DetectionMethod; 5] = [
        DetectionMethod::Image(ImageMethod::LsbAnalysis),
        DetectionMethod::Image(ImageMethod::VisualLsbAnalysis),
        DetectionMethod::Image(ImageMethod::HistogramAnalysis),
        DetectionMethod::File(FileMethod::MetadataAnalysis),
        DetectionMethod::File(FileMethod::ByteFrequencyAnalysis),
    ];

    pub fn name(self) -> &'static str {
        match self {
            DetectionMethod::Image(m) => m.name(),
            DetectionMethod::File(m) => m.name(),
        }
    }

    pub fn domain(self) -> FileType {
        match self {
            DetectionMethod::Image(_) => FileType::Image,
            DetectionMethod::File(_) => FileType::File,
        }
    }

    /// Look up a method by name; unknown names yield `None` and are not an
    /// error anywhere in the crate.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Methods of one domain, in registry order.
    pub fn registry(domain: FileType) -> impl Iterator<Item = DetectionMethod> {
        Self::ALL.into_iter().filter(move |m| m.domain() == domain)
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
