//! Runs the enabled detectors over one decoded input.
//!
//! Methods run sequentially in registry order. A name that is enabled in the
//! configuration but unknown to the input's registry is skipped without
//! error, which lets one configuration serve both domains and older builds.

use crate::config::SuiteConfig;
use crate::detection::{DetectionMethod, Fragment};
use crate::features::{extract_features, FeatureSet};
use crate::input::{FileType, RawInput};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeSet;
use tracing::{debug, info, info_span};

/// Fragments keyed by method name, in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionResults(Vec<(DetectionMethod, Fragment)>);

impl DetectionResults {
    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.0
            .iter()
            .find(|(method, _)| method.name() == name)
            .map(|(_, fragment)| fragment)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DetectionMethod, &Fragment)> {
        self.0.iter().map(|(method, fragment)| (*method, fragment))
    }

    pub fn methods(&self) -> impl Iterator<Item = DetectionMethod> + '_ {
        self.0.iter().map(|(method, _)| *method)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, method: DetectionMethod, fragment: Fragment) {
        self.0.push((method, fragment));
    }
}

impl Serialize for DetectionResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (method, fragment) in &self.0 {
            map.serialize_entry(method.name(), fragment)?;
        }
        map.end()
    }
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AnalysisRecord {
    pub file_type: FileType,
    pub features: FeatureSet,
    pub detection_results: DetectionResults,
}

/// Analyze a decoded input with the methods enabled in `config`.
pub fn analyze(input: &RawInput, config: &SuiteConfig) -> AnalysisRecord {
    let file_type = input.file_type();
    let enabled = match file_type {
        FileType::Image => config.enabled_image_methods(),
        FileType::File => config.enabled_file_methods(),
    };
    let span = info_span!("analyze", %file_type);
    let _guard = span.enter();

    log_skipped(file_type, &enabled);

    let features = extract_features(input);
    let options = config.detector_options();
    let mut results = DetectionResults::default();

    for method in DetectionMethod::registry(file_type) {
        if !enabled.contains(method.name()) {
            continue;
        }
        info!("Applying {} analysis method: {}", file_type, method);
        let fragment = match (method, input) {
            (DetectionMethod::Image(m), RawInput::Image(grid)) => m.run(grid, &features, options),
            (DetectionMethod::File(m), RawInput::Bytes(content)) => m.run(content, &features),
            // registry() only yields methods of the input's own domain
            _ => continue,
        };
        results.push(method, fragment);
    }

    AnalysisRecord {
        file_type,
        features,
        detection_results: results,
    }
}

fn log_skipped(file_type: FileType, enabled: &BTreeSet<String>) {
    for name in enabled {
        let known = DetectionMethod::from_name(name).is_some_and(|m| m.domain() == file_type);
        if !known {
            debug!(method = %name, "No {} method with this name, skipping", file_type);
        }
    }
}
