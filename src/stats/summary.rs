//! Population statistics over sample values.

/// Mean and population standard deviation of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl SampleStats {
    /// Computes the summary in two passes over `samples`.
    ///
    /// An empty slice yields a zero mean and zero deviation.
    pub fn from_samples(samples: &[u8]) -> Self {
        if samples.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                std_dev: 0.0,
            };
        }

        let len = samples.len() as f64;
        let sum: f64 = samples.iter().map(|&s| s as f64).sum();
        let mean = sum / len;

        let variance: f64 = samples
            .iter()
            .map(|&s| {
                let diff = s as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / len;

        Self {
            count: samples.len(),
            mean,
            std_dev: variance.sqrt(),
        }
    }
}
