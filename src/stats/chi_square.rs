//! Raw chi-square goodness-of-fit statistic.
//!
//! No p-value or degrees-of-freedom lookup is performed; callers interpret
//! the statistic themselves.

/// Computes Σ (oᵢ − eᵢ)² / eᵢ.
///
/// Returns `None` when the slices differ in length or any expected value is
/// exactly zero.
pub fn chi_square(observed: &[f64], expected: &[f64]) -> Option<f64> {
    if observed.len() != expected.len() || expected.iter().any(|&e| e == 0.0) {
        return None;
    }
    Some(
        observed
            .iter()
            .zip(expected)
            .map(|(&o, &e)| {
                let d = o - e;
                d * d / e
            })
            .sum(),
    )
}
