//! Frequency counting over arbitrary values and over raw bytes.

use std::collections::BTreeMap;

/// Counts occurrences of each distinct value.
///
/// Only values that occur are present in the result, and the counts always
/// sum to the number of input elements. Ordering of the input is irrelevant.
pub fn histogram<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Fixed 256-bucket histogram over byte values.
#[derive(Debug, Clone)]
pub struct ByteHistogram {
    counts: [usize; 256],
    total: usize,
}

impl ByteHistogram {
    /// Creates a new empty histogram.
    #[inline]
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Creates a histogram from a byte slice.
    #[inline]
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::from_iter(data.iter().copied())
    }

    /// Adds a byte to the histogram.
    #[inline]
    pub fn add(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
        self.total += 1;
    }

    /// Occurrences of `byte`.
    #[inline]
    pub fn count(&self, byte: u8) -> usize {
        self.counts[byte as usize]
    }

    /// Returns the total number of bytes in the histogram.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns true if the histogram is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All 256 buckets in byte order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(value, &count)| (value as u8, count))
    }

    /// Buckets with at least one occurrence, in byte order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.iter().filter(|&(_, count)| count > 0)
    }

    /// Sparse map form, matching what [`histogram`] returns for bytes.
    pub fn to_map(&self) -> BTreeMap<u8, usize> {
        self.iter_nonzero().collect()
    }
}

impl Default for ByteHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<u8> for ByteHistogram {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut hist = Self::new();
        for byte in iter {
            hist.add(byte);
        }
        hist
    }
}
