//! Statistical primitives shared by every detector.
//!
//! This module provides:
//!
//! - Generic and fixed-domain (byte) histograms
//! - A raw chi-square goodness-of-fit statistic
//! - Population mean / standard deviation over sample values
//!
//! # Example
//!
//! ```ignore
//! use stegscan::stats::{chi_square, ByteHistogram};
//!
//! let hist = ByteHistogram::from_bytes(b"aab");
//! assert_eq!(hist.count(b'a'), 2);
//!
//! // Perfect fit
//! assert_eq!(chi_square(&[2.0, 2.0], &[2.0, 2.0]), Some(0.0));
//! ```

pub mod chi_square;
pub mod histogram;
pub mod summary;

pub use self::chi_square::chi_square;
pub use self::histogram::{histogram, ByteHistogram};
pub use self::summary::SampleStats;
