//! End-to-end pipeline tests.
//!
//! Each test writes its own input, runs it through resolution and analysis,
//! and inspects the serialized record or the written report.

mod end_to_end;
mod input;
mod report;
