//! Benchmark support crate for arbora.
//!
//! Provides synthetic graph generators and parameter types used by the
//! Criterion benchmarks for spanning forest construction.

pub mod params;
pub mod source;
