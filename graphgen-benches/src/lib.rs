//! Benchmark support crate for graphgen.
//!
//! Provides parameter types and seeded inputs shared by the Criterion
//! benchmarks for the generators and the instance codec.

pub mod inputs;
pub mod params;
