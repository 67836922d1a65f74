//! Benchmark support crate for the Borůvka engine.
//!
//! Provides seeded synthetic graphs and parameter types for the Criterion
//! benchmarks under `benches/`.

pub mod error;
pub mod params;
pub mod source;
