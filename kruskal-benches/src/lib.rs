//! Benchmark support crate for the Kruskal workspace.
//!
//! Provides seeded synthetic graph generators and parameter types used by
//! the Criterion benchmarks of the MST builder.

pub mod error;
pub mod params;
pub mod source;
