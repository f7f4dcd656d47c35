//! Support library for the `kruskal` binary.
//!
//! Exposes the command pipeline and logging setup so integration tests can
//! drive them in-process.

pub mod cli;
pub mod logging;
