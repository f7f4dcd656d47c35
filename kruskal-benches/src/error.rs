//! Benchmark setup error type.
//!
//! Lets setup functions propagate generator and MST failures with `?`.

use kruskal_core::MstError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// MST computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
