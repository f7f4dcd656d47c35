//! Kruskal core library.
//!
//! Computes minimum spanning trees (and, for disconnected input, minimum
//! spanning forests) of weighted undirected graphs with Kruskal's algorithm.
//! Cycle detection uses an arena-backed [`DisjointSet`] with path compression
//! and union by rank.
//!
//! # Example
//!
//! ```
//! use kruskal_core::{Edge, compute_mst};
//!
//! let edges = [
//!     Edge::new(0, 1, 10),
//!     Edge::new(0, 2, 6),
//!     Edge::new(0, 3, 5),
//!     Edge::new(1, 3, 15),
//!     Edge::new(2, 3, 4),
//! ];
//! let mst = compute_mst(4, &edges)?;
//! assert_eq!(mst.iter().map(|edge| edge.weight()).sum::<i64>(), 19);
//! # Ok::<(), kruskal_core::MstError>(())
//! ```
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled each [`kruskal`] run emits:
//!
//! - `kruskal_runs_total` (counter)
//! - `kruskal_edges_accepted_total` (counter)
//! - `kruskal_edges_rejected_total` (counter)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod memory;
mod mst;
#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{MstError, MstErrorCode, Result},
    graph::{Edge, Graph, VertexId},
    memory::{ensure_within_memory_limit, estimate_peak_bytes},
    mst::{MinimumSpanningForest, compute_mst, kruskal},
};

#[cfg(feature = "parallel")]
pub use crate::mst::kruskal_many;
