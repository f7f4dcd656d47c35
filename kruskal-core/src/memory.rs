//! Pre-flight memory estimation for MST runs.
//!
//! Lets callers reject a graph whose vertex count would need more memory
//! than they are willing to spend, before `kruskal` allocates anything.

use std::mem::size_of;

use crate::error::{MstError, Result};
use crate::graph::{Edge, VertexId};

/// Safety multiplier (3/2) covering allocator slack and transient buffers.
const SAFETY_MULTIPLIER_NUMERATOR: u64 = 3;
const SAFETY_MULTIPLIER_DENOMINATOR: u64 = 2;

/// Parent id plus one rank byte per vertex.
const DISJOINT_SET_BYTES_PER_VERTEX: u64 = (size_of::<VertexId>() + size_of::<u8>()) as u64;

/// One sorted edge reference per input edge.
const ORDER_BYTES_PER_EDGE: u64 = size_of::<&Edge>() as u64;

/// One accepted `Edge<i64>` per forest edge.
const FOREST_BYTES_PER_EDGE: u64 = size_of::<Edge>() as u64;

/// Returns a conservative estimate of the peak bytes `kruskal` allocates
/// for a graph of `vertex_count` vertices and `edge_count` `i64`-weighted
/// edges, excluding the caller's own edge list.
///
/// Covers the union-find arrays, the sorted edge references and the
/// accepted forest edges, scaled by 1.5.
///
/// # Examples
///
/// ```
/// use kruskal_core::estimate_peak_bytes;
///
/// assert_eq!(estimate_peak_bytes(0, 0), 0);
/// assert!(estimate_peak_bytes(1_000, 4_000) > estimate_peak_bytes(1_000, 0));
/// ```
#[must_use]
pub fn estimate_peak_bytes(vertex_count: usize, edge_count: usize) -> u64 {
    let vertices = u64::try_from(vertex_count).unwrap_or(u64::MAX);
    let edges = u64::try_from(edge_count).unwrap_or(u64::MAX);
    let forest_edges = vertices.saturating_sub(1).min(edges);

    let subtotal = vertices
        .saturating_mul(DISJOINT_SET_BYTES_PER_VERTEX)
        .saturating_add(edges.saturating_mul(ORDER_BYTES_PER_EDGE))
        .saturating_add(forest_edges.saturating_mul(FOREST_BYTES_PER_EDGE));

    subtotal
        .saturating_mul(SAFETY_MULTIPLIER_NUMERATOR)
        .saturating_div(SAFETY_MULTIPLIER_DENOMINATOR)
}

/// Checks the estimate from [`estimate_peak_bytes`] against `limit_bytes`.
///
/// Returns the estimate when it fits.
///
/// # Errors
///
/// Returns [`MstError::MemoryLimitExceeded`] when the estimate is larger
/// than `limit_bytes`.
///
/// # Examples
///
/// ```
/// use kruskal_core::{MstError, ensure_within_memory_limit};
///
/// assert!(ensure_within_memory_limit(4, 5, 1 << 20).is_ok());
/// assert!(matches!(
///     ensure_within_memory_limit(usize::MAX, 0, 1 << 30),
///     Err(MstError::MemoryLimitExceeded { .. })
/// ));
/// ```
pub fn ensure_within_memory_limit(
    vertex_count: usize,
    edge_count: usize,
    limit_bytes: u64,
) -> Result<u64> {
    let estimated_bytes = estimate_peak_bytes(vertex_count, edge_count);
    if estimated_bytes > limit_bytes {
        return Err(MstError::MemoryLimitExceeded {
            estimated_bytes,
            limit_bytes,
        });
    }
    Ok(estimated_bytes)
}
