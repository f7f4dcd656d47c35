//! Union-find (disjoint set union) over vertex indices.
//!
//! Kruskal's edge-selection loop uses this structure to decide whether an
//! edge joins two different components or would close a cycle. Parents and
//! ranks live in index-addressed arrays, so every vertex id is simply an
//! offset into them.

use crate::error::{MstError, Result};
use crate::graph::VertexId;

/// Partition of the vertices `0..len` into disjoint components.
///
/// `find` compresses paths iteratively and `union` attaches the root of lower
/// rank beneath the root of higher rank. A rank is an upper bound on the
/// height of the tree below a root and is never decremented.
///
/// ```
/// use kruskal_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// set.union(0, 1);
/// set.union(2, 3);
/// assert!(set.same_set(0, 1));
/// assert!(!set.same_set(1, 2));
/// assert_eq!(set.component_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton components, each vertex being its own root
    /// with rank zero.
    ///
    /// # Panics
    ///
    /// Panics when the arrays for `len` vertices cannot be allocated; see
    /// [`DisjointSet::try_new`] for the fallible form.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Fallible counterpart of [`DisjointSet::new`].
    ///
    /// # Errors
    ///
    /// Returns [`MstError::AllocationFailed`] when the parent or rank array
    /// for `len` vertices cannot be reserved.
    ///
    /// ```
    /// use kruskal_core::{DisjointSet, MstError};
    ///
    /// assert_eq!(DisjointSet::try_new(3)?.component_count(), 3);
    /// assert!(matches!(
    ///     DisjointSet::try_new(usize::MAX),
    ///     Err(MstError::AllocationFailed { .. })
    /// ));
    /// # Ok::<(), MstError>(())
    /// ```
    pub fn try_new(len: usize) -> Result<Self> {
        let failed = |_| MstError::AllocationFailed { vertex_count: len };
        let mut parent = Vec::new();
        parent.try_reserve_exact(len).map_err(failed)?;
        let mut rank = Vec::new();
        rank.try_reserve_exact(len).map_err(failed)?;

        parent.extend(0..len);
        rank.resize(len, 0);
        Ok(Self {
            parent,
            rank,
            components: len,
        })
    }

    /// Returns the number of vertices tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the set tracks no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns `true` when `vertex` is a valid index.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.parent.len()
    }

    /// Returns the current number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    #[cfg(test)]
    fn rank(&self, vertex: VertexId) -> u8 {
        self.rank[vertex]
    }

    /// Returns the representative of the component containing `vertex`.
    ///
    /// Every vertex visited on the way to the root is re-pointed directly at
    /// the root. Component membership is unchanged.
    ///
    /// # Panics
    ///
    /// Panics when `vertex >= self.len()`. Callers validate vertex ids before
    /// reaching the union-find, so an out-of-range id is a programming error.
    pub fn find(&mut self, mut vertex: VertexId) -> VertexId {
        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[vertex] != vertex {
            let parent = self.parent[vertex];
            self.parent[vertex] = root;
            vertex = parent;
        }

        root
    }

    /// Checked variant of [`DisjointSet::find`] returning `None` for ids
    /// outside the set.
    pub fn try_find(&mut self, vertex: VertexId) -> Option<VertexId> {
        self.contains(vertex).then(|| self.find(vertex))
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Panics
    ///
    /// Panics when either id is `>= self.len()`.
    pub fn same_set(&mut self, left: VertexId, right: VertexId) -> bool {
        self.find(left) == self.find(right)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` without changing anything when both already share a
    /// component. On a rank tie the root of `right` is attached beneath the
    /// root of `left`, whose rank then grows by one.
    ///
    /// # Panics
    ///
    /// Panics when either id is `>= self.len()`.
    pub fn union(&mut self, left: VertexId, right: VertexId) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }
}
