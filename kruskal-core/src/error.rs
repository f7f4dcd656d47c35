//! Error types for the Kruskal core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The caller requested an MST for a graph with no vertices.
    #[error("cannot compute an MST for a graph with no vertices")]
    EmptyGraph,
    /// An edge referenced a vertex outside `[0, vertex_count)`.
    #[error("edge {edge_index} references vertex {vertex}, but vertex_count is {vertex_count}")]
    VertexOutOfRange {
        /// Position of the offending edge in the caller's edge sequence.
        edge_index: usize,
        /// The out-of-range vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// A spanning tree was required but the result is a forest.
    #[error("graph is not connected: {component_count} components across {vertex_count} vertices")]
    NotConnected {
        /// Number of trees in the computed forest.
        component_count: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// The union-find arrays for `vertex_count` vertices could not be
    /// allocated.
    #[error("cannot allocate union-find storage for {vertex_count} vertices")]
    AllocationFailed {
        /// The number of vertices requested.
        vertex_count: usize,
    },
    /// The estimated peak memory of a run exceeds the caller's limit.
    #[error("estimated peak memory of {estimated_bytes} bytes exceeds the limit of {limit_bytes} bytes")]
    MemoryLimitExceeded {
        /// Estimated peak bytes for the run.
        estimated_bytes: u64,
        /// The configured limit in bytes.
        limit_bytes: u64,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller requested an MST for a graph with no vertices.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// An edge referenced a vertex outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "MST_VERTEX_OUT_OF_RANGE",
        /// A spanning tree was required but the result is a forest.
        NotConnected => NotConnected { .. } => "MST_NOT_CONNECTED",
        /// Union-find storage could not be allocated.
        AllocationFailed => AllocationFailed { .. } => "MST_ALLOCATION_FAILED",
        /// The estimated peak memory exceeds the configured limit.
        MemoryLimitExceeded => MemoryLimitExceeded { .. } => "MST_MEMORY_LIMIT_EXCEEDED",
    }
}

impl MstError {
    /// Returns `true` for errors caused by invalid caller input, detected
    /// before any edge is processed.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::EmptyGraph | Self::VertexOutOfRange { .. })
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
