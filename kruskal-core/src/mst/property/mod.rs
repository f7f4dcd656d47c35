//! Property-based tests for the Kruskal MST builder.
//!
//! Verifies Kruskal against an independent Prim's-algorithm oracle,
//! validates structural invariants (acyclicity, spanning, edge count), and
//! checks that input edge order never changes the optimum across graph
//! topologies with varied weight distributions.

mod equivalence;
mod helpers;
mod ordering;
mod strategies;
