//! # gdwg Prelude
//!
//! This module provides a convenient prelude for the commonly used types of the
//! gdwg library. Import it to get the graph, its edge views and the error types
//! in one line.
//!
//! ```rust
//! use gdwg::prelude::*;
//!
//! let graph: WeightedGraph<i32, i32> = WeightedGraph::from_edges([(1, 2, 3)]);
//! let first: Option<EdgeRef<'_, i32, i32>> = graph.iter().next();
//! assert!(first.is_some());
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all gdwg operations
pub use crate::Error;

/// The result type used throughout gdwg
pub use crate::Result;

// ================================================================================================
// Graph
// ================================================================================================

/// The directed weighted multigraph
pub use crate::graph::WeightedGraph;

/// Owned and borrowed edge values
pub use crate::graph::{Edge, EdgeRef};

/// Edge traversal
pub use crate::graph::{EdgeCursor, Edges};
