//! Directed weighted multigraph with value-identified nodes.
//!
//! This module provides [`WeightedGraph`], a graph container in which nodes are
//! identified by their value rather than by an index, and edges are identified by
//! their complete `(from, to, weight)` triple. Parallel edges with distinct
//! weights and self-loops are both allowed.
//!
//! # Architecture
//!
//! - **Core Type**: [`WeightedGraph`] owns the node set and the edge set and
//!   exposes all mutation and query operations
//! - **Edge Values**: [`Edge`] is an owned triple used for bulk construction,
//!   [`EdgeRef`] is a borrowed view of a stored edge
//! - **Traversal**: [`Edges`] iterates the edge sequence in both directions,
//!   [`EdgeCursor`] marks a position in it that outlives borrows and mutation
//!
//! # Ordering
//!
//! Nodes are ordered by `N`'s [`Ord`] implementation. Edges are ordered by
//! source, then destination, then weight. All accessors and traversals honour
//! these orders, so two graphs with the same contents always produce identical
//! sequences and identical text renderings.
//!
//! # Storage
//!
//! Each node value is allocated once behind an [`Arc`](std::sync::Arc) shared by
//! the node set and every edge touching it. Edges are grouped by source node and
//! then by destination node, with the weights of each pair held in an ordered
//! set. Empty groups are removed as soon as their last edge goes away.
//!
//! # Usage Examples
//!
//! ## Building a Graph
//!
//! ```rust
//! use gdwg::WeightedGraph;
//!
//! let mut graph: WeightedGraph<&str, i32> = WeightedGraph::from_nodes(["a", "b", "c", "d"]);
//!
//! graph.insert_edge(&"a", &"b", 1)?;
//! graph.insert_edge(&"a", &"a", 3)?;
//! graph.insert_edge(&"c", &"d", 2)?;
//!
//! assert_eq!(graph.to_string(), "a (\n  a | 3\n  b | 1\n)\nb (\n)\nc (\n  d | 2\n)\nd (\n)\n");
//! # Ok::<(), gdwg::Error>(())
//! ```
//!
//! ## Rewiring Nodes
//!
//! ```rust
//! use gdwg::WeightedGraph;
//!
//! let mut graph: WeightedGraph<&str, i32> =
//!     WeightedGraph::from_edges([("A", "B", 1), ("A", "C", 2), ("C", "B", 2)]);
//!
//! graph.merge_replace_node(&"A", &"C")?;
//!
//! // A -> B (1) and A -> C (2) moved onto C; C -> B (2) was already there
//! assert_eq!(graph.nodes(), vec!["B", "C"]);
//! assert_eq!(graph.weights(&"C", &"B")?, vec![1, 2]);
//! assert_eq!(graph.weights(&"C", &"C")?, vec![2]);
//! # Ok::<(), gdwg::Error>(())
//! ```

mod cursor;
mod edge;
mod iter;
mod weighted;

pub use cursor::EdgeCursor;
pub use edge::{Edge, EdgeRef};
pub use iter::Edges;
pub use weighted::WeightedGraph;
