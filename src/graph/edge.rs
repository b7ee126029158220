//! Edge value types for weighted graphs.
//!
//! This module provides the two shapes in which an edge leaves the graph:
//!
//! - [`Edge`] - an owned `(from, to, weight)` triple, used to build graphs in bulk
//! - [`EdgeRef`] - a read-only view into an edge stored inside a graph
//!
//! Both order lexicographically by source, then destination, then weight, which
//! is the canonical edge order of [`WeightedGraph`](crate::WeightedGraph).

use std::fmt;

/// An owned directed, weighted edge.
///
/// `Edge` is the value form of an edge. It is what bulk construction consumes
/// and what [`EdgeRef::to_owned_edge`] produces. The derived ordering compares
/// `from`, then `to`, then `weight`, matching the graph's iteration order.
///
/// # Examples
///
/// ```rust
/// use gdwg::{Edge, WeightedGraph};
///
/// let edges = vec![Edge::new("A", "B", 30), Edge::new("B", "C", 15)];
/// let graph: WeightedGraph<&str, i32> = WeightedGraph::from_edges(edges);
///
/// assert_eq!(graph.nodes(), vec!["A", "B", "C"]);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N, E> {
    /// Source node value
    pub from: N,
    /// Destination node value
    pub to: N,
    /// Edge weight
    pub weight: E,
}

impl<N, E> Edge<N, E> {
    /// Creates a new edge from its three components.
    #[must_use]
    pub const fn new(from: N, to: N, weight: E) -> Self {
        Edge { from, to, weight }
    }

    /// Splits the edge into a `(from, to, weight)` tuple.
    #[must_use]
    pub fn into_parts(self) -> (N, N, E) {
        (self.from, self.to, self.weight)
    }
}

impl<N, E> From<(N, N, E)> for Edge<N, E> {
    fn from((from, to, weight): (N, N, E)) -> Self {
        Edge { from, to, weight }
    }
}

impl<N: fmt::Display, E: fmt::Display> fmt::Display for Edge<N, E> {
    /// Formats the edge as `from -> to | weight`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} | {}", self.from, self.to, self.weight)
    }
}

/// A read-only view of an edge stored in a graph.
///
/// `EdgeRef` borrows the node values and the weight straight out of the graph's
/// storage; no value is copied. It is produced by
/// [`WeightedGraph::iter`](crate::WeightedGraph::iter) and
/// [`WeightedGraph::edge_at`](crate::WeightedGraph::edge_at).
///
/// # Examples
///
/// ```rust
/// use gdwg::WeightedGraph;
///
/// let graph: WeightedGraph<i32, &str> = WeightedGraph::from_edges(vec![(1, 15, "abc")]);
/// let edge = graph.iter().next().unwrap();
///
/// let (from, to, weight) = edge.into_tuple();
/// assert_eq!((*from, *to, *weight), (1, 15, "abc"));
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeRef<'a, N, E> {
    /// Source node value
    pub from: &'a N,
    /// Destination node value
    pub to: &'a N,
    /// Edge weight
    pub weight: &'a E,
}

impl<N, E> Clone for EdgeRef<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for EdgeRef<'_, N, E> {}

impl<'a, N, E> EdgeRef<'a, N, E> {
    /// Returns the borrowed `(from, to, weight)` components.
    #[must_use]
    pub fn into_tuple(self) -> (&'a N, &'a N, &'a E) {
        (self.from, self.to, self.weight)
    }

    /// Clones the viewed edge into an owned [`Edge`].
    #[must_use]
    pub fn to_owned_edge(&self) -> Edge<N, E>
    where
        N: Clone,
        E: Clone,
    {
        Edge::new(self.from.clone(), self.to.clone(), self.weight.clone())
    }
}

impl<N: fmt::Display, E: fmt::Display> fmt::Display for EdgeRef<'_, N, E> {
    /// Formats the edge as `from -> to | weight`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} | {}", self.from, self.to, self.weight)
    }
}
