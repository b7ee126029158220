//! Borrowing iteration over the edges of a [`WeightedGraph`].

use std::iter::FusedIterator;

use crate::{graph::edge::EdgeRef, WeightedGraph};

/// An iterator over the edges of a graph in ascending `(from, to, weight)` order.
///
/// Created by [`WeightedGraph::iter`] or by iterating over `&WeightedGraph`. The
/// iterator is double-ended and knows its exact length. Both ends walk the edge
/// sequence independently and stop once they have met.
#[derive(Debug)]
pub struct Edges<'a, N, E> {
    graph: &'a WeightedGraph<N, E>,
    front: Option<EdgeRef<'a, N, E>>,
    back: Option<EdgeRef<'a, N, E>>,
    remaining: usize,
}

impl<'a, N: Ord, E: Ord> Edges<'a, N, E> {
    pub(crate) fn new(graph: &'a WeightedGraph<N, E>) -> Self {
        Edges {
            graph,
            front: graph.first_edge(),
            back: graph.last_edge(),
            remaining: graph.edge_count(),
        }
    }
}

impl<N, E> Clone for Edges<'_, N, E> {
    fn clone(&self) -> Self {
        Edges {
            graph: self.graph,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, N: Ord, E: Ord> Iterator for Edges<'a, N, E> {
    type Item = EdgeRef<'a, N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front?;
        self.front = self
            .graph
            .edge_after(current.from, current.to, current.weight);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N: Ord, E: Ord> DoubleEndedIterator for Edges<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.back?;
        self.back = self
            .graph
            .edge_before(current.from, current.to, current.weight);
        self.remaining -= 1;
        Some(current)
    }
}

impl<N: Ord, E: Ord> ExactSizeIterator for Edges<'_, N, E> {}

impl<N: Ord, E: Ord> FusedIterator for Edges<'_, N, E> {}

impl<'a, N: Ord, E: Ord> IntoIterator for &'a WeightedGraph<N, E> {
    type Item = EdgeRef<'a, N, E>;
    type IntoIter = Edges<'a, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
