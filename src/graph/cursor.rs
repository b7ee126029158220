//! Positional access to the edge sequence of a [`WeightedGraph`].
//!
//! An [`EdgeCursor`] marks a position in the canonical edge order. Cursors hold
//! the `(from, to, weight)` key of the edge they point at, not a reference into
//! the graph, so they never borrow it. A cursor stays meaningful across any
//! mutation that does not erase its own edge. Once its edge is gone the cursor
//! is stale: it no longer dereferences, but stepping from it still lands on the
//! live neighbours of the position it used to occupy.
//!
//! # Examples
//!
//! ```rust
//! use gdwg::WeightedGraph;
//!
//! let mut graph: WeightedGraph<i32, i32> =
//!     WeightedGraph::from_edges([(1, 2, 1), (1, 3, 2), (4, 1, 3)]);
//!
//! // Erase every edge leaving node 1, front to back
//! let mut cursor = graph.begin();
//! while let Some(edge) = graph.edge_at(&cursor) {
//!     if *edge.from != 1 {
//!         break;
//!     }
//!     cursor = graph.erase_edge_at(&cursor)?;
//! }
//!
//! assert_eq!(graph.edge_count(), 1);
//! assert_eq!(graph.edge_at(&cursor).map(|e| *e.weight), Some(3));
//! # Ok::<(), gdwg::Error>(())
//! ```

use std::cmp::Ordering;

use crate::{
    graph::edge::{Edge, EdgeRef},
    Error, Result, WeightedGraph,
};

/// A position in the ordered edge sequence of a [`WeightedGraph`].
///
/// A cursor either points at an edge key or is the end cursor, which sits one
/// past the last edge. Cursors order by position: edge keys compare as
/// `(from, to, weight)` and the end cursor compares greater than every key.
///
/// Cursors are plain values. Two cursors are equal exactly when they denote the
/// same position; a stale cursor still equals a fresh cursor to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeCursor<N, E> {
    position: Option<Edge<N, E>>,
}

impl<N, E> EdgeCursor<N, E> {
    /// Returns the end cursor.
    #[must_use]
    pub const fn end() -> Self {
        EdgeCursor { position: None }
    }

    /// Returns `true` if this is the end cursor.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// Returns the edge key this cursor points at, or `None` for the end cursor.
    ///
    /// The key is returned even when its edge has since been erased; use
    /// [`WeightedGraph::edge_at`] to check that the edge is still present.
    #[must_use]
    pub fn key(&self) -> Option<&Edge<N, E>> {
        self.position.as_ref()
    }
}

impl<N: Clone, E: Clone> EdgeCursor<N, E> {
    fn at(edge: Option<EdgeRef<'_, N, E>>) -> Self {
        EdgeCursor {
            position: edge.map(|edge| edge.to_owned_edge()),
        }
    }
}

impl<N: Ord, E: Ord> PartialOrd for EdgeCursor<N, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, E: Ord> Ord for EdgeCursor<N, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.position, &other.position) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(lhs), Some(rhs)) => lhs.cmp(rhs),
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone> WeightedGraph<N, E> {
    /// Returns a cursor to the first edge, or the end cursor if there are none.
    #[must_use]
    pub fn begin(&self) -> EdgeCursor<N, E> {
        EdgeCursor::at(self.first_edge())
    }

    /// Returns the end cursor.
    ///
    /// Equivalent to [`EdgeCursor::end`], offered on the graph for symmetry with
    /// [`begin`](Self::begin).
    #[must_use]
    pub fn end(&self) -> EdgeCursor<N, E> {
        EdgeCursor::end()
    }

    /// Finds the edge `src -> dst` with the given weight.
    ///
    /// # Returns
    ///
    /// A cursor to the edge if it exists, otherwise the end cursor. Missing nodes
    /// are not an error here; they simply produce the end cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::WeightedGraph;
    ///
    /// let graph: WeightedGraph<&str, i32> = WeightedGraph::from_edges([("a", "b", 1)]);
    ///
    /// assert!(!graph.find(&"a", &"b", &1).is_end());
    /// assert_eq!(graph.find(&"a", &"b", &2), graph.end());
    /// assert_eq!(graph.find(&"x", &"b", &1), graph.end());
    /// ```
    #[must_use]
    pub fn find(&self, src: &N, dst: &N, weight: &E) -> EdgeCursor<N, E> {
        EdgeCursor::at(self.lookup(src, dst, weight))
    }

    /// Returns the edge a cursor points at.
    ///
    /// Returns `None` for the end cursor and for a cursor whose edge has been
    /// erased.
    #[must_use]
    pub fn edge_at(&self, cursor: &EdgeCursor<N, E>) -> Option<EdgeRef<'_, N, E>> {
        let key = cursor.key()?;
        self.lookup(&key.from, &key.to, &key.weight)
    }

    /// Returns a cursor to the edge following `cursor`.
    ///
    /// Advancing past the last edge yields the end cursor, and advancing the end
    /// cursor yields the end cursor again.
    #[must_use]
    pub fn next_edge(&self, cursor: &EdgeCursor<N, E>) -> EdgeCursor<N, E> {
        match cursor.key() {
            Some(key) => EdgeCursor::at(self.edge_after(&key.from, &key.to, &key.weight)),
            None => EdgeCursor::end(),
        }
    }

    /// Returns a cursor to the edge preceding `cursor`.
    ///
    /// Stepping back from the end cursor yields the last edge. Stepping back
    /// from the first edge yields `None`, since no position precedes it.
    #[must_use]
    pub fn prev_edge(&self, cursor: &EdgeCursor<N, E>) -> Option<EdgeCursor<N, E>> {
        let edge = match cursor.key() {
            Some(key) => self.edge_before(&key.from, &key.to, &key.weight),
            None => self.last_edge(),
        }?;
        Some(EdgeCursor::at(Some(edge)))
    }

    /// Erases the edge a cursor points at.
    ///
    /// # Returns
    ///
    /// A cursor to the edge that followed the erased one, or the end cursor if
    /// the erased edge was the last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CursorNotDereferenceable`] if the cursor is the end cursor
    /// or its edge no longer exists. The graph is left unchanged.
    pub fn erase_edge_at(&mut self, cursor: &EdgeCursor<N, E>) -> Result<EdgeCursor<N, E>> {
        let Some(key) = cursor.key() else {
            tracing::debug!("erase_edge_at rejected: end cursor");
            return Err(Error::CursorNotDereferenceable);
        };
        if !self.unlink(&key.from, &key.to, &key.weight) {
            tracing::debug!("erase_edge_at rejected: stale cursor");
            return Err(Error::CursorNotDereferenceable);
        }

        tracing::trace!("erase_edge_at");
        Ok(EdgeCursor::at(self.edge_after(&key.from, &key.to, &key.weight)))
    }

    /// Erases every edge in the half-open range `[first, last)`.
    ///
    /// The range is defined by position, so either bound may be stale. An empty
    /// range (`first == last`) erases nothing.
    ///
    /// # Returns
    ///
    /// A cursor equal to `last`, which is the position following the erased run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursorRange`] if `first` is positioned after
    /// `last`. The graph is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::WeightedGraph;
    ///
    /// let mut graph: WeightedGraph<i32, i32> =
    ///     WeightedGraph::from_edges([(1, 2, 1), (1, 2, 2), (2, 3, 1), (3, 1, 1)]);
    ///
    /// let first = graph.find(&1, &2, &2);
    /// let last = graph.find(&3, &1, &1);
    /// let next = graph.erase_edge_range(&first, &last)?;
    ///
    /// assert_eq!(next, last);
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), gdwg::Error>(())
    /// ```
    pub fn erase_edge_range(
        &mut self,
        first: &EdgeCursor<N, E>,
        last: &EdgeCursor<N, E>,
    ) -> Result<EdgeCursor<N, E>> {
        if first > last {
            tracing::debug!("erase_edge_range rejected: first is past last");
            return Err(Error::InvalidCursorRange);
        }

        let mut current = match first.key() {
            Some(key) => self.lower_bound(key),
            None => EdgeCursor::end(),
        };
        let mut removed = 0usize;
        while current < *last {
            let Some(key) = current.position.take() else {
                break;
            };
            let next = EdgeCursor::at(self.edge_after(&key.from, &key.to, &key.weight));
            if self.unlink(&key.from, &key.to, &key.weight) {
                removed += 1;
            }
            current = next;
        }

        tracing::debug!(removed, "erase_edge_range");
        Ok(last.clone())
    }

    /// Returns a cursor to the first live edge at or after `key`.
    fn lower_bound(&self, key: &Edge<N, E>) -> EdgeCursor<N, E> {
        match self.lookup(&key.from, &key.to, &key.weight) {
            Some(edge) => EdgeCursor::at(Some(edge)),
            None => EdgeCursor::at(self.edge_after(&key.from, &key.to, &key.weight)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Edge, EdgeCursor, Error, WeightedGraph};

    fn create_chain_graph() -> WeightedGraph<i32, i32> {
        WeightedGraph::from_edges([(1, 2, 1), (1, 2, 4), (1, 3, 2), (2, 3, 7), (3, 1, 0)])
    }

    fn key_of(graph: &WeightedGraph<i32, i32>, cursor: &EdgeCursor<i32, i32>) -> (i32, i32, i32) {
        let edge = graph.edge_at(cursor).unwrap();
        (*edge.from, *edge.to, *edge.weight)
    }

    #[test]
    fn test_begin_equals_end_when_empty() {
        let graph: WeightedGraph<i32, i32> = WeightedGraph::from_nodes([1, 2, 3]);
        assert_eq!(graph.begin(), graph.end());
        assert!(graph.begin().is_end());
        assert!(graph.edge_at(&graph.begin()).is_none());
    }

    #[test]
    fn test_walk_forward_and_back() {
        let graph = create_chain_graph();

        let mut cursor = graph.begin();
        let mut forward = Vec::new();
        while !cursor.is_end() {
            forward.push(key_of(&graph, &cursor));
            cursor = graph.next_edge(&cursor);
        }
        assert_eq!(
            forward,
            vec![(1, 2, 1), (1, 2, 4), (1, 3, 2), (2, 3, 7), (3, 1, 0)]
        );
        assert!(graph.next_edge(&graph.end()).is_end());

        let mut backward = Vec::new();
        let mut cursor = graph.end();
        while let Some(prev) = graph.prev_edge(&cursor) {
            backward.push(key_of(&graph, &prev));
            cursor = prev;
        }
        forward.reverse();
        assert_eq!(backward, forward);
        assert_eq!(cursor, graph.begin());
    }

    #[test]
    fn test_find() {
        let graph = create_chain_graph();

        let cursor = graph.find(&2, &3, &7);
        assert_eq!(cursor.key(), Some(&Edge::new(2, 3, 7)));
        assert_eq!(key_of(&graph, &graph.next_edge(&cursor)), (3, 1, 0));

        assert!(graph.find(&2, &3, &8).is_end());
        assert!(graph.find(&9, &3, &7).is_end());
    }

    #[test]
    fn test_cursor_ordering() {
        let graph = create_chain_graph();
        let first = graph.begin();
        let second = graph.next_edge(&first);

        assert!(first < second);
        assert!(second < graph.end());
        assert_eq!(graph.end(), EdgeCursor::end());
    }

    #[test]
    fn test_erase_edge_at_returns_successor() {
        let mut graph = create_chain_graph();

        let cursor = graph.find(&1, &2, &4);
        let next = graph.erase_edge_at(&cursor).unwrap();
        assert_eq!(key_of(&graph, &next), (1, 3, 2));
        assert_eq!(graph.edge_count(), 4);

        let last = graph.find(&3, &1, &0);
        assert!(graph.erase_edge_at(&last).unwrap().is_end());
    }

    #[test]
    fn test_erase_edge_at_invalid_cursor() {
        let mut graph = create_chain_graph();

        let result = graph.erase_edge_at(&graph.end());
        assert_eq!(result, Err(Error::CursorNotDereferenceable));

        let cursor = graph.find(&1, &3, &2);
        graph.erase_edge(&1, &3, &2).unwrap();
        assert_eq!(
            graph.erase_edge_at(&cursor),
            Err(Error::CursorNotDereferenceable)
        );
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_cursor_survives_unrelated_erase() {
        let mut graph = create_chain_graph();
        let cursor = graph.find(&2, &3, &7);

        graph.erase_edge(&1, &2, &1).unwrap();
        graph.erase_node(&1);

        assert_eq!(key_of(&graph, &cursor), (2, 3, 7));
    }

    #[test]
    fn test_stale_cursor_steps_to_neighbours() {
        let mut graph = create_chain_graph();
        let cursor = graph.find(&1, &3, &2);
        graph.erase_edge(&1, &3, &2).unwrap();

        assert!(graph.edge_at(&cursor).is_none());
        assert_eq!(key_of(&graph, &graph.next_edge(&cursor)), (2, 3, 7));
        let prev = graph.prev_edge(&cursor).unwrap();
        assert_eq!(key_of(&graph, &prev), (1, 2, 4));
    }

    #[test]
    fn test_erase_while_iterating() {
        let mut graph = create_chain_graph();

        let mut cursor = graph.begin();
        while let Some(edge) = graph.edge_at(&cursor) {
            cursor = if *edge.weight % 2 == 0 {
                graph.erase_edge_at(&cursor).unwrap()
            } else {
                graph.next_edge(&cursor)
            };
        }

        let remaining: Vec<_> = graph.iter().map(|e| *e.weight).collect();
        assert_eq!(remaining, vec![1, 7]);
    }

    #[test]
    fn test_erase_edge_range() {
        let mut graph = create_chain_graph();

        let first = graph.find(&1, &2, &4);
        let last = graph.find(&2, &3, &7);
        let next = graph.erase_edge_range(&first, &last).unwrap();

        assert_eq!(next, last);
        assert_eq!(key_of(&graph, &next), (2, 3, 7));
        let keys: Vec<_> = graph.iter().map(|e| (*e.from, *e.to, *e.weight)).collect();
        assert_eq!(keys, vec![(1, 2, 1), (2, 3, 7), (3, 1, 0)]);
    }

    #[test]
    fn test_erase_edge_range_whole_and_empty() {
        let mut graph = create_chain_graph();

        let begin = graph.begin();
        assert!(graph.erase_edge_range(&begin, &begin).is_ok());
        assert_eq!(graph.edge_count(), 5);

        let end = graph.erase_edge_range(&graph.begin(), &graph.end()).unwrap();
        assert!(end.is_end());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.nodes(), vec![1, 2, 3]);
    }

    #[test]
    fn test_erase_edge_range_reversed() {
        let mut graph = create_chain_graph();

        let first = graph.find(&2, &3, &7);
        let last = graph.find(&1, &2, &1);
        assert_eq!(
            graph.erase_edge_range(&first, &last),
            Err(Error::InvalidCursorRange)
        );
        assert_eq!(
            graph.erase_edge_range(&graph.end(), &graph.begin()),
            Err(Error::InvalidCursorRange)
        );
        assert_eq!(graph, create_chain_graph());
    }

    #[test]
    fn test_erase_edge_range_stale_first() {
        let mut graph = create_chain_graph();
        let first = graph.find(&1, &2, &4);
        graph.erase_edge(&1, &2, &4).unwrap();

        graph.erase_edge_range(&first, &graph.end()).unwrap();

        let keys: Vec<_> = graph.iter().map(|e| (*e.from, *e.to, *e.weight)).collect();
        assert_eq!(keys, vec![(1, 2, 1)]);
    }
}
