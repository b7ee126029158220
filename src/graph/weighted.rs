//! Core weighted graph implementation.
//!
//! This module provides [`WeightedGraph`], a directed multigraph whose nodes are
//! identified by value and whose edges are identified by their full
//! `(from, to, weight)` triple. Both collections are kept in ascending order at
//! all times, so every query and traversal observes a canonical ordering.
//!
//! Node values are stored once, behind an [`Arc`]. The node set and every edge
//! touching a node hold clones of the same `Arc`, never copies of the value.
//! Edges are grouped by source and then by destination, which turns lookups by
//! full triple, by `(from, to)` pair and by source alone into direct map
//! operations keyed by `&N`.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    ops::Bound::{self, Excluded, Unbounded},
    sync::Arc,
};

use crate::{
    graph::{edge::Edge, edge::EdgeRef, iter::Edges},
    Error, Result,
};

/// A reference-counted pointer to a node value, shared by the node set and edges
pub(crate) type NodeRc<N> = Arc<N>;

/// Outgoing edges of one source node: destination -> ascending weights
type Targets<N, E> = BTreeMap<NodeRc<N>, BTreeSet<E>>;

/// A directed, weighted multigraph with value-identified nodes.
///
/// `WeightedGraph<N, E>` stores a set of unique node values of type `N` and a set
/// of unique `(from, to, weight)` edges with weights of type `E`. Several edges
/// may connect the same pair of nodes as long as their weights differ, and
/// self-loops are allowed.
///
/// # Ordering
///
/// - Nodes are kept in ascending order of `N`
/// - Edges are kept in ascending order of source, then destination, then weight
///
/// Every sequence returned by the graph ([`nodes`](Self::nodes),
/// [`weights`](Self::weights), [`connections`](Self::connections),
/// [`iter`](Self::iter)) follows these orders.
///
/// # Invariants
///
/// - Every edge endpoint is a node of the graph. Edge insertion never creates
///   nodes; it fails with an error instead.
/// - No two edges share the same `(from, to, weight)` triple.
///
/// # Ownership
///
/// Each node value is allocated once and shared through an [`Arc`] between the
/// node set and all edges referencing it. Erasing or replacing a node rewrites or
/// removes those edges first. Cloning a graph performs a deep copy: the clone
/// allocates its own node storage and shares nothing with the original.
///
/// # Thread Safety
///
/// `WeightedGraph<N, E>` is [`Send`] and [`Sync`] when `N` and `E` are. It has no
/// internal synchronization; concurrent mutation must be serialized by the
/// caller, for example with one `Mutex` per graph.
///
/// # Examples
///
/// ```rust
/// use gdwg::WeightedGraph;
///
/// let mut graph: WeightedGraph<&str, i32> = WeightedGraph::new();
/// graph.insert_node("A");
/// graph.insert_node("B");
/// graph.insert_node("C");
///
/// graph.insert_edge(&"A", &"B", 3)?;
/// graph.insert_edge(&"A", &"B", 1)?;
/// graph.insert_edge(&"A", &"C", 2)?;
///
/// assert_eq!(graph.weights(&"A", &"B")?, vec![1, 3]);
/// assert_eq!(graph.connections(&"A")?, vec!["B", "C"]);
/// assert!(graph.is_connected(&"A", &"C")?);
/// # Ok::<(), gdwg::Error>(())
/// ```
#[derive(Debug)]
pub struct WeightedGraph<N, E> {
    /// Node storage, ascending by value
    nodes: BTreeSet<NodeRc<N>>,
    /// Edge storage grouped by source; buckets are never left empty
    edges: BTreeMap<NodeRc<N>, Targets<N, E>>,
    /// Number of edges across all buckets
    edge_count: usize,
}

impl<N, E> Default for WeightedGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> WeightedGraph<N, E> {
    /// Creates a new empty graph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::WeightedGraph;
    ///
    /// let graph: WeightedGraph<i32, i32> = WeightedGraph::new();
    /// assert!(graph.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        WeightedGraph {
            nodes: BTreeSet::new(),
            edges: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Returns `true` if the graph contains no nodes.
    ///
    /// A graph without nodes cannot hold edges, so this also means the edge
    /// sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Removes every node and edge from the graph.
    pub fn clear(&mut self) {
        tracing::debug!(
            nodes = self.nodes.len(),
            edges = self.edge_count,
            "clearing graph"
        );
        self.edges.clear();
        self.nodes.clear();
        self.edge_count = 0;
    }

    /// Exchanges the contents of this graph with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<N: Ord + Clone, E: Ord + Clone> WeightedGraph<N, E> {
    /// Creates a graph containing the given node values and no edges.
    ///
    /// Duplicate values collapse into a single node.
    ///
    /// # Arguments
    ///
    /// * `nodes` - The node values to insert
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::WeightedGraph;
    ///
    /// let graph: WeightedGraph<i32, i32> = WeightedGraph::from_nodes([21, 1, 10, 5, 10]);
    /// assert_eq!(graph.nodes(), vec![1, 5, 10, 21]);
    /// ```
    #[must_use]
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for value in nodes {
            graph.insert_node(value);
        }
        graph
    }

    /// Creates a graph from a sequence of edges.
    ///
    /// Both endpoints of every edge are inserted as nodes before the edge itself,
    /// so the input never needs to list nodes separately. Repeated triples
    /// collapse into a single edge.
    ///
    /// # Arguments
    ///
    /// * `edges` - [`Edge`] values or `(from, to, weight)` tuples
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::WeightedGraph;
    ///
    /// let graph: WeightedGraph<&str, i32> = WeightedGraph::from_edges([
    ///     ("A", "B", 30),
    ///     ("A", "B", 40),
    ///     ("B", "C", 15),
    /// ]);
    ///
    /// assert_eq!(graph.nodes(), vec!["A", "B", "C"]);
    /// assert_eq!(graph.weights(&"A", &"B")?, vec![30, 40]);
    /// # Ok::<(), gdwg::Error>(())
    /// ```
    #[must_use]
    pub fn from_edges<I, T>(edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Edge<N, E>>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let Edge { from, to, weight } = edge.into();
            let from = graph.intern(from);
            let to = graph.intern(to);
            graph.link(from, to, weight);
        }
        graph
    }

    /// Inserts a node, returning `true` if it was not already present.
    ///
    /// # Arguments
    ///
    /// * `value` - The node value to insert
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::WeightedGraph;
    ///
    /// let mut graph: WeightedGraph<&str, i32> = WeightedGraph::new();
    /// assert!(graph.insert_node("A"));
    /// assert!(!graph.insert_node("A"));
    /// ```
    pub fn insert_node(&mut self, value: N) -> bool {
        if self.nodes.contains(&value) {
            return false;
        }
        self.nodes.insert(Arc::new(value))
    }

    /// Inserts the edge `src -> dst` with the given weight.
    ///
    /// # Arguments
    ///
    /// * `src` - The source node, which must already exist
    /// * `dst` - The destination node, which must already exist
    /// * `weight` - The weight of the new edge
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the edge was added, `Ok(false)` if an edge with the identical
    /// triple already existed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsertEdgeNodeMissing`] if `src` or `dst` is not a node.
    /// The graph is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::{Error, WeightedGraph};
    ///
    /// let mut graph: WeightedGraph<&str, i32> = WeightedGraph::from_nodes(["a", "b"]);
    ///
    /// assert_eq!(graph.insert_edge(&"a", &"b", 5), Ok(true));
    /// assert_eq!(graph.insert_edge(&"a", &"b", 5), Ok(false));
    /// assert_eq!(graph.insert_edge(&"a", &"z", 5), Err(Error::InsertEdgeNodeMissing));
    /// ```
    pub fn insert_edge(&mut self, src: &N, dst: &N, weight: E) -> Result<bool> {
        let (Some(from), Some(to)) = (self.shared(src), self.shared(dst)) else {
            tracing::debug!("insert_edge rejected: endpoint is not a node");
            return Err(Error::InsertEdgeNodeMissing);
        };

        let added = self.link(from, to, weight);
        tracing::trace!(added, "insert_edge");
        Ok(added)
    }

    /// Replaces the node `old` with a new node `new`.
    ///
    /// Every edge that starts or ends at `old` is rewritten to start or end at
    /// `new` instead, keeping its other endpoint and its weight. Self-loops on
    /// `old` become self-loops on `new`. Afterwards `old` is no longer a node.
    ///
    /// # Arguments
    ///
    /// * `old` - The node to replace, which must exist
    /// * `new` - The replacement value, which must not yet be a node
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the node was replaced. `Ok(false)` if `new` is already a node,
    /// in which case nothing changes; use
    /// [`merge_replace_node`](Self::merge_replace_node) to fold one node into
    /// another existing one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReplaceNodeMissing`] if `old` is not a node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::WeightedGraph;
    ///
    /// let mut graph: WeightedGraph<&str, i32> = WeightedGraph::from_edges([("b", "a", 2)]);
    ///
    /// assert_eq!(graph.replace_node(&"a", "e"), Ok(true));
    /// assert!(!graph.is_node(&"a"));
    /// assert!(graph.is_connected(&"b", &"e")?);
    /// assert_eq!(graph.replace_node(&"b", "e"), Ok(false));
    /// # Ok::<(), gdwg::Error>(())
    /// ```
    pub fn replace_node(&mut self, old: &N, new: N) -> Result<bool> {
        if !self.is_node(old) {
            tracing::debug!("replace_node rejected: old value is not a node");
            return Err(Error::ReplaceNodeMissing);
        }
        if self.is_node(&new) {
            return Ok(false);
        }

        let replacement = self.intern(new);
        let rewritten = self.redirect(old, &replacement);
        self.nodes.remove(old);

        tracing::debug!(rewritten, "replace_node");
        Ok(true)
    }

    /// Merges the node `old` into the existing node `new`.
    ///
    /// Every edge touching `old` is rewritten to touch `new` instead. When a
    /// rewritten edge coincides with an edge that already exists, only one copy
    /// is kept. Afterwards `old` is no longer a node. Merging a node into itself
    /// leaves the graph unchanged.
    ///
    /// # Arguments
    ///
    /// * `old` - The node to merge away, which must exist
    /// * `new` - The node receiving the edges, which must exist
    ///
    /// # Errors
    ///
    /// Returns [`Error::MergeReplaceNodeMissing`] if either node does not exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::WeightedGraph;
    ///
    /// let mut graph: WeightedGraph<&str, i32> =
    ///     WeightedGraph::from_edges([("A", "B", 1), ("A", "C", 2), ("A", "D", 3)]);
    ///
    /// graph.merge_replace_node(&"A", &"B")?;
    ///
    /// assert_eq!(graph.nodes(), vec!["B", "C", "D"]);
    /// assert_eq!(graph.weights(&"B", &"B")?, vec![1]);
    /// assert_eq!(graph.weights(&"B", &"C")?, vec![2]);
    /// # Ok::<(), gdwg::Error>(())
    /// ```
    pub fn merge_replace_node(&mut self, old: &N, new: &N) -> Result<()> {
        let (true, Some(target)) = (self.is_node(old), self.shared(new)) else {
            tracing::debug!("merge_replace_node rejected: old or new value is not a node");
            return Err(Error::MergeReplaceNodeMissing);
        };
        if old == new {
            return Ok(());
        }

        let before = self.edge_count;
        let rewritten = self.redirect(old, &target);
        self.nodes.remove(old);

        tracing::debug!(
            rewritten,
            collapsed = before - self.edge_count,
            "merge_replace_node"
        );
        Ok(())
    }

    /// Removes a node together with every edge that starts or ends at it.
    ///
    /// # Returns
    ///
    /// `true` if the node existed and was removed, `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::WeightedGraph;
    ///
    /// let mut graph: WeightedGraph<&str, i32> = WeightedGraph::from_edges([("b", "a", 2)]);
    ///
    /// assert!(graph.erase_node(&"a"));
    /// assert!(!graph.erase_node(&"a"));
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    pub fn erase_node(&mut self, value: &N) -> bool {
        if !self.is_node(value) {
            return false;
        }

        let removed = self.detach(value).len();
        self.nodes.remove(value);

        tracing::debug!(removed, "erase_node");
        true
    }

    /// Removes the edge `src -> dst` with the given weight.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the edge existed and was removed, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EraseEdgeNodeMissing`] if `src` or `dst` is not a node.
    pub fn erase_edge(&mut self, src: &N, dst: &N, weight: &E) -> Result<bool> {
        if !self.is_node(src) || !self.is_node(dst) {
            tracing::debug!("erase_edge rejected: endpoint is not a node");
            return Err(Error::EraseEdgeNodeMissing);
        }

        let removed = self.unlink(src, dst, weight);
        tracing::trace!(removed, "erase_edge");
        Ok(removed)
    }

    /// Returns `true` if `value` is a node of the graph.
    ///
    /// Runs in `O(log n)` for `n` nodes.
    #[must_use]
    pub fn is_node(&self, value: &N) -> bool {
        self.nodes.contains(value)
    }

    /// Returns `true` if at least one edge leads from `src` to `dst`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IsConnectedNodeMissing`] if `src` or `dst` is not a node.
    pub fn is_connected(&self, src: &N, dst: &N) -> Result<bool> {
        if !self.is_node(src) || !self.is_node(dst) {
            tracing::debug!("is_connected rejected: src or dst is not a node");
            return Err(Error::IsConnectedNodeMissing);
        }

        Ok(self
            .edges
            .get(src)
            .is_some_and(|targets| targets.contains_key(dst)))
    }

    /// Returns all node values in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::WeightedGraph;
    ///
    /// let mut graph: WeightedGraph<i32, &str> = WeightedGraph::new();
    /// graph.insert_node(20);
    /// graph.insert_node(1);
    /// graph.insert_node(33);
    ///
    /// assert_eq!(graph.nodes(), vec![1, 20, 33]);
    /// ```
    #[must_use]
    pub fn nodes(&self) -> Vec<N> {
        self.nodes.iter().map(|node| N::clone(node)).collect()
    }

    /// Returns the weights of all edges from `src` to `dst` in ascending order.
    ///
    /// The result is empty when both nodes exist but are not connected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WeightsNodeMissing`] if `src` or `dst` is not a node.
    pub fn weights(&self, src: &N, dst: &N) -> Result<Vec<E>> {
        if !self.is_node(src) || !self.is_node(dst) {
            tracing::debug!("weights rejected: src or dst is not a node");
            return Err(Error::WeightsNodeMissing);
        }

        Ok(self
            .edges
            .get(src)
            .and_then(|targets| targets.get(dst))
            .map(|weights| weights.iter().cloned().collect())
            .unwrap_or_default())
    }

    /// Returns the distinct destinations reachable over one edge from `src`.
    ///
    /// Destinations are listed once each, in ascending order, no matter how many
    /// parallel edges lead to them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConnectionsNodeMissing`] if `src` is not a node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::WeightedGraph;
    ///
    /// let graph: WeightedGraph<i32, &str> =
    ///     WeightedGraph::from_edges([(1, 20, "pwd"), (1, 15, "abc"), (1, 20, "bpq")]);
    ///
    /// assert_eq!(graph.connections(&1)?, vec![15, 20]);
    /// assert!(graph.connections(&20)?.is_empty());
    /// # Ok::<(), gdwg::Error>(())
    /// ```
    pub fn connections(&self, src: &N) -> Result<Vec<N>> {
        if !self.is_node(src) {
            tracing::debug!("connections rejected: src is not a node");
            return Err(Error::ConnectionsNodeMissing);
        }

        Ok(self
            .edges
            .get(src)
            .map(|targets| targets.keys().map(|to| N::clone(to)).collect())
            .unwrap_or_default())
    }

    /// Returns the shared storage of an existing node.
    fn shared(&self, value: &N) -> Option<NodeRc<N>> {
        self.nodes.get(value).cloned()
    }

    /// Returns the shared storage of `value`, inserting it as a node if needed.
    fn intern(&mut self, value: N) -> NodeRc<N> {
        if let Some(existing) = self.nodes.get(&value) {
            return existing.clone();
        }

        let node = Arc::new(value);
        self.nodes.insert(node.clone());
        node
    }

    /// Adds an edge between two interned nodes. Returns `false` on a duplicate.
    fn link(&mut self, from: NodeRc<N>, to: NodeRc<N>, weight: E) -> bool {
        let added = self
            .edges
            .entry(from)
            .or_default()
            .entry(to)
            .or_default()
            .insert(weight);
        if added {
            self.edge_count += 1;
        }
        added
    }

    /// Removes a single edge, pruning buckets that become empty.
    pub(crate) fn unlink(&mut self, from: &N, to: &N, weight: &E) -> bool {
        let Some(targets) = self.edges.get_mut(from) else {
            return false;
        };
        let Some(weights) = targets.get_mut(to) else {
            return false;
        };
        if !weights.remove(weight) {
            return false;
        }

        if weights.is_empty() {
            targets.remove(to);
            if targets.is_empty() {
                self.edges.remove(from);
            }
        }
        self.edge_count -= 1;
        true
    }

    /// Removes every edge touching `value` and hands them back.
    ///
    /// Self-loops are returned once.
    fn detach(&mut self, value: &N) -> Vec<(NodeRc<N>, NodeRc<N>, E)> {
        let mut removed = Vec::new();

        if let Some((from, targets)) = self.edges.remove_entry(value) {
            for (to, weights) in targets {
                removed.extend(weights.into_iter().map(|w| (from.clone(), to.clone(), w)));
            }
        }

        for (from, targets) in &mut self.edges {
            if let Some((to, weights)) = targets.remove_entry(value) {
                removed.extend(weights.into_iter().map(|w| (from.clone(), to.clone(), w)));
            }
        }
        self.edges.retain(|_, targets| !targets.is_empty());

        self.edge_count -= removed.len();
        removed
    }

    /// Moves every edge touching `old` over to `new`. Returns the number of
    /// edges that were rewritten, including those that collapsed into existing
    /// ones.
    fn redirect(&mut self, old: &N, new: &NodeRc<N>) -> usize {
        let detached = self.detach(old);
        let rewritten = detached.len();

        for (from, to, weight) in detached {
            let from = if *from == *old { new.clone() } else { from };
            let to = if *to == *old { new.clone() } else { to };
            self.link(from, to, weight);
        }
        rewritten
    }
}

impl<N: Ord, E: Ord> WeightedGraph<N, E> {
    /// Returns an iterator over all edges in ascending `(from, to, weight)` order.
    ///
    /// The iterator is double-ended, so `.rev()` walks the edges from last to
    /// first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gdwg::WeightedGraph;
    ///
    /// let graph: WeightedGraph<i32, &str> =
    ///     WeightedGraph::from_edges([(15, 33, "qaz"), (1, 15, "abc")]);
    ///
    /// let edges: Vec<_> = graph.iter().map(|e| (*e.from, *e.to, *e.weight)).collect();
    /// assert_eq!(edges, vec![(1, 15, "abc"), (15, 33, "qaz")]);
    ///
    /// let last = graph.iter().next_back().unwrap();
    /// assert_eq!(*last.from, 15);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Edges<'_, N, E> {
        Edges::new(self)
    }

    /// Returns the first edge in canonical order.
    pub(crate) fn first_edge(&self) -> Option<EdgeRef<'_, N, E>> {
        let (from, targets) = self.edges.first_key_value()?;
        let (to, weights) = targets.first_key_value()?;
        let weight = weights.first()?;
        Some(EdgeRef { from, to, weight })
    }

    /// Returns the last edge in canonical order.
    pub(crate) fn last_edge(&self) -> Option<EdgeRef<'_, N, E>> {
        let (from, targets) = self.edges.last_key_value()?;
        let (to, weights) = targets.last_key_value()?;
        let weight = weights.last()?;
        Some(EdgeRef { from, to, weight })
    }

    /// Returns the stored edge matching the triple exactly.
    pub(crate) fn lookup(&self, from: &N, to: &N, weight: &E) -> Option<EdgeRef<'_, N, E>> {
        let (from, targets) = self.edges.get_key_value(from)?;
        let (to, weights) = targets.get_key_value(to)?;
        let weight = weights.get(weight)?;
        Some(EdgeRef { from, to, weight })
    }

    /// Returns the first edge ordered strictly after the given triple.
    ///
    /// The triple does not have to be an edge of the graph.
    pub(crate) fn edge_after(&self, from: &N, to: &N, weight: &E) -> Option<EdgeRef<'_, N, E>> {
        self.neighbour(from, to, weight, Step::Forward)
    }

    /// Returns the last edge ordered strictly before the given triple.
    ///
    /// The triple does not have to be an edge of the graph.
    pub(crate) fn edge_before(&self, from: &N, to: &N, weight: &E) -> Option<EdgeRef<'_, N, E>> {
        self.neighbour(from, to, weight, Step::Backward)
    }

    /// Finds the closest edge on one side of a triple.
    ///
    /// Looks inside the `(from, to)` weight set first, then the remaining
    /// destinations of `from`, then the neighbouring sources.
    fn neighbour(&self, from: &N, to: &N, weight: &E, step: Step) -> Option<EdgeRef<'_, N, E>> {
        if let Some((src, targets)) = self.edges.get_key_value(from) {
            if let Some((dst, weights)) = targets.get_key_value(to) {
                if let Some(next) = step.take(weights.range::<E, _>(step.bounds(weight))) {
                    return Some(EdgeRef {
                        from: src,
                        to: dst,
                        weight: next,
                    });
                }
            }
            if let Some((dst, weights)) = step.take(targets.range::<N, _>(step.bounds(to))) {
                if let Some(next) = step.take(weights.iter()) {
                    return Some(EdgeRef {
                        from: src,
                        to: dst,
                        weight: next,
                    });
                }
            }
        }

        let (src, targets) = step.take(self.edges.range::<N, _>(step.bounds(from)))?;
        let (dst, weights) = step.take(targets.iter())?;
        Some(EdgeRef {
            from: src,
            to: dst,
            weight: step.take(weights.iter())?,
        })
    }
}

/// Direction of a neighbour lookup in canonical edge order
#[derive(Debug, Clone, Copy)]
enum Step {
    Forward,
    Backward,
}

impl Step {
    /// Range covering every key strictly on this side of `key`.
    fn bounds<T: ?Sized>(self, key: &T) -> (Bound<&T>, Bound<&T>) {
        match self {
            Step::Forward => (Excluded(key), Unbounded),
            Step::Backward => (Unbounded, Excluded(key)),
        }
    }

    /// Takes the element of `iter` closest to the starting key.
    fn take<I: DoubleEndedIterator>(self, mut iter: I) -> Option<I::Item> {
        match self {
            Step::Forward => iter.next(),
            Step::Backward => iter.next_back(),
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Clone for WeightedGraph<N, E> {
    /// Deep-copies the graph.
    ///
    /// The copy allocates fresh storage for every node value; its edges point at
    /// the copy's own nodes and nothing is shared with `self`.
    fn clone(&self) -> Self {
        let mut graph = Self::new();
        for node in &self.nodes {
            graph.intern(N::clone(node));
        }
        for edge in self {
            let from = graph.intern(edge.from.clone());
            let to = graph.intern(edge.to.clone());
            graph.link(from, to, edge.weight.clone());
        }
        graph
    }
}

impl<N: Ord, E: Ord> PartialEq for WeightedGraph<N, E> {
    /// Two graphs are equal when they hold the same node values and the same
    /// `(from, to, weight)` edges.
    fn eq(&self, other: &Self) -> bool {
        self.nodes.len() == other.nodes.len()
            && self.edge_count == other.edge_count
            && self.nodes.iter().eq(other.nodes.iter())
            && self.iter().eq(other.iter())
    }
}

impl<N: Ord, E: Ord> Eq for WeightedGraph<N, E> {}

impl<N: Ord + fmt::Display, E: fmt::Display> fmt::Display for WeightedGraph<N, E> {
    /// Renders every node in ascending order, followed by its outgoing edges.
    ///
    /// Each node becomes a block of the form
    ///
    /// ```text
    /// <node> (
    ///   <dest> | <weight>
    /// )
    /// ```
    ///
    /// with one line per outgoing edge, ascending by destination and weight. An
    /// empty graph renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{node} (")?;
            if let Some(targets) = self.edges.get(&**node) {
                for (to, weights) in targets {
                    for weight in weights {
                        writeln!(f, "  {to} | {weight}")?;
                    }
                }
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
