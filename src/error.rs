use thiserror::Error;

/// The generic Error type, which covers every error this library can return.
///
/// All variants are precondition violations: the caller referenced a node that
/// is not part of the graph, or handed a cursor to an edge-erasing operation
/// that cannot be applied to it. Ordinary absence (inserting a node twice,
/// erasing an edge that is not there) is reported through boolean results
/// instead, see [`crate::WeightedGraph`].
///
/// The display messages are fixed strings. Consumers are allowed to match on
/// them, so they must not change.
///
/// # Error Categories
///
/// ## Missing Nodes
/// - [`Error::InsertEdgeNodeMissing`] - `insert_edge` with an unknown endpoint
/// - [`Error::ReplaceNodeMissing`] - `replace_node` with an unknown old node
/// - [`Error::MergeReplaceNodeMissing`] - `merge_replace_node` with an unknown node
/// - [`Error::EraseEdgeNodeMissing`] - `erase_edge` with an unknown endpoint
/// - [`Error::IsConnectedNodeMissing`] - `is_connected` with an unknown endpoint
/// - [`Error::WeightsNodeMissing`] - `weights` with an unknown endpoint
/// - [`Error::ConnectionsNodeMissing`] - `connections` with an unknown source
///
/// ## Cursor Misuse
/// - [`Error::CursorNotDereferenceable`] - erasing through a cursor without an edge
/// - [`Error::InvalidCursorRange`] - erasing a range whose bounds are reversed
///
/// # Examples
///
/// ```rust
/// use gdwg::{Error, WeightedGraph};
///
/// let mut graph: WeightedGraph<&str, i32> = WeightedGraph::new();
/// graph.insert_node("a");
///
/// match graph.insert_edge(&"a", &"b", 1) {
///     Err(Error::InsertEdgeNodeMissing) => {}
///     other => panic!("unexpected result {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An edge was inserted with a source or destination that is not a node.
    #[error(
        "Cannot call gdwg::graph<N, E>::insert_edge when either src or dst node does not exist"
    )]
    InsertEdgeNodeMissing,

    /// The node to be replaced does not exist.
    #[error("Cannot call gdwg::graph<N, E>::replace_node on a node that doesn't exist")]
    ReplaceNodeMissing,

    /// Either the node being merged away or the merge target does not exist.
    #[error(
        "Cannot call gdwg::graph<N, E>::merge_replace_node on old or new data if they don't exist in the graph"
    )]
    MergeReplaceNodeMissing,

    /// An edge was erased by value with a source or destination that is not a node.
    #[error(
        "Cannot call gdwg::graph<N, E>::erase_edge on src or dst if they don't exist in the graph"
    )]
    EraseEdgeNodeMissing,

    /// Connectivity was queried between nodes that do not both exist.
    #[error(
        "Cannot call gdwg::graph<N, E>::is_connected if src or dst node don't exist in the graph"
    )]
    IsConnectedNodeMissing,

    /// Weights were queried between nodes that do not both exist.
    #[error("Cannot call gdwg::graph<N, E>::weights if src or dst node don't exist in the graph")]
    WeightsNodeMissing,

    /// Outgoing connections were queried for a node that does not exist.
    #[error("Cannot call gdwg::graph<N, E>::connections if src doesn't exist in the graph")]
    ConnectionsNodeMissing,

    /// The cursor handed to `erase_edge_at` does not point to a live edge.
    ///
    /// This is the case for the end cursor and for a cursor whose edge has
    /// already been erased.
    #[error(
        "Cannot call gdwg::graph<N, E>::erase_edge on an iterator that does not point to an edge"
    )]
    CursorNotDereferenceable,

    /// The first cursor of an erase range lies after the last one.
    #[error(
        "Cannot call gdwg::graph<N, E>::erase_edge on a range whose first iterator is past its last"
    )]
    InvalidCursorRange,
}

impl Error {
    /// Returns `true` if this error reports a node that is not part of the graph.
    #[must_use]
    pub fn is_node_missing(&self) -> bool {
        !matches!(
            self,
            Error::CursorNotDereferenceable | Error::InvalidCursorRange
        )
    }
}
