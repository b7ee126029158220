//! Query integration tests.
//!
//! Covers node membership, connectivity, ordered weight and connection lists,
//! and the node-missing errors every query reports.

use gdwg::{Error, Result, WeightedGraph};

/// Nodes 1, 15, 20 and 33 with the edges 1 -> 15 ("abc") and 15 -> 33 ("qaz").
fn create_accessor_graph() -> Result<WeightedGraph<i32, String>> {
    let mut graph: WeightedGraph<i32, String> = WeightedGraph::new();
    graph.insert_node(20);
    graph.insert_node(1);
    graph.insert_node(33);
    graph.insert_node(15);
    graph.insert_edge(&1, &15, "abc".to_string())?;
    graph.insert_edge(&15, &33, "qaz".to_string())?;
    Ok(graph)
}

#[test]
fn test_is_node() -> Result<()> {
    let graph = create_accessor_graph()?;
    assert!(graph.is_node(&1));
    assert!(graph.is_node(&15));
    assert!(!graph.is_node(&66));
    Ok(())
}

#[test]
fn test_is_empty() -> Result<()> {
    let graph = create_accessor_graph()?;
    let empty: WeightedGraph<i32, String> = WeightedGraph::new();
    assert!(!graph.is_empty());
    assert!(empty.is_empty());
    Ok(())
}

#[test]
fn test_is_connected() -> Result<()> {
    let graph = create_accessor_graph()?;
    assert!(graph.is_connected(&1, &15)?);
    assert!(graph.is_connected(&15, &33)?);
    assert!(!graph.is_connected(&1, &33)?);
    assert!(!graph.is_connected(&15, &1)?);

    for (src, dst) in [(2, 33), (33, 51)] {
        let err = graph.is_connected(&src, &dst).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot call gdwg::graph<N, E>::is_connected if src or dst node don't exist in the graph"
        );
    }
    Ok(())
}

#[test]
fn test_nodes_sorted() -> Result<()> {
    let mut graph = create_accessor_graph()?;
    assert_eq!(graph.nodes(), vec![1, 15, 20, 33]);

    graph.insert_node(2);
    graph.insert_node(17);
    assert_eq!(graph.nodes(), vec![1, 2, 15, 17, 20, 33]);

    let mut other: WeightedGraph<i32, String> = WeightedGraph::new();
    other.insert_node(50);
    other.insert_node(100);
    other.insert_node(88);
    assert_eq!(other.nodes(), vec![50, 88, 100]);
    Ok(())
}

#[test]
fn test_weights() -> Result<()> {
    let mut graph = create_accessor_graph()?;
    assert_eq!(graph.weights(&1, &15)?, vec!["abc".to_string()]);

    graph.insert_edge(&1, &15, "def".to_string())?;
    assert_eq!(
        graph.weights(&1, &15)?,
        vec!["abc".to_string(), "def".to_string()]
    );
    assert!(graph.weights(&15, &1)?.is_empty());

    let err = graph.weights(&1, &99).unwrap_err();
    assert_eq!(err, Error::WeightsNodeMissing);
    assert_eq!(
        err.to_string(),
        "Cannot call gdwg::graph<N, E>::weights if src or dst node don't exist in the graph"
    );
    Ok(())
}

#[test]
fn test_find() -> Result<()> {
    let mut graph: WeightedGraph<i32, String> = WeightedGraph::from_nodes([20, 1, 16]);
    graph.insert_edge(&20, &1, "a".to_string())?;
    graph.insert_edge(&16, &1, "d".to_string())?;
    graph.insert_edge(&20, &16, "c".to_string())?;

    let cursor = graph.find(&20, &16, &"c".to_string());
    assert_ne!(cursor, graph.end());

    let edge = graph.edge_at(&cursor).map(|e| e.to_owned_edge());
    assert_eq!(edge.map(|e| e.into_parts()), Some((20, 16, "c".to_string())));

    assert_eq!(graph.find(&20, &16, &"x".to_string()), graph.end());
    assert_eq!(graph.find(&99, &16, &"c".to_string()), graph.end());
    Ok(())
}

#[test]
fn test_connections() -> Result<()> {
    let mut graph = create_accessor_graph()?;
    assert_eq!(graph.connections(&1)?, vec![15]);

    graph.insert_edge(&1, &20, "pwd".to_string())?;
    graph.insert_edge(&1, &20, "bpq".to_string())?;
    assert_eq!(graph.connections(&1)?, vec![15, 20]);
    assert!(graph.connections(&33)?.is_empty());

    let err = graph.connections(&80).unwrap_err();
    assert_eq!(err, Error::ConnectionsNodeMissing);
    assert!(err.is_node_missing());
    assert_eq!(
        err.to_string(),
        "Cannot call gdwg::graph<N, E>::connections if src doesn't exist in the graph"
    );
    Ok(())
}

#[test]
fn test_counts() -> Result<()> {
    let mut graph = create_accessor_graph()?;
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 2);

    graph.insert_edge(&15, &15, "loop".to_string())?;
    graph.erase_node(&1);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    Ok(())
}
