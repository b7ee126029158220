//! Benchmarks for graph construction, mutation and traversal.
//!
//! Covers the operations whose cost grows with graph size:
//! - Bulk construction from edges
//! - Node replacement and merging, which rewrite every touching edge
//! - Full forward and reverse iteration
//! - Cursor walks that erase as they go

extern crate gdwg;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gdwg::WeightedGraph;
use std::hint::black_box;

/// Builds a ring of `nodes` nodes where each node links to its next four
/// neighbours with `parallel` distinct weights per link.
fn ring_edges(nodes: u32, parallel: u32) -> Vec<(u32, u32, u32)> {
    let mut edges = Vec::with_capacity((nodes * 4 * parallel) as usize);
    for from in 0..nodes {
        for step in 1..=4 {
            for weight in 0..parallel {
                edges.push((from, (from + step) % nodes, weight));
            }
        }
    }
    edges
}

fn ring_graph(nodes: u32, parallel: u32) -> WeightedGraph<u32, u32> {
    WeightedGraph::from_edges(ring_edges(nodes, parallel))
}

/// Benchmark bulk construction for growing graph sizes.
fn bench_from_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_edges");
    for nodes in [100u32, 1_000, 10_000] {
        let edges = ring_edges(nodes, 2);
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &edges, |b, edges| {
            b.iter(|| {
                let graph: WeightedGraph<u32, u32> =
                    WeightedGraph::from_edges(black_box(edges.iter().copied()));
                black_box(graph)
            });
        });
    }
    group.finish();
}

/// Benchmark replacing a node, which detaches and reinserts its edges.
fn bench_replace_node(c: &mut Criterion) {
    let graph = ring_graph(1_000, 4);

    c.bench_function("replace_node_1k", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut graph| {
                let replaced = graph.replace_node(black_box(&500), 5_000).unwrap();
                black_box(replaced)
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark merging two neighbouring nodes, which collapses duplicate edges.
fn bench_merge_replace_node(c: &mut Criterion) {
    let graph = ring_graph(1_000, 4);

    c.bench_function("merge_replace_node_1k", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut graph| {
                graph
                    .merge_replace_node(black_box(&500), black_box(&501))
                    .unwrap();
                black_box(graph)
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark full traversal in both directions.
fn bench_iterate(c: &mut Criterion) {
    let graph = ring_graph(10_000, 2);

    c.bench_function("iterate_forward_80k", |b| {
        b.iter(|| black_box(&graph).iter().map(|e| *e.weight as u64).sum::<u64>());
    });

    c.bench_function("iterate_reverse_80k", |b| {
        b.iter(|| {
            black_box(&graph)
                .iter()
                .rev()
                .map(|e| *e.weight as u64)
                .sum::<u64>()
        });
    });
}

/// Benchmark walking the edge sequence with a cursor, erasing every other weight.
fn bench_cursor_erase(c: &mut Criterion) {
    let graph = ring_graph(1_000, 2);

    c.bench_function("cursor_erase_walk_8k", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut graph| {
                let mut cursor = graph.begin();
                while let Some(edge) = graph.edge_at(&cursor) {
                    cursor = if *edge.weight == 0 {
                        graph.erase_edge_at(&cursor).unwrap()
                    } else {
                        graph.next_edge(&cursor)
                    };
                }
                black_box(graph)
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark the point queries used on hot paths.
fn bench_queries(c: &mut Criterion) {
    let graph = ring_graph(10_000, 2);

    c.bench_function("is_connected", |b| {
        b.iter(|| graph.is_connected(black_box(&5_000), black_box(&5_003)).unwrap());
    });

    c.bench_function("weights", |b| {
        b.iter(|| graph.weights(black_box(&5_000), black_box(&5_003)).unwrap());
    });

    c.bench_function("connections", |b| {
        b.iter(|| graph.connections(black_box(&5_000)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_from_edges,
    bench_replace_node,
    bench_merge_replace_node,
    bench_iterate,
    bench_cursor_erase,
    bench_queries
);
criterion_main!(benches);
