//! Benchmarks for cycle detection performance
//!
//! Exercises the DFS detector on synthetic graphs shaped like real projects:
//! long acyclic chains, rings, and dense layered DAGs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::PathBuf;

use cyclescope::analysis::find_cycles;
use cyclescope::graph::ImportGraph;

fn file(i: usize) -> PathBuf {
    PathBuf::from(format!("/project/src/module{i}.ts"))
}

/// A single ring of `size` nodes: one indirect cycle.
fn ring_graph(size: usize) -> ImportGraph {
    let mut graph = ImportGraph::new();
    for i in 0..size {
        graph.add_file(&file(i));
    }
    for i in 0..size {
        graph.add_dependency(&file(i), &file((i + 1) % size));
    }
    graph
}

/// A layered DAG: `layers` layers of `width` nodes, each node importing
/// every node in the next layer. No cycles.
fn layered_dag(layers: usize, width: usize) -> ImportGraph {
    let mut graph = ImportGraph::new();
    for i in 0..layers * width {
        graph.add_file(&file(i));
    }
    for layer in 0..layers - 1 {
        for from in 0..width {
            for to in 0..width {
                graph.add_dependency(&file(layer * width + from), &file((layer + 1) * width + to));
            }
        }
    }
    graph
}

fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");

    for size in [100, 1000, 10000].iter() {
        let graph = ring_graph(*size);

        group.bench_with_input(BenchmarkId::new("nodes", size), size, |b, _| {
            b.iter(|| black_box(find_cycles(&graph)));
        });
    }

    group.finish();
}

fn bench_dag(c: &mut Criterion) {
    let mut group = c.benchmark_group("layered_dag");

    for width in [10, 20, 40].iter() {
        let graph = layered_dag(10, *width);

        group.bench_with_input(BenchmarkId::new("width", width), width, |b, _| {
            b.iter(|| black_box(find_cycles(&graph)));
        });
    }

    group.finish();
}

fn bench_many_small_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutual_pairs");

    for pairs in [50, 500].iter() {
        let mut graph = ImportGraph::new();
        for i in 0..pairs * 2 {
            graph.add_file(&file(i));
        }
        for i in 0..*pairs {
            graph.add_dependency(&file(2 * i), &file(2 * i + 1));
            graph.add_dependency(&file(2 * i + 1), &file(2 * i));
        }

        group.bench_with_input(BenchmarkId::new("pairs", pairs), pairs, |b, _| {
            b.iter(|| black_box(find_cycles(&graph)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ring, bench_dag, bench_many_small_cycles);
criterion_main!(benches);
