use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heapgraph::graph::algorithms::{
    breadth_first_search, depth_first_search, depth_first_search_recursive, has_any_cycle,
    is_disconnected,
};
use heapgraph::graph::{AdjacencyList, AdjacencyMatrix, Graph, Vertex};

// Grid of `side * side` vertices with right and down edges: acyclic and
// fully reachable from vertex 0.
fn grid<G: Graph<Element = usize> + Default>(side: usize) -> (G, Vec<Vertex<usize>>) {
    let mut graph = G::default();
    let nodes: Vec<_> = (0..side * side).map(|i| graph.create_vertex(i)).collect();
    for row in 0..side {
        for col in 0..side {
            let here = row * side + col;
            if col + 1 < side {
                graph.add_directed_edge(&nodes[here], &nodes[here + 1], Some(1.0)).unwrap();
            }
            if row + 1 < side {
                graph.add_directed_edge(&nodes[here], &nodes[here + side], Some(1.0)).unwrap();
            }
        }
    }
    (graph, nodes)
}

fn bench_traversals(c: &mut Criterion) {
    let side = 32;
    let (list, nodes) = grid::<AdjacencyList<_>>(side);
    let (matrix, mnodes) = grid::<AdjacencyMatrix<_>>(side);

    c.bench_function("adj_list_bfs", |b| {
        b.iter(|| black_box(breadth_first_search(&list, &nodes[0])));
    });

    c.bench_function("adj_matrix_bfs", |b| {
        b.iter(|| black_box(breadth_first_search(&matrix, &mnodes[0])));
    });

    c.bench_function("adj_list_dfs_iterative", |b| {
        b.iter(|| black_box(depth_first_search(&list, &nodes[0])));
    });

    c.bench_function("adj_list_dfs_recursive", |b| {
        b.iter(|| black_box(depth_first_search_recursive(&list, &nodes[0])));
    });

    c.bench_function("adj_list_has_any_cycle", |b| {
        b.iter(|| black_box(has_any_cycle(&list)));
    });

    c.bench_function("adj_list_is_disconnected", |b| {
        b.iter(|| black_box(is_disconnected(&list)));
    });
}

criterion_group!(benches, bench_traversals);
criterion_main!(benches);
