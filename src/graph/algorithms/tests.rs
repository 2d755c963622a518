//! Tests for the traversal algorithms, run against both storage strategies.

use super::*;
use crate::graph::basic::{AdjacencyList, AdjacencyMatrix};
use crate::graph::vertex::EdgeType;

type Label = &'static str;

fn build<G>(names: &[Label], edges: &[(usize, usize)], kind: EdgeType) -> (G, Vec<Vertex<Label>>)
where
    G: Graph<Element = Label> + Default,
{
    let mut graph = G::default();
    let vertices: Vec<_> = names.iter().map(|&n| graph.create_vertex(n)).collect();
    for &(from, to) in edges {
        graph
            .add(kind, &vertices[from], &vertices[to], None)
            .expect("test edges reference local vertices");
    }
    (graph, vertices)
}

fn labels(order: &[Vertex<Label>]) -> Vec<Label> {
    order.iter().map(|v| *v.data()).collect()
}

// A -> {B, C, D, E}, B -> {C, D}, C -> E, D -> E
const DAG_NAMES: [Label; 5] = ["A", "B", "C", "D", "E"];
const DAG_EDGES: [(usize, usize); 8] = [(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (2, 4), (3, 4)];

// Undirected: A-B, A-D, A-C, C-I, D-I, I-J, I-G, I-F, F-G, F-E, E-H
const MAP_NAMES: [Label; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];
const MAP_EDGES: [(usize, usize); 11] = [
    (0, 1),
    (0, 3),
    (0, 2),
    (2, 8),
    (3, 8),
    (8, 9),
    (8, 6),
    (8, 5),
    (5, 6),
    (5, 4),
    (4, 7),
];

#[test]
fn test_bfs_level_order() {
    let (graph, v) = build::<AdjacencyList<_>>(&MAP_NAMES, &MAP_EDGES, EdgeType::Undirected);
    let order = breadth_first_search(&graph, &v[0]);
    assert_eq!(labels(&order), vec!["A", "B", "D", "C", "I", "J", "G", "F", "E", "H"]);
}

#[test]
fn test_bfs_visits_only_reachable_component() {
    for order in [
        {
            let (g, v) = build::<AdjacencyList<_>>(&["A", "B", "C", "D"], &[(0, 1), (2, 3)], EdgeType::Undirected);
            breadth_first_search(&g, &v[0])
        },
        {
            let (g, v) = build::<AdjacencyMatrix<_>>(&["A", "B", "C", "D"], &[(0, 1), (2, 3)], EdgeType::Undirected);
            breadth_first_search(&g, &v[0])
        },
    ] {
        assert_eq!(labels(&order), vec!["A", "B"]);
    }
}

#[test]
fn test_bfs_iterator_is_lazy_and_tracks_queue() {
    let (graph, v) = build::<AdjacencyList<_>>(&DAG_NAMES, &DAG_EDGES, EdgeType::Directed);
    let mut bfs = Bfs::new(&graph, &v[0]);
    assert_eq!(bfs.next().map(|x| *x.data()), Some("A"));
    // A's four successors were enqueued at once.
    assert_eq!(bfs.max_queue_len(), 4);
    assert_eq!(bfs.count(), 4);
}

#[test]
fn test_bfs_max_queue_len() {
    let (graph, v) = build::<AdjacencyList<_>>(&MAP_NAMES, &MAP_EDGES, EdgeType::Undirected);
    // After A: [B, D, C]; after B: [D, C]; after D: [C, I]; after C: [I];
    // after I: [J, G, F]; then drains to E, H.
    assert_eq!(breadth_first_max_queue_len(&graph, &v[0]), 3);

    let (lone, w) = build::<AdjacencyList<_>>(&["A"], &[], EdgeType::Directed);
    assert_eq!(breadth_first_max_queue_len(&lone, &w[0]), 1);
}

#[test]
fn test_dfs_variants_agree() {
    let (graph, v) = build::<AdjacencyList<_>>(&MAP_NAMES, &MAP_EDGES, EdgeType::Undirected);
    let iterative = depth_first_search(&graph, &v[0]);
    let recursive = depth_first_search_recursive(&graph, &v[0]);
    assert_eq!(labels(&iterative), vec!["A", "B", "D", "I", "C", "J", "G", "F", "E", "H"]);
    assert_eq!(iterative, recursive);
}

#[test]
fn test_dfs_on_dag() {
    let (graph, v) = build::<AdjacencyMatrix<_>>(&DAG_NAMES, &DAG_EDGES, EdgeType::Directed);
    assert_eq!(labels(&depth_first_search(&graph, &v[0])), vec!["A", "B", "C", "E", "D"]);
    assert_eq!(labels(&depth_first_search(&graph, &v[4])), vec!["E"]);
}

#[test]
fn test_number_of_paths() {
    let (list, v) = build::<AdjacencyList<_>>(&DAG_NAMES, &DAG_EDGES, EdgeType::Directed);
    assert_eq!(number_of_paths(&list, &v[0], &v[4]), 5);
    assert_eq!(number_of_paths(&list, &v[1], &v[4]), 2);
    assert_eq!(number_of_paths(&list, &v[4], &v[0]), 0);
    assert_eq!(number_of_paths(&list, &v[2], &v[2]), 1);

    let (matrix, w) = build::<AdjacencyMatrix<_>>(&DAG_NAMES, &DAG_EDGES, EdgeType::Directed);
    assert_eq!(number_of_paths(&matrix, &w[0], &w[4]), 5);
}

#[test]
fn test_number_of_paths_without_direct_edge() {
    // The DAG from the path-counting exercise minus the direct A -> E edge.
    let edges: Vec<_> = DAG_EDGES.iter().copied().filter(|&e| e != (0, 4)).collect();
    let (graph, v) = build::<AdjacencyList<_>>(&DAG_NAMES, &edges, EdgeType::Directed);
    assert_eq!(number_of_paths(&graph, &v[0], &v[4]), 4);
}

#[test]
fn test_number_of_paths_reuses_vertices_across_branches() {
    // Diamond A -> {B, C} -> D -> E: D lies on both paths.
    let (graph, v) = build::<AdjacencyList<_>>(
        &["A", "B", "C", "D", "E"],
        &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)],
        EdgeType::Directed,
    );
    assert_eq!(number_of_paths(&graph, &v[0], &v[4]), 2);
}

#[test]
fn test_number_of_paths_undirected() {
    // Triangle A-B-C: A->C directly and A->B->C.
    let (graph, v) = build::<AdjacencyList<_>>(&["A", "B", "C"], &[(0, 1), (1, 2), (0, 2)], EdgeType::Undirected);
    assert_eq!(number_of_paths(&graph, &v[0], &v[2]), 2);
}

#[test]
fn test_has_cycle() {
    let (cyclic, v) = build::<AdjacencyList<_>>(&["A", "B", "C"], &[(0, 1), (1, 2), (2, 0)], EdgeType::Directed);
    assert!(has_cycle(&cyclic, &v[0]));
    assert!(has_cycle(&cyclic, &v[2]));

    let (chain, w) = build::<AdjacencyMatrix<_>>(&["A", "B", "C"], &[(0, 1), (1, 2)], EdgeType::Directed);
    assert!(!has_cycle(&chain, &w[0]));
    assert!(!has_any_cycle(&chain));
}

#[test]
fn test_has_cycle_ignores_cross_edges() {
    // Two routes into D are not a cycle.
    let (graph, v) = build::<AdjacencyList<_>>(&DAG_NAMES, &DAG_EDGES, EdgeType::Directed);
    assert!(!has_cycle(&graph, &v[0]));
    assert!(!has_any_cycle(&graph));
}

#[test]
fn test_has_cycle_only_when_reachable() {
    // A -> B, and a separate C <-> D loop.
    let (graph, v) = build::<AdjacencyList<_>>(&["A", "B", "C", "D"], &[(0, 1), (2, 3), (3, 2)], EdgeType::Directed);
    assert!(!has_cycle(&graph, &v[0]));
    assert!(has_cycle(&graph, &v[2]));
    assert!(has_any_cycle(&graph));
}

#[test]
fn test_self_loop_and_undirected_edges_are_cycles() {
    let (looped, v) = build::<AdjacencyList<_>>(&["A"], &[(0, 0)], EdgeType::Directed);
    assert!(has_cycle(&looped, &v[0]));

    let (pair, w) = build::<AdjacencyList<_>>(&["A", "B"], &[(0, 1)], EdgeType::Undirected);
    assert!(has_cycle(&pair, &w[0]));
}

#[test]
fn test_is_disconnected() {
    let (empty, _) = build::<AdjacencyList<_>>(&[], &[], EdgeType::Directed);
    assert!(!is_disconnected(&empty));

    let (single, _) = build::<AdjacencyMatrix<_>>(&["A"], &[], EdgeType::Directed);
    assert!(!is_disconnected(&single));

    let (map, _) = build::<AdjacencyList<_>>(&MAP_NAMES, &MAP_EDGES, EdgeType::Undirected);
    assert!(!is_disconnected(&map));

    let (split, _) = build::<AdjacencyList<_>>(&["A", "B", "C", "D"], &[(0, 1), (2, 3)], EdgeType::Undirected);
    assert!(is_disconnected(&split));
}

#[test]
fn test_is_disconnected_follows_direction() {
    // Everything is reachable from A, but not the other way round.
    let (graph, _) = build::<AdjacencyList<_>>(&["A", "B", "C"], &[(0, 1), (0, 2)], EdgeType::Directed);
    assert!(!is_disconnected(&graph));

    let (reversed, _) = build::<AdjacencyList<_>>(&["A", "B", "C"], &[(1, 0), (2, 0)], EdgeType::Directed);
    assert!(is_disconnected(&reversed));
}

#[test]
fn test_foreign_source_has_no_successors() {
    let (graph, _) = build::<AdjacencyList<_>>(&DAG_NAMES, &DAG_EDGES, EdgeType::Directed);
    let (_, strangers) = build::<AdjacencyList<_>>(&["X"], &[], EdgeType::Directed);
    let order = breadth_first_search(&graph, &strangers[0]);
    assert_eq!(labels(&order), vec!["X"]);
    assert!(!has_cycle(&graph, &strangers[0]));
}

#[cfg(target_pointer_width = "64")]
fn check_out_of_range_source<G>()
where
    G: Graph<Element = Label> + Default,
{
    let (graph, v) = build::<G>(&DAG_NAMES, &DAG_EDGES, EdgeType::Directed);
    for json in [
        r#"{"index":18446744073709551615,"data":"X"}"#,
        r#"{"index":1099511627776,"data":"X"}"#,
        r#"{"index":5,"data":"X"}"#,
    ] {
        let stranger: Vertex<Label> = serde_json::from_str(json).expect("vertex json");
        assert!(!graph.contains_vertex(&stranger));
        assert!(graph.edges(&stranger).is_empty());

        let alone = vec![stranger.clone()];
        assert_eq!(breadth_first_search(&graph, &stranger), alone);
        assert_eq!(breadth_first_max_queue_len(&graph, &stranger), 1);
        assert_eq!(depth_first_search(&graph, &stranger), alone);
        assert_eq!(depth_first_search_recursive(&graph, &stranger), alone);
        assert_eq!(number_of_paths(&graph, &stranger, &v[4]), 0);
        assert_eq!(number_of_paths(&graph, &v[0], &stranger), 0);
        assert_eq!(number_of_paths(&graph, &stranger, &stranger), 1);
        assert!(!has_cycle(&graph, &stranger));
    }
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_out_of_range_source_is_isolated() {
    check_out_of_range_source::<AdjacencyList<_>>();
    check_out_of_range_source::<AdjacencyMatrix<_>>();
}

#[test]
fn test_traversal_methods_delegate() {
    let (graph, v) = build::<AdjacencyList<_>>(&DAG_NAMES, &DAG_EDGES, EdgeType::Directed);
    assert_eq!(graph.depth_first_search(&v[0]), depth_first_search(&graph, &v[0]));
    assert_eq!(graph.number_of_paths(&v[0], &v[4]), 5);
    assert!(!graph.has_any_cycle());
    assert!(!Traversal::is_disconnected(&graph));
}
