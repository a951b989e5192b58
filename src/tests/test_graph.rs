use crate::adjacency::AdjacencyMatrix;
use crate::error::SpectralError;
use crate::graph::Graph;

use crate::tests::{init, saltire_2};

#[test]
fn test_from_edges_normalises() {
    let g = Graph::from_edges(4, &[(2, 0), (0, 2), (1, 1), (3, 1)]).unwrap();
    assert_eq!(g.edges(), &[(0, 2), (1, 3)]);
    assert_eq!(g.size(), 2);
    assert!(matches!(
        Graph::from_edges(2, &[(0, 5)]),
        Err(SpectralError::VertexOutOfRange { vertex: 5, order: 2 })
    ));
}

#[test]
fn test_from_adjacency_counts_undirected_edges_once() {
    init();
    let a = AdjacencyMatrix::from_rows(&saltire_2()).unwrap();
    let g = Graph::from_adjacency(&a);
    assert_eq!(g.order(), 5);
    assert_eq!(g.edges(), &[(0, 1), (0, 4), (1, 3), (3, 4)]);
    assert_eq!(g.degree(2), 0);
    assert_eq!(g.to_adjacency().unwrap(), a);
}

#[test]
fn test_one_sided_entry_is_an_edge() {
    let a = AdjacencyMatrix::from_rows(&[vec![0.0, 0.0], vec![0.5, 0.0]]).unwrap();
    assert_eq!(Graph::from_adjacency(&a).edges(), &[(0, 1)]);
}

#[test]
fn test_generators() {
    assert_eq!(Graph::star(3).degree_sequence(), vec![3, 1, 1, 1]);
    assert_eq!(Graph::path(4).edges(), &[(0, 1), (1, 2), (2, 3)]);
    assert_eq!(Graph::cycle(4).degree_sequence(), vec![2, 2, 2, 2]);
    assert_eq!(Graph::cycle(2).size(), 1);
    assert_eq!(Graph::complete(4).size(), 6);

    let u = Graph::complete(3).disjoint_union(&Graph::new(1));
    assert_eq!(u.order(), 4);
    assert_eq!(u.degree_sequence(), vec![2, 2, 2, 0]);
    assert_eq!(u.neighbours(3), Vec::<usize>::new());
    assert_eq!(u.neighbours(1), vec![0, 2]);
}

#[test]
fn test_relabelled_preserves_degree_sequence() {
    let g = Graph::star(3);
    let r = g.relabelled(&[3, 2, 1, 0]);
    assert_eq!(r.neighbours(3), vec![0, 1, 2]);
    assert_eq!(r.degree_sequence(), g.degree_sequence());
}

#[test]
fn test_line_graph_of_star_is_complete() {
    init();
    let lg = Graph::star(4).line_graph();
    assert_eq!(lg.order(), 4);
    assert_eq!(lg.size(), 6);
    assert_eq!(lg, Graph::complete(4));
}

#[test]
fn test_line_graph_of_cycle_is_cycle() {
    let lg = Graph::cycle(5).line_graph();
    assert_eq!(lg.order(), 5);
    assert_eq!(lg.degree_sequence(), vec![2; 5]);
}

#[test]
fn test_line_graph_of_path() {
    // P4 has three edges in a row
    let lg = Graph::path(4).line_graph();
    assert_eq!(lg.edges(), &[(0, 1), (1, 2)]);
}

#[test]
fn test_line_graph_of_edgeless_graph_is_empty() {
    let lg = Graph::new(3).line_graph();
    assert_eq!(lg.order(), 0);
    assert!(lg.to_adjacency().is_none());
}

#[test]
fn test_display() {
    assert_eq!(Graph::path(3).to_string(), "Graph (3 vertices, 2 edges): [0-1, 1-2]");
}
