mod test_graph;
mod test_layout;
mod test_spectrum;

use crate::adjacency::AdjacencyMatrix;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `K1,4` as written in the literal adjacency form.
pub fn saltire_1() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 1.0, 1.0, 1.0, 1.0],
        vec![1.0, 0.0, 0.0, 0.0, 0.0],
        vec![1.0, 0.0, 0.0, 0.0, 0.0],
        vec![1.0, 0.0, 0.0, 0.0, 0.0],
        vec![1.0, 0.0, 0.0, 0.0, 0.0],
    ]
}

/// `C4 ∪ K1`, isolated vertex in the middle.
pub fn saltire_2() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 1.0, 0.0, 0.0, 1.0],
        vec![1.0, 0.0, 0.0, 1.0, 0.0],
        vec![0.0, 0.0, 0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0, 0.0, 1.0],
        vec![1.0, 0.0, 0.0, 1.0, 0.0],
    ]
}

/// `K3 ∪ K1`
pub fn triangle_plus_isolated() -> AdjacencyMatrix {
    AdjacencyMatrix::from_edges(4, &[(0, 1), (1, 2), (0, 2)]).unwrap()
}

/// `K1,3`
pub fn star_k13() -> AdjacencyMatrix {
    AdjacencyMatrix::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap()
}
