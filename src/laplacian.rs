//! # Derived matrix representations of a graph
//!
//! ## Representations
//!
//! Given an adjacency matrix `A` and its degree diagonal `D = diag(rowSums(A))`:
//!
//! 1. **Laplacian**: `L = D - A`
//! 2. **Signless Laplacian**: `Q = D + A`
//! 3. **Normalised Laplacian**: `N = S (D - A) S` with `S = diag(s)`,
//!    `s_i = 1/sqrt(d_i)` for `d_i > 0` and `s_i = 0` for isolated vertices
//! 4. **Line-graph adjacency**: adjacency of the graph whose vertices are the
//!    edges of `A`, adjacent when they share an endpoint
//!
//! Isolated vertices give an all-zero row and column in `N`; no NaN or infinity
//! is ever produced. All outputs are freshly allocated dense matrices.

use smartcore::linalg::basic::arrays::{Array, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use log::{debug, info, trace};

use crate::adjacency::AdjacencyMatrix;
use crate::graph::Graph;

/// The four representations derived from one adjacency matrix.
#[derive(Debug, Clone)]
pub struct DerivedMatrices {
    pub laplacian: DenseMatrix<f64>,
    pub normalized_laplacian: DenseMatrix<f64>,
    pub signless_laplacian: DenseMatrix<f64>,
    /// `None` when the graph has no edges (the line graph has no vertices).
    pub line_graph: Option<DenseMatrix<f64>>,
}

/// Build every derived representation of `adjacency`.
///
/// # Examples
///
/// ```
/// use cospectra::adjacency::AdjacencyMatrix;
/// use cospectra::laplacian::derive;
/// use smartcore::linalg::basic::arrays::Array;
///
/// // path on three vertices
/// let a = AdjacencyMatrix::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// let derived = derive(&a);
/// assert_eq!(*derived.laplacian.get((1, 1)), 2.0);
/// assert_eq!(*derived.signless_laplacian.get((0, 1)), 1.0);
/// assert_eq!(derived.line_graph.unwrap().shape(), (2, 2));
/// ```
pub fn derive(adjacency: &AdjacencyMatrix) -> DerivedMatrices {
    let n = adjacency.order();
    info!("Deriving matrix representations for graph of order {}", n);

    let degrees = adjacency.degrees();
    debug!("Degree diagonal: {:?}", degrees);

    let derived = DerivedMatrices {
        laplacian: degree_combination(adjacency, &degrees, -1.0),
        normalized_laplacian: normalized_laplacian_with(adjacency, &degrees),
        signless_laplacian: degree_combination(adjacency, &degrees, 1.0),
        line_graph: line_graph_adjacency(adjacency),
    };

    debug!(
        "Derived representations: line graph {}",
        match &derived.line_graph {
            Some(m) => format!("{}x{}", m.shape().0, m.shape().1),
            None => "empty".to_string(),
        }
    );
    derived
}

/// `L = D - A`
pub fn laplacian(adjacency: &AdjacencyMatrix) -> DenseMatrix<f64> {
    degree_combination(adjacency, &adjacency.degrees(), -1.0)
}

/// `Q = D + A`
pub fn signless_laplacian(adjacency: &AdjacencyMatrix) -> DenseMatrix<f64> {
    degree_combination(adjacency, &adjacency.degrees(), 1.0)
}

/// `N = D^-1/2 (D - A) D^-1/2`, zero-degree vertices scaled by 0.
pub fn normalized_laplacian(adjacency: &AdjacencyMatrix) -> DenseMatrix<f64> {
    normalized_laplacian_with(adjacency, &adjacency.degrees())
}

/// Adjacency of the line graph, `None` for an edgeless graph.
///
/// Vertex `k` of the result is the `k`-th edge in [`Graph::edges`] order.
pub fn line_graph_adjacency(adjacency: &AdjacencyMatrix) -> Option<DenseMatrix<f64>> {
    Graph::from_adjacency(adjacency)
        .line_graph()
        .to_adjacency()
        .map(|a| a.as_dense().clone())
}

/// `diag(degrees) + sign * A`
fn degree_combination(adjacency: &AdjacencyMatrix, degrees: &[f64], sign: f64) -> DenseMatrix<f64> {
    let n = adjacency.order();
    let mut out = DenseMatrix::<f64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let mut value = sign * adjacency.get(i, j);
            if i == j {
                value += degrees[i];
            }
            out.set((i, j), value);
        }
    }
    trace!("Built D {} A for order {}", if sign < 0.0 { "-" } else { "+" }, n);
    out
}

fn normalized_laplacian_with(adjacency: &AdjacencyMatrix, degrees: &[f64]) -> DenseMatrix<f64> {
    let n = adjacency.order();
    let scale: Vec<f64> = degrees
        .iter()
        .map(|&d| if d > 0.0 { 1.0 / d.sqrt() } else { 0.0 })
        .collect();

    let isolated = scale.iter().filter(|&&s| s == 0.0).count();
    if isolated > 0 {
        debug!("{} isolated vertices get a zero row and column", isolated);
    }

    let lap = degree_combination(adjacency, degrees, -1.0);
    let mut out = DenseMatrix::<f64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            out.set((i, j), scale[i] * *lap.get((i, j)) * scale[j]);
        }
    }
    out
}
