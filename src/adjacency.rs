//! Validated adjacency input and the coercion boundary.
//!
//! Every entry point of the crate accepts anything implementing [`IntoAdjacency`]:
//! nested row vectors, smartcore dense matrices, [`crate::graph::Graph`] values or an
//! already validated [`AdjacencyMatrix`]. Validation happens once, here.

use smartcore::linalg::basic::arrays::{Array, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use log::{debug, trace, warn};

use crate::error::{Result, SpectralError};

/// Square matrix of finite reals, indexed `0..n`.
///
/// Nonzero entries are edge indicators (or weights). Symmetry is expected for
/// undirected graphs but not enforced; see [`crate::spectrum`] for how asymmetric
/// input is handled downstream.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    matrix: DenseMatrix<f64>,
    n: usize,
}

impl AdjacencyMatrix {
    /// Build from row-major nested vectors.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(SpectralError::Empty);
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != n) {
            return Err(SpectralError::Shape { rows: n, cols: bad.len() });
        }

        let mut matrix = DenseMatrix::<f64>::zeros(n, n);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                matrix.set((i, j), value);
            }
        }
        Self::validated(matrix, n)
    }

    /// Wrap an existing smartcore matrix after checking shape and entries.
    pub fn from_dense(matrix: DenseMatrix<f64>) -> Result<Self> {
        let (rows, cols) = matrix.shape();
        if rows == 0 || cols == 0 {
            return Err(SpectralError::Empty);
        }
        if rows != cols {
            return Err(SpectralError::Shape { rows, cols });
        }
        Self::validated(matrix, rows)
    }

    /// Unweighted undirected adjacency from an edge list. Self-loops are dropped.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        if n == 0 {
            return Err(SpectralError::Empty);
        }
        for &(u, v) in edges {
            let vertex = u.max(v);
            if vertex >= n {
                return Err(SpectralError::VertexOutOfRange { vertex, order: n });
            }
        }
        Ok(Self::from_valid_edges(n, edges))
    }

    /// Edge list already checked against `n`.
    pub(crate) fn from_valid_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut matrix = DenseMatrix::<f64>::zeros(n, n);
        for &(u, v) in edges {
            if u != v {
                matrix.set((u, v), 1.0);
                matrix.set((v, u), 1.0);
            }
        }
        Self { matrix, n }
    }

    fn validated(matrix: DenseMatrix<f64>, n: usize) -> Result<Self> {
        let mut negative = 0usize;
        let mut loops = 0usize;
        for i in 0..n {
            for j in 0..n {
                let value = *matrix.get((i, j));
                if !value.is_finite() {
                    return Err(SpectralError::InvalidEntry { row: i, col: j, value });
                }
                if value < 0.0 {
                    negative += 1;
                }
                if i == j && value != 0.0 {
                    loops += 1;
                }
            }
        }
        if negative > 0 {
            warn!("Adjacency matrix has {} negative entries; treating them as weights", negative);
        }
        if loops > 0 {
            debug!("Adjacency matrix has {} nonzero diagonal entries", loops);
        }
        trace!("Validated {}x{} adjacency matrix", n, n);
        Ok(Self { matrix, n })
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        *self.matrix.get((i, j))
    }

    pub fn as_dense(&self) -> &DenseMatrix<f64> {
        &self.matrix
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.n)
            .map(|i| (0..self.n).map(|j| self.get(i, j)).collect())
            .collect()
    }

    /// Row sums, i.e. the diagonal of the degree matrix.
    pub fn degrees(&self) -> Vec<f64> {
        (0..self.n)
            .map(|i| (0..self.n).map(|j| self.get(i, j)).sum())
            .collect()
    }

    pub fn is_symmetric(&self, epsilon: f64) -> bool {
        (0..self.n).all(|i| {
            (i + 1..self.n)
                .all(|j| approx::abs_diff_eq!(self.get(i, j), self.get(j, i), epsilon = epsilon))
        })
    }

    /// Relabel vertices: entry `(i, j)` of the result is entry `(perm[i], perm[j])`
    /// of `self`, i.e. `PᵀAP` for the permutation matrix of `perm`.
    ///
    /// # Panics
    /// If `perm` is not a permutation of `0..n`.
    pub fn permuted(&self, perm: &[usize]) -> Self {
        assert_eq!(perm.len(), self.n, "permutation length must match matrix order");
        let mut seen = vec![false; self.n];
        for &p in perm {
            assert!(p < self.n && !seen[p], "not a permutation: {:?}", perm);
            seen[p] = true;
        }

        let mut matrix = DenseMatrix::<f64>::zeros(self.n, self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                matrix.set((i, j), self.get(perm[i], perm[j]));
            }
        }
        Self { matrix, n: self.n }
    }
}

impl PartialEq for AdjacencyMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n
            && (0..self.n).all(|i| (0..self.n).all(|j| self.get(i, j) == other.get(i, j)))
    }
}

/// Normalises the different ways a caller can hand over a graph.
pub trait IntoAdjacency {
    fn into_adjacency(self) -> Result<AdjacencyMatrix>;
}

impl IntoAdjacency for AdjacencyMatrix {
    fn into_adjacency(self) -> Result<AdjacencyMatrix> {
        Ok(self)
    }
}

impl IntoAdjacency for &AdjacencyMatrix {
    fn into_adjacency(self) -> Result<AdjacencyMatrix> {
        Ok(self.clone())
    }
}

impl IntoAdjacency for DenseMatrix<f64> {
    fn into_adjacency(self) -> Result<AdjacencyMatrix> {
        AdjacencyMatrix::from_dense(self)
    }
}

impl IntoAdjacency for &DenseMatrix<f64> {
    fn into_adjacency(self) -> Result<AdjacencyMatrix> {
        AdjacencyMatrix::from_dense(self.clone())
    }
}

impl IntoAdjacency for Vec<Vec<f64>> {
    fn into_adjacency(self) -> Result<AdjacencyMatrix> {
        AdjacencyMatrix::from_rows(&self)
    }
}

impl IntoAdjacency for &Vec<Vec<f64>> {
    fn into_adjacency(self) -> Result<AdjacencyMatrix> {
        AdjacencyMatrix::from_rows(self)
    }
}

impl IntoAdjacency for &[Vec<f64>] {
    fn into_adjacency(self) -> Result<AdjacencyMatrix> {
        AdjacencyMatrix::from_rows(self)
    }
}
