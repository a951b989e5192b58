use std::fmt;

use log::{debug, trace};

use crate::adjacency::{AdjacencyMatrix, IntoAdjacency};
use crate::error::{Result, SpectralError};

/// Simple undirected graph: vertices `0..order`, edges stored once as `(u, v)` with `u < v`.
///
/// This is the graph-construction side of the crate. The spectral engine only
/// needs it for the line graph, but conversion works both ways so callers can
/// build inputs from edge lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    order: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Edgeless graph on `order` vertices.
    pub fn new(order: usize) -> Self {
        Self { order, edges: Vec::new() }
    }

    /// Edges are normalised to `(min, max)`, deduplicated and sorted. Loops are dropped.
    pub fn from_edges(order: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut normalised = Vec::with_capacity(edges.len());
        for &(u, v) in edges {
            let vertex = u.max(v);
            if vertex >= order {
                return Err(SpectralError::VertexOutOfRange { vertex, order });
            }
            if u != v {
                normalised.push((u.min(v), u.max(v)));
            }
        }
        normalised.sort_unstable();
        normalised.dedup();
        Ok(Self { order, edges: normalised })
    }

    /// Star `K1,leaves`: vertex 0 joined to `1..=leaves`.
    pub fn star(leaves: usize) -> Self {
        Self { order: leaves + 1, edges: (1..=leaves).map(|v| (0, v)).collect() }
    }

    /// Path on `order` vertices.
    pub fn path(order: usize) -> Self {
        Self { order, edges: (1..order).map(|v| (v - 1, v)).collect() }
    }

    /// Cycle on `order` vertices; fewer than three vertices gives a path.
    pub fn cycle(order: usize) -> Self {
        let mut g = Self::path(order);
        if order >= 3 {
            g.edges.push((0, order - 1));
            g.edges.sort_unstable();
        }
        g
    }

    pub fn complete(order: usize) -> Self {
        let mut edges = Vec::with_capacity(order * order.saturating_sub(1) / 2);
        for u in 0..order {
            for v in (u + 1)..order {
                edges.push((u, v));
            }
        }
        Self { order, edges }
    }

    /// `other`'s vertices are shifted by `self.order()`.
    pub fn disjoint_union(&self, other: &Graph) -> Graph {
        let shift = self.order;
        let mut edges = self.edges.clone();
        edges.extend(other.edges.iter().map(|&(u, v)| (u + shift, v + shift)));
        Graph { order: self.order + other.order, edges }
    }

    /// Vertex `v` of `self` becomes vertex `perm[v]`.
    ///
    /// # Panics
    /// If `perm` is not a permutation of `0..order`.
    pub fn relabelled(&self, perm: &[usize]) -> Graph {
        assert_eq!(perm.len(), self.order, "permutation length must match graph order");
        let mut seen = vec![false; self.order];
        for &p in perm {
            assert!(p < self.order && !seen[p], "not a permutation: {:?}", perm);
            seen[p] = true;
        }
        let mut edges: Vec<(usize, usize)> = self
            .edges
            .iter()
            .map(|&(u, v)| (perm[u].min(perm[v]), perm[u].max(perm[v])))
            .collect();
        edges.sort_unstable();
        Graph { order: self.order, edges }
    }

    /// Any nonzero entry, in either triangle, is an edge.
    pub fn from_adjacency(adjacency: &AdjacencyMatrix) -> Self {
        let n = adjacency.order();
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if adjacency.get(i, j) != 0.0 || adjacency.get(j, i) != 0.0 {
                    edges.push((i, j));
                }
            }
        }
        trace!("Graph from {}x{} adjacency: {} edges", n, n, edges.len());
        Self { order: n, edges }
    }

    /// Unweighted adjacency matrix, `None` for the graph with no vertices.
    pub fn to_adjacency(&self) -> Option<AdjacencyMatrix> {
        if self.order == 0 {
            return None;
        }
        Some(AdjacencyMatrix::from_valid_edges(self.order, &self.edges))
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn neighbours(&self, v: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .edges
            .iter()
            .filter_map(|&(a, b)| {
                if a == v {
                    Some(b)
                } else if b == v {
                    Some(a)
                } else {
                    None
                }
            })
            .collect();
        out.sort_unstable();
        out
    }

    pub fn degree(&self, v: usize) -> usize {
        self.edges.iter().filter(|&&(a, b)| a == v || b == v).count()
    }

    /// Degrees in non-increasing order.
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = (0..self.order).map(|v| self.degree(v)).collect();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        degrees
    }

    /// Line graph: vertex `k` is edge `edges()[k]`, two vertices are adjacent
    /// when their edges share an endpoint.
    pub fn line_graph(&self) -> Graph {
        let m = self.edges.len();
        let mut edges = Vec::new();
        for a in 0..m {
            let (u1, v1) = self.edges[a];
            for b in (a + 1)..m {
                let (u2, v2) = self.edges[b];
                if u1 == u2 || u1 == v2 || v1 == u2 || v1 == v2 {
                    edges.push((a, b));
                }
            }
        }
        debug!(
            "Line graph of ({} vertices, {} edges): {} vertices, {} edges",
            self.order,
            m,
            m,
            edges.len()
        );
        Graph { order: m, edges }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph ({} vertices, {} edges): [", self.order, self.edges.len())?;
        for (k, (u, v)) in self.edges.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}-{}", u, v)?;
        }
        write!(f, "]")
    }
}

impl IntoAdjacency for Graph {
    fn into_adjacency(self) -> Result<AdjacencyMatrix> {
        (&self).into_adjacency()
    }
}

impl IntoAdjacency for &Graph {
    fn into_adjacency(self) -> Result<AdjacencyMatrix> {
        self.to_adjacency().ok_or(SpectralError::Empty)
    }
}
