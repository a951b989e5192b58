//! Small named graph pairs with known spectral behaviour.

use crate::graph::Graph;
use crate::layout::RenderRequest;

#[derive(Debug, Clone)]
pub struct NamedPair {
    pub name: &'static str,
    pub left: Graph,
    pub right: Graph,
}

impl NamedPair {
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest::new(self.left.clone(), self.right.clone(), "G1", "G2")
    }
}

/// Star `K1,4` against `C4 ∪ K1`. Adjacency spectrum of both is `{-2, 0, 0, 0, 2}`,
/// yet one is connected and the other is not.
pub fn saltire_pair() -> NamedPair {
    NamedPair {
        name: "Saltire pair",
        left: Graph::star(4),
        right: Graph::cycle(4).disjoint_union(&Graph::new(1)),
    }
}

/// `K3 ∪ K1` against `K1,3`: same signless Laplacian and line graph, different adjacency.
pub fn triangle_and_star() -> NamedPair {
    NamedPair {
        name: "Triangle + isolated vertex vs star K1,3",
        left: Graph::complete(3).disjoint_union(&Graph::new(1)),
        right: Graph::star(3),
    }
}

/// `P4` and a relabelling of it; isomorphic, so cospectral everywhere.
pub fn relabelled_path() -> NamedPair {
    NamedPair {
        name: "Path P4 vs relabelled P4",
        left: Graph::path(4),
        right: Graph::path(4).relabelled(&[2, 0, 3, 1]),
    }
}

pub fn all_pairs() -> Vec<NamedPair> {
    vec![saltire_pair(), triangle_and_star(), relabelled_path()]
}
