//! # cospectra
//!
//! Spectral comparison of small graphs. For a pair of adjacency matrices the
//! crate computes the eigenvalue spectra of five representations (adjacency,
//! Laplacian, normalised Laplacian, signless Laplacian, line-graph adjacency)
//! and reports, per representation, whether the two graphs are cospectral.
//!
//! Cospectrality is necessary but not sufficient for isomorphism: a
//! `Distinct` verdict proves the graphs differ, a `Cospectral` verdict proves
//! nothing.
//!
//! ```
//! use cospectra::catalog::saltire_pair;
//! use cospectra::report::{compare, Locale, Representation};
//!
//! let pair = saltire_pair();
//! let report = compare(&pair.left, &pair.right).unwrap();
//! assert!(report.is_cospectral(Representation::Adjacency));
//! assert!(!report.is_cospectral(Representation::Laplacian));
//! println!("{}", report.render(Locale::Italian));
//! ```

pub mod adjacency;
pub mod builder;
pub mod catalog;
pub mod cospectral;
pub mod error;
pub mod graph;
pub mod laplacian;
pub mod layout;
pub mod report;
pub mod spectrum;

pub use adjacency::{AdjacencyMatrix, IntoAdjacency};
pub use builder::{ComparatorBuilder, ErrorPolicy};
pub use error::{Result, SpectralError};
pub use report::{compare, PairReport, Representation, SpectralComparator, Verdict};

#[cfg(test)]
mod tests;
