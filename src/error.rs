//! Error types for matrix derivation, spectrum computation and report output.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpectralError>;

#[derive(Debug, Error)]
pub enum SpectralError {
    #[error("matrix must be square, got {rows}x{cols}")]
    Shape { rows: usize, cols: usize },

    #[error("matrix has no rows")]
    Empty,

    #[error("adjacency entry ({row}, {col}) is not finite: {value}")]
    InvalidEntry { row: usize, col: usize, value: f64 },

    #[error("vertex {vertex} out of range for graph of order {order}")]
    VertexOutOfRange { vertex: usize, order: usize },

    #[error("eigendecomposition did not converge for {representation}: {reason}")]
    NonConvergence {
        representation: String,
        reason: String,
    },

    /// `index` is the position in the ascending spectrum.
    #[error(
        "eigenvalue {index} ({real} {imaginary:+e}i) has imaginary part above tolerance {tolerance:e}"
    )]
    NumericalInstability {
        index: usize,
        real: f64,
        imaginary: f64,
        tolerance: f64,
    },

    #[error("tolerances must be non-negative: atol={atol}, rtol={rtol}")]
    InvalidTolerance { atol: f64, rtol: f64 },

    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SpectralError {
    /// Attach a representation name to errors raised below the reporter.
    pub(crate) fn for_representation(self, name: &str) -> Self {
        match self {
            SpectralError::NonConvergence { reason, .. } => SpectralError::NonConvergence {
                representation: name.to_string(),
                reason,
            },
            other => other,
        }
    }
}
