//! Eigenvalue spectra in canonical (ascending) order.
//!
//! Symmetric matrices go through smartcore's tridiagonal QL solver. Anything
//! else goes through a real Schur decomposition (nalgebra), which yields complex
//! conjugate pairs from its 2x2 blocks. Only real parts are kept; the general
//! path can optionally reject eigenvalues whose imaginary part is not negligible.

use std::fmt;

use nalgebra::{DMatrix, DVector, Schur};
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linalg::traits::evd::EVDDecomposable;

use log::{debug, trace, warn};

use crate::error::{Result, SpectralError};

/// Francis steps allowed per row before a Schur attempt is abandoned.
const SCHUR_STEPS_PER_ROW: usize = 30;

/// Sorted (ascending) real eigenvalues of a matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spectrum(Vec<f64>);

impl Spectrum {
    /// Canonicalise arbitrary eigenvalue output.
    pub fn from_unsorted(mut values: Vec<f64>) -> Self {
        values.sort_by(|a, b| a.total_cmp(b));
        Spectrum(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    pub fn min(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.0.last().copied()
    }
}

impl fmt::Display for Spectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", v)?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SpectrumParams {
    /// Max `|m_ij - m_ji|` for a matrix to be treated as symmetric.
    pub symmetry_tolerance: f64,
    /// Max `|imag|` accepted on the general solver path; `None` discards
    /// imaginary parts without looking at them.
    pub max_imaginary: Option<f64>,
}

impl Default for SpectrumParams {
    fn default() -> Self {
        Self { symmetry_tolerance: 1e-12, max_imaginary: Some(1e-6) }
    }
}

// Custom PartialEq implementation using approximate equality for floats
impl PartialEq for SpectrumParams {
    fn eq(&self, other: &Self) -> bool {
        approx::relative_eq!(self.symmetry_tolerance, other.symmetry_tolerance)
            && match (self.max_imaginary, other.max_imaginary) {
                (None, None) => true,
                (Some(a), Some(b)) => approx::relative_eq!(a, b),
                _ => false,
            }
    }
}

/// Compute the canonical spectrum of a square matrix.
///
/// # Errors
///
/// * [`SpectralError::Shape`] if the matrix is not square
/// * [`SpectralError::NonConvergence`] on non-finite entries or solver failure
/// * [`SpectralError::NumericalInstability`] if an imaginary part exceeds
///   `params.max_imaginary`
pub fn spectrum(matrix: &DenseMatrix<f64>, params: &SpectrumParams) -> Result<Spectrum> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(SpectralError::Shape { rows, cols });
    }
    let n = rows;
    if n == 0 {
        return Ok(Spectrum::default());
    }

    for i in 0..n {
        for j in 0..n {
            let value = *matrix.get((i, j));
            if !value.is_finite() {
                return Err(non_convergence(format!(
                    "non-finite entry {} at ({}, {})",
                    value, i, j
                )));
            }
        }
    }

    if n == 1 {
        return Ok(Spectrum(vec![*matrix.get((0, 0))]));
    }

    let symmetric = is_symmetric(matrix, params.symmetry_tolerance);
    trace!("Eigendecomposition of {}x{} matrix, symmetric={}", n, n, symmetric);

    let spectrum = if symmetric {
        let evd = matrix
            .evd(true)
            .map_err(|failed| non_convergence(failed.to_string()))?;
        Spectrum::from_unsorted(evd.d)
    } else {
        general_spectrum(matrix, n, params)?
    };

    if spectrum.iter().any(|v| !v.is_finite()) {
        return Err(non_convergence("solver returned non-finite eigenvalues".to_string()));
    }
    debug!("Spectrum: {}", spectrum);
    Ok(spectrum)
}

/// Real parts of the eigenvalues of an asymmetric matrix, ascending.
///
/// `NumericalInstability::index` refers to this ascending order.
fn general_spectrum(
    matrix: &DenseMatrix<f64>,
    n: usize,
    params: &SpectrumParams,
) -> Result<Spectrum> {
    let mut eigenvalues = schur_eigenvalues(matrix, n)?;
    eigenvalues.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (index, worst) = eigenvalues
        .iter()
        .enumerate()
        .map(|(i, (_, im))| (i, im.abs()))
        .fold((0usize, 0.0f64), |acc, x| if x.1 > acc.1 { x } else { acc });
    match params.max_imaginary {
        Some(tolerance) if worst > tolerance => {
            let (real, imaginary) = eigenvalues[index];
            return Err(SpectralError::NumericalInstability {
                index,
                real,
                imaginary,
                tolerance,
            });
        }
        None if worst > 0.0 => {
            warn!("Discarding imaginary parts up to {:e}", worst);
        }
        _ => {}
    }

    Ok(Spectrum(eigenvalues.into_iter().map(|(re, _)| re).collect()))
}

/// `(re, im)` pairs in solver order.
fn schur_eigenvalues(matrix: &DenseMatrix<f64>, n: usize) -> Result<Vec<(f64, f64)>> {
    let a = DMatrix::from_fn(n, n, |i, j| *matrix.get((i, j)));
    let max_steps = SCHUR_STEPS_PER_ROW * n;

    let schur = match Schur::try_new(a.clone(), f64::EPSILON, max_steps) {
        Some(schur) => schur,
        None => {
            // Francis shifts stall on cyclic permutations. A reflection keeps the
            // eigenvalues but changes the Hessenberg form the iteration starts from.
            debug!("Schur iteration stalled after {} steps, retrying on reflected matrix", max_steps);
            let q = reflector(n);
            Schur::try_new(&q * a * &q, f64::EPSILON, max_steps).ok_or_else(|| {
                non_convergence(format!(
                    "Schur iteration did not converge in {} steps",
                    max_steps
                ))
            })?
        }
    };

    Ok(schur
        .complex_eigenvalues()
        .iter()
        .map(|c| (c.re, c.im))
        .collect())
}

/// Householder reflector `I - 2 v vᵀ / vᵀv` with `v = (1, 2, .., n)`; symmetric and
/// its own inverse.
fn reflector(n: usize) -> DMatrix<f64> {
    let v = DVector::from_fn(n, |i, _| (i + 1) as f64);
    let scale = 2.0 / v.norm_squared();
    DMatrix::identity(n, n) - (&v * v.transpose()) * scale
}

/// Spectrum of an optional matrix; a missing matrix has the empty spectrum.
pub fn optional_spectrum(
    matrix: Option<&DenseMatrix<f64>>,
    params: &SpectrumParams,
) -> Result<Spectrum> {
    match matrix {
        Some(m) => spectrum(m, params),
        None => Ok(Spectrum::default()),
    }
}

fn is_symmetric(matrix: &DenseMatrix<f64>, epsilon: f64) -> bool {
    let n = matrix.shape().0;
    (0..n).all(|i| {
        (i + 1..n).all(|j| {
            approx::abs_diff_eq!(*matrix.get((i, j)), *matrix.get((j, i)), epsilon = epsilon)
        })
    })
}

fn non_convergence(reason: String) -> SpectralError {
    SpectralError::NonConvergence { representation: "matrix".to_string(), reason }
}
