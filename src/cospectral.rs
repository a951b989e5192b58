//! Tolerance-based spectrum equality.
//!
//! `true` only says the two matrices share a spectrum; non-isomorphic graphs
//! can be cospectral. `false` proves the graphs differ.

use serde::{Deserialize, Serialize};

use log::trace;

use crate::error::{Result, SpectralError};
use crate::spectrum::Spectrum;

/// Element-wise closeness `|a - b| <= atol + rtol * |b|`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tolerance {
    pub atol: f64,
    pub rtol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { atol: 1e-8, rtol: 1e-5 }
    }
}

impl PartialEq for Tolerance {
    fn eq(&self, other: &Self) -> bool {
        approx::relative_eq!(self.atol, other.atol) && approx::relative_eq!(self.rtol, other.rtol)
    }
}

impl Tolerance {
    /// Fails with [`SpectralError::InvalidTolerance`] on negative or NaN values.
    pub fn new(atol: f64, rtol: f64) -> Result<Self> {
        if !(atol >= 0.0 && rtol >= 0.0) {
            return Err(SpectralError::InvalidTolerance { atol, rtol });
        }
        Ok(Self { atol, rtol })
    }

    /// Asymmetric in `b`, which scales the relative term.
    #[inline]
    pub fn close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }
}

/// Whether two canonical spectra are equal within `tolerance`.
///
/// Different lengths are never cospectral.
pub fn is_cospectral(s1: &Spectrum, s2: &Spectrum, tolerance: &Tolerance) -> bool {
    if s1.len() != s2.len() {
        trace!("Spectrum lengths differ: {} vs {}", s1.len(), s2.len());
        return false;
    }
    s1.iter().zip(s2.iter()).all(|(&a, &b)| tolerance.close(a, b))
}

/// Largest element-wise gap, `None` on length mismatch.
pub fn max_deviation(s1: &Spectrum, s2: &Spectrum) -> Option<f64> {
    if s1.len() != s2.len() {
        return None;
    }
    Some(
        s1.iter()
            .zip(s2.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max),
    )
}
