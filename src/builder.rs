use serde::{Deserialize, Serialize};

use crate::cospectral::Tolerance;
use crate::error::Result;
use crate::report::SpectralComparator;
use crate::spectrum::SpectrumParams;

// Add logging
use log::{debug, info};

/// What to do when one representation cannot be computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Fail the whole comparison with the first error.
    #[default]
    Strict,
    /// Report the representation as unavailable and keep going.
    Lenient,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonParams {
    pub tolerance: Tolerance,
    pub spectrum: SpectrumParams,
    pub policy: ErrorPolicy,
    pub parallel: bool,
}

impl Default for ComparisonParams {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            spectrum: SpectrumParams::default(),
            policy: ErrorPolicy::Strict,
            parallel: false,
        }
    }
}

pub struct ComparatorBuilder {
    params: ComparisonParams,
}

impl Default for ComparatorBuilder {
    fn default() -> Self {
        debug!("Creating ComparatorBuilder with default parameters");
        Self { params: ComparisonParams::default() }
    }
}

impl ComparatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closeness used by the classifier: `|a - b| <= atol + rtol * |b|`.
    /// Defaults are `atol = 1e-8`, `rtol = 1e-5`. Checked in [`Self::build`].
    pub fn with_tolerance(mut self, atol: f64, rtol: f64) -> Self {
        info!("Configuring tolerance: atol={:e}, rtol={:e}", atol, rtol);
        self.params.tolerance = Tolerance { atol, rtol };
        self
    }

    /// `Some(tol)` rejects eigenvalues with `|imag| > tol` on asymmetric input,
    /// `None` discards imaginary parts unchecked.
    pub fn with_imaginary_tolerance(mut self, max_imaginary: Option<f64>) -> Self {
        info!("Configuring imaginary-part check: {:?}", max_imaginary);
        self.params.spectrum.max_imaginary = max_imaginary;
        self
    }

    pub fn with_symmetry_tolerance(mut self, epsilon: f64) -> Self {
        info!("Configuring symmetry tolerance: {:e}", epsilon);
        self.params.spectrum.symmetry_tolerance = epsilon;
        self
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        info!("Configuring error policy: {:?}", policy);
        self.params.policy = policy;
        self
    }

    /// Compute the representations of a pair on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        info!("Setting parallel representations: {}", parallel);
        self.params.parallel = parallel;
        self
    }

    pub fn params(&self) -> &ComparisonParams {
        &self.params
    }

    /// Fails with [`crate::error::SpectralError::InvalidTolerance`] if the
    /// configured tolerance is negative.
    pub fn build(self) -> Result<SpectralComparator> {
        let Tolerance { atol, rtol } = self.params.tolerance;
        Tolerance::new(atol, rtol)?;
        debug!("Building SpectralComparator with {:?}", self.params);
        Ok(SpectralComparator::new(self.params))
    }
}
