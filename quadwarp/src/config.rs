use serde::{Deserialize, Serialize};

use common::{InvalidInput, Result};

/// Configuration for the least-squares solve behind
/// [`QuadraticTransform::fit_with_config`](crate::QuadraticTransform::fit_with_config).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Relative cutoff for small singular values. Singular values at or below
    /// `rcond * σ_max` are treated as zero, which selects the minimum-norm
    /// solution on rank-deficient point sets.
    /// If None, machine epsilon times `max(N, 6)` is used.
    pub rcond: Option<f64>,
}

impl FitConfig {
    pub fn validate(&self) -> Result<()> {
        match self.rcond {
            Some(rcond) if !rcond.is_finite() || rcond < 0.0 => Err(InvalidInput::InvalidConfig(
                format!("rcond must be finite and non-negative, got {rcond}"),
            )),
            _ => Ok(()),
        }
    }
}
