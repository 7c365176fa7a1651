//! Second-order polynomial point transform.
//!
//! # Model
//!
//! Each output axis is a full quadratic in the input coordinates:
//!
//! ```text
//! x' = a0 + a1*x + a2*y + a3*x² + a4*xy + a5*y²
//! y' = b0 + b1*x + b2*y + b3*x² + b4*xy + b5*y²
//! ```
//!
//! The two axes are fitted independently by ordinary least squares over the
//! same design matrix. Six unknowns per axis means at least six point pairs.
//! Degenerate layouts (collinear or repeated points) still fit: the solver
//! falls back to the minimum-norm solution and reports the reduced rank.

use std::fmt;

use glam::DVec2;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use common::{InvalidInput, Result};

use crate::basis::{self, quadratic_basis, NUM_TERMS};
use crate::config::FitConfig;
use crate::solver::solve_least_squares;

/// Minimum number of point pairs needed to determine all coefficients.
pub const MIN_FIT_POINTS: usize = NUM_TERMS;

/// Quadratic mapping from source to target coordinates.
///
/// Coefficients follow the basis order `(1, x, y, x², xy, y²)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticTransform {
    coeff_x: [f64; NUM_TERMS],
    coeff_y: [f64; NUM_TERMS],
}

/// Solver diagnostics from a fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    /// Number of point pairs used.
    pub num_points: usize,
    /// Effective rank of the design matrix (at most 6).
    pub rank: usize,
    /// Singular values of the design matrix, descending.
    pub singular_values: [f64; NUM_TERMS],
    /// Sum of squared residuals for the x and y axes.
    pub residual_sum_of_squares: DVec2,
}

impl FitReport {
    pub fn is_rank_deficient(&self) -> bool {
        self.rank < NUM_TERMS
    }
}

impl Default for QuadraticTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for QuadraticTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_axis(f, "x'", &self.coeff_x)?;
        write!(f, "; ")?;
        write_axis(f, "y'", &self.coeff_y)
    }
}

fn write_axis(f: &mut fmt::Formatter<'_>, name: &str, c: &[f64; NUM_TERMS]) -> fmt::Result {
    write!(
        f,
        "{name} = {:.6} + {:.6}x + {:.6}y + {:.6}x² + {:.6}xy + {:.6}y²",
        c[0], c[1], c[2], c[3], c[4], c[5]
    )
}

impl QuadraticTransform {
    pub fn new(coeff_x: [f64; NUM_TERMS], coeff_y: [f64; NUM_TERMS]) -> Self {
        Self { coeff_x, coeff_y }
    }

    /// Maps every point onto itself.
    pub fn identity() -> Self {
        Self {
            coeff_x: [0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            coeff_y: [0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Builds a transform from coefficient slices, which must hold exactly six entries each.
    pub fn from_coefficients(coeff_x: &[f64], coeff_y: &[f64]) -> Result<Self> {
        Ok(Self {
            coeff_x: coefficient_array("x", coeff_x)?,
            coeff_y: coefficient_array("y", coeff_y)?,
        })
    }

    pub fn coeff_x(&self) -> &[f64; NUM_TERMS] {
        &self.coeff_x
    }

    pub fn coeff_y(&self) -> &[f64; NUM_TERMS] {
        &self.coeff_y
    }

    /// Fit with the default solver configuration.
    pub fn fit(source: &[DVec2], target: &[DVec2]) -> Result<Self> {
        Self::fit_with_config(source, target, &FitConfig::default()).map(|(t, _)| t)
    }

    /// Least-squares fit of both axes, mapping `source[i]` onto `target[i]`.
    ///
    /// Fails if the sets differ in length, hold fewer than six pairs, or
    /// contain non-finite coordinates. Rank deficiency is not an error; check
    /// [`FitReport::rank`] when the point layout may be degenerate.
    pub fn fit_with_config(
        source: &[DVec2],
        target: &[DVec2],
        config: &FitConfig,
    ) -> Result<(Self, FitReport)> {
        config.validate()?;
        validate_point_pairs(source, target)?;

        let n = source.len();
        let design = basis::design_matrix(source);
        let rhs = DMatrix::from_fn(n, 2, |i, axis| if axis == 0 { target[i].x } else { target[i].y });

        let ls = solve_least_squares(design, &rhs, config.rcond);

        let transform = Self {
            coeff_x: std::array::from_fn(|k| ls.solution[(k, 0)]),
            coeff_y: std::array::from_fn(|k| ls.solution[(k, 1)]),
        };
        let report = FitReport {
            num_points: n,
            rank: ls.rank,
            singular_values: std::array::from_fn(|k| ls.singular_values[k]),
            residual_sum_of_squares: DVec2::new(
                ls.residual_sum_of_squares[0],
                ls.residual_sum_of_squares[1],
            ),
        };

        if report.is_rank_deficient() {
            tracing::debug!(
                points = n,
                rank = report.rank,
                "Rank-deficient point layout, using minimum-norm coefficients"
            );
        }
        tracing::debug!(
            points = n,
            rank = report.rank,
            rss_x = report.residual_sum_of_squares.x,
            rss_y = report.residual_sum_of_squares.y,
            "Fitted quadratic transform"
        );

        Ok((transform, report))
    }

    /// Transform a single point.
    #[inline]
    pub fn apply_point(&self, p: DVec2) -> DVec2 {
        let row = quadratic_basis(p);
        DVec2::new(
            basis::evaluate(&row, &self.coeff_x),
            basis::evaluate(&row, &self.coeff_y),
        )
    }

    /// Transform a point set, preserving order.
    pub fn apply(&self, points: &[DVec2]) -> Vec<DVec2> {
        points.iter().map(|&p| self.apply_point(p)).collect()
    }

    /// Distance between each mapped source point and its target.
    pub fn residuals(&self, source: &[DVec2], target: &[DVec2]) -> Result<Vec<f64>> {
        check_same_length(source, target)?;

        Ok(source
            .iter()
            .zip(target)
            .map(|(&s, &t)| (self.apply_point(s) - t).length())
            .collect())
    }

    /// Root-mean-square residual distance. Zero for empty sets.
    pub fn rms_error(&self, source: &[DVec2], target: &[DVec2]) -> Result<f64> {
        let residuals = self.residuals(source, target)?;
        if residuals.is_empty() {
            return Ok(0.0);
        }

        let sum_sq: f64 = residuals.iter().map(|r| r * r).sum();
        Ok((sum_sq / residuals.len() as f64).sqrt())
    }
}

/// Fit a quadratic transform and return the raw `(coeff_x, coeff_y)` vectors.
pub fn fit_quadratic(
    source: &[DVec2],
    target: &[DVec2],
) -> Result<([f64; NUM_TERMS], [f64; NUM_TERMS])> {
    let transform = QuadraticTransform::fit(source, target)?;
    Ok((transform.coeff_x, transform.coeff_y))
}

/// Map `points` through raw coefficient vectors of length six.
pub fn apply_quadratic(points: &[DVec2], coeff_x: &[f64], coeff_y: &[f64]) -> Result<Vec<DVec2>> {
    let transform = QuadraticTransform::from_coefficients(coeff_x, coeff_y)?;
    Ok(transform.apply(points))
}

fn coefficient_array(axis: &'static str, coeffs: &[f64]) -> Result<[f64; NUM_TERMS]> {
    coeffs
        .try_into()
        .map_err(|_| InvalidInput::CoefficientCount {
            axis,
            len: coeffs.len(),
            expected: NUM_TERMS,
        })
}

fn check_same_length(source: &[DVec2], target: &[DVec2]) -> Result<()> {
    if source.len() != target.len() {
        return Err(InvalidInput::ShapeMismatch {
            source_len: source.len(),
            target_len: target.len(),
        });
    }
    Ok(())
}

fn validate_point_pairs(source: &[DVec2], target: &[DVec2]) -> Result<()> {
    check_same_length(source, target)?;

    if source.len() < MIN_FIT_POINTS {
        return Err(InvalidInput::InsufficientPoints {
            found: source.len(),
            required: MIN_FIT_POINTS,
        });
    }

    if let Some(index) = source
        .iter()
        .zip(target)
        .position(|(s, t)| !(s.is_finite() && t.is_finite()))
    {
        return Err(InvalidInput::NonFiniteCoordinate { index });
    }

    Ok(())
}
