//! Quadratic polynomial basis shared by fitting and evaluation.
//!
//! Both sides build feature rows through [`quadratic_basis`], so the term
//! order `(1, x, y, x², xy, y²)` cannot drift between them.

use glam::DVec2;
use nalgebra::DMatrix;

/// Number of terms per axis: 1, x, y, x², xy, y².
pub const NUM_TERMS: usize = 6;

/// Feature row `(1, x, y, x², xy, y²)` for a point.
#[inline]
pub fn quadratic_basis(p: DVec2) -> [f64; NUM_TERMS] {
    [1.0, p.x, p.y, p.x * p.x, p.x * p.y, p.y * p.y]
}

/// N×6 design matrix, one feature row per point.
pub(crate) fn design_matrix(points: &[DVec2]) -> DMatrix<f64> {
    let data: Vec<f64> = points.iter().flat_map(|&p| quadratic_basis(p)).collect();
    DMatrix::from_row_slice(points.len(), NUM_TERMS, &data)
}

/// Dot product of a feature row with one axis' coefficients.
#[inline]
pub(crate) fn evaluate(basis: &[f64; NUM_TERMS], coeffs: &[f64; NUM_TERMS]) -> f64 {
    basis.iter().zip(coeffs).map(|(b, c)| b * c).sum()
}
