//! Dense linear least squares via singular value decomposition.

use nalgebra::{DMatrix, DVector, SVD};

/// Least-squares solution for every column of the right-hand side.
#[derive(Debug, Clone)]
pub(crate) struct LeastSquares {
    /// One solution column per right-hand-side column.
    pub solution: DMatrix<f64>,
    /// Number of singular values above the cutoff.
    pub rank: usize,
    /// Singular values of the design matrix, descending.
    pub singular_values: DVector<f64>,
    /// Squared residual norm per right-hand-side column.
    pub residual_sum_of_squares: Vec<f64>,
}

/// Solves `design * x ≈ rhs` column by column, sharing one SVD.
///
/// Singular values at or below `rcond * σ_max` are dropped, giving the
/// minimum-norm solution when `design` is rank deficient. `rcond` defaults to
/// machine epsilon times the larger matrix dimension.
pub(crate) fn solve_least_squares(
    design: DMatrix<f64>,
    rhs: &DMatrix<f64>,
    rcond: Option<f64>,
) -> LeastSquares {
    assert_eq!(
        design.nrows(),
        rhs.nrows(),
        "design matrix and right-hand side must have the same number of rows"
    );

    let rcond =
        rcond.unwrap_or_else(|| f64::EPSILON * design.nrows().max(design.ncols()) as f64);

    // The residual needs the design matrix after the SVD consumes it.
    let svd = SVD::new(design.clone(), true, true);

    let sigma_max = svd.singular_values.iter().copied().fold(0.0, f64::max);
    let cutoff = rcond * sigma_max;
    let rank = svd.rank(cutoff);

    let solution = svd
        .solve(rhs, cutoff)
        .expect("SVD computed with U and V^T and a non-negative cutoff");

    let residual = &design * &solution - rhs;
    let residual_sum_of_squares = residual
        .column_iter()
        .map(|column| column.norm_squared())
        .collect();

    tracing::trace!(
        rows = design.nrows(),
        cols = design.ncols(),
        rank,
        sigma_max,
        cutoff,
        "Solved least squares"
    );

    LeastSquares {
        solution,
        rank,
        singular_values: svd.singular_values,
        residual_sum_of_squares,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overdetermined_line() {
        // y = 1 + 2x sampled exactly at x = 0, 1, 2
        let design = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let rhs = DMatrix::from_column_slice(3, 1, &[1.0, 3.0, 5.0]);

        let ls = solve_least_squares(design, &rhs, None);

        assert_eq!(ls.rank, 2);
        assert!((ls.solution[(0, 0)] - 1.0).abs() < 1e-12);
        assert!((ls.solution[(1, 0)] - 2.0).abs() < 1e-12);
        assert!(ls.residual_sum_of_squares[0] < 1e-24);
    }

    #[test]
    fn test_inconsistent_system_minimizes_residual() {
        // Best constant through 1, 2, 6 is the mean 3, leaving 4 + 1 + 9 = 14
        let design = DMatrix::from_element(3, 1, 1.0);
        let rhs = DMatrix::from_column_slice(3, 1, &[1.0, 2.0, 6.0]);

        let ls = solve_least_squares(design, &rhs, None);

        assert!((ls.solution[(0, 0)] - 3.0).abs() < 1e-12);
        assert!((ls.residual_sum_of_squares[0] - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_rank_deficient_returns_minimum_norm() {
        // Two identical columns: every x with x0 + x1 = 2 fits, the smallest is (1, 1)
        let design = DMatrix::from_element(2, 2, 1.0);
        let rhs = DMatrix::from_column_slice(2, 1, &[2.0, 2.0]);

        let ls = solve_least_squares(design, &rhs, Some(1e-10));

        assert_eq!(ls.rank, 1);
        assert!((ls.solution[(0, 0)] - 1.0).abs() < 1e-12);
        assert!((ls.solution[(1, 0)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_multiple_right_hand_sides() {
        let design = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let rhs = DMatrix::from_row_slice(3, 2, &[1.0, 4.0, 3.0, 3.0, 5.0, 2.0]);

        let ls = solve_least_squares(design, &rhs, None);

        assert_eq!(ls.solution.shape(), (2, 2));
        assert_eq!(ls.residual_sum_of_squares.len(), 2);
        // Second column: y = 4 - x
        assert!((ls.solution[(0, 1)] - 4.0).abs() < 1e-12);
        assert!((ls.solution[(1, 1)] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_singular_values_descending() {
        let design = DMatrix::from_row_slice(3, 2, &[3.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        let rhs = DMatrix::zeros(3, 1);

        let ls = solve_least_squares(design, &rhs, None);

        assert!((ls.singular_values[0] - 3.0).abs() < 1e-12);
        assert!((ls.singular_values[1] - 1.0).abs() < 1e-12);
    }
}
