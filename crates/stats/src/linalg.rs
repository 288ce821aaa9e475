//! Small dense linear algebra on `ndarray` matrices.
//!
//! Gaussian elimination with partial pivoting, sized for the handful of
//! unknowns that appear in unit-root regressions and state-space covariance
//! equations. Singular or numerically rank-deficient systems yield `None`.

use ndarray::{Array1, Array2};

/// Relative pivot threshold below which a matrix is treated as singular.
const PIVOT_TOL: f64 = 1e-12;

/// Solves `a * x = b` for `x`.
///
/// Returns `None` if `a` is not square, the dimensions disagree, or `a` is
/// singular to working precision.
pub fn solve(a: &Array2<f64>, b: &Array1<f64>) -> Option<Array1<f64>> {
    let n = a.nrows();
    if a.ncols() != n || b.len() != n {
        return None;
    }
    let rhs = b.clone().into_shape_with_order((n, 1)).ok()?;
    let x = gauss_jordan(a, rhs)?;
    Some(x.column(0).to_owned())
}

/// Inverts a square matrix.
///
/// Returns `None` if `a` is not square or is singular to working precision.
pub fn invert(a: &Array2<f64>) -> Option<Array2<f64>> {
    let n = a.nrows();
    if a.ncols() != n {
        return None;
    }
    gauss_jordan(a, Array2::eye(n))
}

/// Reduces `[a | rhs]` to `[I | a⁻¹ rhs]` and returns the right block.
fn gauss_jordan(a: &Array2<f64>, mut rhs: Array2<f64>) -> Option<Array2<f64>> {
    let n = a.nrows();
    let mut m = a.clone();
    let scale = m.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if n == 0 {
        return Some(rhs);
    }
    if scale == 0.0 || !scale.is_finite() {
        return None;
    }
    let tol = PIVOT_TOL * scale;

    for col in 0..n {
        // Partial pivoting: bring the largest remaining entry to the diagonal.
        let (pivot_row, pivot_abs) = (col..n)
            .map(|r| (r, m[[r, col]].abs()))
            .fold((col, -1.0), |best, cur| if cur.1 > best.1 { cur } else { best });
        if pivot_abs <= tol {
            return None;
        }
        if pivot_row != col {
            for j in 0..n {
                m.swap([col, j], [pivot_row, j]);
            }
            for j in 0..rhs.ncols() {
                rhs.swap([col, j], [pivot_row, j]);
            }
        }

        let pivot = m[[col, col]];
        for j in 0..n {
            m[[col, j]] /= pivot;
        }
        for j in 0..rhs.ncols() {
            rhs[[col, j]] /= pivot;
        }

        for r in 0..n {
            if r == col {
                continue;
            }
            let factor = m[[r, col]];
            if factor == 0.0 {
                continue;
            }
            for j in 0..n {
                m[[r, j]] -= factor * m[[col, j]];
            }
            for j in 0..rhs.ncols() {
                rhs[[r, j]] -= factor * rhs[[col, j]];
            }
        }
    }

    Some(rhs)
}
