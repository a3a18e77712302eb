//! Determinants, decompositions and principal component analysis.
//!
//! Two determinant algorithms are provided for comparison: Laplace
//! (cofactor) expansion, which is exponential in the dimension, and the LU
//! route `det(A) = det(P)·∏ diag(U)`. The decomposition helpers rebuild a
//! matrix from its eigen- and singular value decompositions so the
//! factorizations can be checked against the original.

use nalgebra::{DMatrix, DVector};
use numlab_core::error::{NumError, Result};
use tracing::{debug, instrument};

fn ensure_square(matrix: &DMatrix<f64>) -> Result<usize> {
    let (rows, cols) = matrix.shape();
    if rows == 0 {
        return Err(NumError::invalid_input("matrix is empty"));
    }
    if rows != cols {
        return Err(NumError::dimension_mismatch(
            "square matrix",
            format!("{rows}x{cols}"),
        ));
    }
    Ok(rows)
}

/// Determinant by cofactor expansion along the first row.
pub fn recursive_determinant(matrix: &DMatrix<f64>) -> Result<f64> {
    let n = ensure_square(matrix)?;
    Ok(laplace(matrix, n))
}

fn laplace(m: &DMatrix<f64>, n: usize) -> f64 {
    match n {
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        _ => {
            let lower = m.clone().remove_row(0);
            (0..n)
                .map(|col| {
                    let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                    let minor = lower.clone().remove_column(col);
                    sign * m[(0, col)] * laplace(&minor, n - 1)
                })
                .sum()
        }
    }
}

/// Determinant from an LU decomposition with partial pivoting.
pub fn lu_determinant(matrix: &DMatrix<f64>) -> Result<f64> {
    ensure_square(matrix)?;
    Ok(matrix.clone().lu().determinant())
}

fn is_symmetric(matrix: &DMatrix<f64>, tol: f64) -> bool {
    let scale = matrix.amax().max(1.0);
    (matrix - matrix.transpose()).amax() <= tol * scale
}

/// Rebuild a square matrix with real eigenvalues as `V Λ V⁻¹`.
///
/// Symmetric input uses the symmetric eigensolver (`V` orthogonal). For a
/// general matrix, eigenvalues come from the real Schur form and are
/// grouped when they coincide. An eigenvalue `λ` of multiplicity `k`
/// contributes the `k` right singular vectors of `A - λI` with the smallest
/// singular values, i.e. a basis of its eigenspace.
///
/// # Errors
///
/// `NumericalError` when an eigenvalue is complex, or when an eigenspace is
/// smaller than the eigenvalue's multiplicity (a defective matrix).
pub fn eigen_reconstruct(matrix: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    let n = ensure_square(matrix)?;

    if is_symmetric(matrix, 1e-12) {
        let eigen = matrix.clone().symmetric_eigen();
        return Ok(eigen.recompose());
    }

    let mut real = Vec::with_capacity(n);
    for lambda in matrix.complex_eigenvalues().iter() {
        if lambda.im.abs() > 1e-10 * lambda.norm().max(1.0) {
            return Err(NumError::numerical_error(format!(
                "eigenvalue {lambda} is complex"
            )));
        }
        real.push(lambda.re);
    }

    let null_tol = 1e-8 * matrix.norm().max(1.0);
    let mut values = Vec::with_capacity(n);
    let mut vectors = DMatrix::<f64>::zeros(n, n);
    let mut col = 0;
    for (lambda, k) in group_eigenvalues(real) {
        let shifted = matrix - DMatrix::<f64>::identity(n, n) * lambda;
        let svd = shifted.svd(false, true);
        let v_t = svd
            .v_t
            .ok_or_else(|| NumError::numerical_error("SVD did not produce V^T"))?;

        let mut order: Vec<usize> = (0..svd.singular_values.len()).collect();
        order.sort_by(|&a, &b| svd.singular_values[a].total_cmp(&svd.singular_values[b]));
        for &idx in order.iter().take(k) {
            if svd.singular_values[idx] > null_tol {
                return Err(NumError::numerical_error(format!(
                    "eigenvalue {lambda} has multiplicity {k} but a smaller eigenspace"
                )));
            }
            vectors.set_column(col, &v_t.row(idx).transpose());
            values.push(lambda);
            col += 1;
        }
    }

    let inverse = vectors
        .clone()
        .try_inverse()
        .ok_or_else(|| NumError::numerical_error("eigenvector matrix is singular"))?;
    let lambda = DMatrix::from_diagonal(&DVector::from_vec(values));
    Ok(vectors * lambda * inverse)
}

/// Sort real eigenvalues and merge those that agree to `1e-6` relative,
/// returning each group's mean and size.
fn group_eigenvalues(mut values: Vec<f64>) -> Vec<(f64, usize)> {
    values.sort_by(f64::total_cmp);
    let mut groups: Vec<(f64, usize)> = Vec::new();
    for v in values {
        match groups.last_mut() {
            Some((sum, count)) if (*sum / *count as f64 - v).abs() <= 1e-6 * v.abs().max(1.0) => {
                *sum += v;
                *count += 1;
            }
            _ => groups.push((v, 1)),
        }
    }
    groups
        .into_iter()
        .map(|(sum, count)| (sum / count as f64, count))
        .collect()
}

/// Rebuild a matrix from its singular value decomposition `U Σ Vᵀ`.
pub fn svd_reconstruct(matrix: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    if matrix.is_empty() {
        return Err(NumError::invalid_input("matrix is empty"));
    }
    let svd = matrix.clone().svd(true, true);
    let u = svd
        .u
        .ok_or_else(|| NumError::numerical_error("SVD did not produce U"))?;
    let v_t = svd
        .v_t
        .ok_or_else(|| NumError::numerical_error("SVD did not produce V^T"))?;
    Ok(u * DMatrix::from_diagonal(&svd.singular_values) * v_t)
}

/// Project centered observations (rows) onto their first `k` principal axes.
///
/// Columns are centered, the centered data is factorized with an SVD and
/// the right singular vectors with the `k` largest singular values are the
/// principal axes. The result has one row per observation and `k` columns.
/// The sign of each axis is not fixed.
pub fn pca(data: &DMatrix<f64>, k: usize) -> Result<DMatrix<f64>> {
    let (rows, cols) = data.shape();
    if rows == 0 || cols == 0 {
        return Err(NumError::invalid_input("data matrix is empty"));
    }
    if k == 0 || k > cols.min(rows) {
        return Err(NumError::invalid_input(format!(
            "component count {k} must lie in 1..={}",
            cols.min(rows)
        )));
    }

    let mean = data.row_mean();
    let centered = DMatrix::from_fn(rows, cols, |i, j| data[(i, j)] - mean[j]);
    let svd = centered.clone().svd(false, true);
    let v_t = svd
        .v_t
        .ok_or_else(|| NumError::numerical_error("SVD did not produce V^T"))?;

    let mut order: Vec<usize> = (0..svd.singular_values.len()).collect();
    order.sort_by(|&a, &b| svd.singular_values[b].total_cmp(&svd.singular_values[a]));

    let mut axes = DMatrix::<f64>::zeros(cols, k);
    for (out, &idx) in order.iter().take(k).enumerate() {
        axes.set_column(out, &v_t.row(idx).transpose());
    }
    Ok(centered * axes)
}

/// Reconstruction errors of the eigen and singular value decompositions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecompositionReport {
    /// `‖A - V Λ V⁻¹‖_F`, or `None` when the eigen decomposition is not real.
    pub eigen_error: Option<f64>,
    /// `‖A - U Σ Vᵀ‖_F`.
    pub svd_error: f64,
    /// Whether every available reconstruction is within the tolerance.
    pub passed: bool,
}

/// Rebuild `matrix` from both decompositions and measure the error.
#[instrument(skip(matrix))]
pub fn verify_decompositions(matrix: &DMatrix<f64>, tol: f64) -> Result<DecompositionReport> {
    let eigen_error = match eigen_reconstruct(matrix) {
        Ok(rebuilt) => Some((matrix - rebuilt).norm()),
        Err(NumError::NumericalError { reason }) => {
            debug!(%reason, "eigen reconstruction skipped");
            None
        }
        Err(other) => return Err(other),
    };
    let svd_error = (matrix - svd_reconstruct(matrix)?).norm();
    let passed = svd_error <= tol && eigen_error.map_or(true, |e| e <= tol);

    debug!(?eigen_error, svd_error, passed, "decompositions verified");
    Ok(DecompositionReport {
        eigen_error,
        svd_error,
        passed,
    })
}
