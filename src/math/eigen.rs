//! Dense generalized symmetric eigenvalue solver
//!
//! Solves K·φ = λ·M·φ for symmetric K and symmetric positive definite M by
//! reduction to a standard problem:
//! 1. M = L·Lᵀ (Cholesky)
//! 2. A = L⁻¹·K·L⁻ᵀ
//! 3. A·ψ = λ·ψ (symmetric eigen)
//! 4. φ = L⁻ᵀ·ψ

use log::debug;
use nalgebra::SymmetricEigen;

use super::{Mat, Vec};
use crate::error::{FEAError, FEAResult};

/// Eigenpairs of a generalized symmetric problem, sorted by ascending eigenvalue
#[derive(Debug, Clone)]
pub struct GeneralizedEigen {
    /// Eigenvalues λ = ω², ascending
    pub eigenvalues: Vec,
    /// Eigenvectors φ, one per column, in the order of `eigenvalues`
    pub eigenvectors: Mat,
}

impl GeneralizedEigen {
    /// Smallest eigenvalue and its eigenvector
    pub fn lowest(&self) -> Option<(f64, Vec)> {
        if self.eigenvalues.is_empty() {
            return None;
        }
        Some((self.eigenvalues[0], self.eigenvectors.column(0).into_owned()))
    }
}

/// Solve K·φ = λ·M·φ
///
/// Errors with `IllPosedSystem` when M is not positive definite or the
/// spectrum contains non-finite values.
pub fn generalized_symmetric_eigen(k: &Mat, m: &Mat) -> FEAResult<GeneralizedEigen> {
    if !k.is_square() || !m.is_square() || k.nrows() != m.nrows() {
        return Err(FEAError::InvalidInput(format!(
            "K ({}x{}) and M ({}x{}) must be square and of equal size",
            k.nrows(),
            k.ncols(),
            m.nrows(),
            m.ncols()
        )));
    }

    let n = k.nrows();
    if n == 0 {
        return Err(FEAError::IllPosedSystem(
            "cannot solve eigenvalue problem for 0x0 matrices".to_string(),
        ));
    }

    let chol = m.clone().cholesky().ok_or_else(|| {
        FEAError::IllPosedSystem(
            "mass matrix is not positive definite (Cholesky decomposition failed)".to_string(),
        )
    })?;
    let l = chol.l();

    // A = L⁻¹·K·L⁻ᵀ, using symmetry of K
    let l_inv_k = l
        .solve_lower_triangular(k)
        .ok_or_else(|| FEAError::IllPosedSystem("singular Cholesky factor".to_string()))?;
    let a = l
        .solve_lower_triangular(&l_inv_k.transpose())
        .ok_or_else(|| FEAError::IllPosedSystem("singular Cholesky factor".to_string()))?;
    debug!("Reduced operator asymmetry before symmetrizing: {:.3e}", super::max_asymmetry(&a));
    let a = (&a + a.transpose()) * 0.5;

    let eigen = SymmetricEigen::new(a);
    if eigen.eigenvalues.iter().any(|lambda| !lambda.is_finite()) {
        return Err(FEAError::IllPosedSystem(
            "eigenvalue problem produced non-finite eigenvalues".to_string(),
        ));
    }

    let phi = l
        .transpose()
        .solve_upper_triangular(&eigen.eigenvectors)
        .ok_or_else(|| FEAError::IllPosedSystem("singular Cholesky factor".to_string()))?;

    let mut order: std::vec::Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

    let eigenvalues = Vec::from_iterator(n, order.iter().map(|&i| eigen.eigenvalues[i]));
    let mut eigenvectors = Mat::zeros(n, n);
    for (col, &i) in order.iter().enumerate() {
        eigenvectors.set_column(col, &phi.column(i));
    }

    debug!(
        "Generalized eigen solve: n={}, lambda_min={:.6e}, lambda_max={:.6e}",
        n,
        eigenvalues[0],
        eigenvalues[n - 1]
    );

    Ok(GeneralizedEigen {
        eigenvalues,
        eigenvectors,
    })
}
