//! Global matrix assembly for a discretized column
//!
//! Element k connects nodes k and k+1 and contributes to the global DOFs
//! `[2k, 2k+1, 2k+2, 2k+3]`. Contributions of adjacent elements are summed
//! into the shared node entries.

use log::debug;

use crate::error::{ensure_len, ensure_positive, FEAError, FEAResult};
use crate::math::{self, Mat};

/// Global stiffness matrix of a discretized column
///
/// # Arguments
/// * `lengths` - Element lengths
/// * `ei` - Flexural rigidity per element
/// * `axial` - Axial force per element (negative = compression). `None` skips
///   the geometric correction and yields the linear elastic matrix only.
///
/// # Returns
/// Dense symmetric matrix of size 2(N+1) x 2(N+1)
pub fn stiffness(lengths: &[f64], ei: &[f64], axial: Option<&[f64]>) -> FEAResult<Mat> {
    let n = check_lengths(lengths)?;
    ensure_positive("EI", ei, n)?;
    if let Some(p) = axial {
        check_axial(p, n)?;
    }

    let mut k_global = Mat::zeros(math::num_dofs(n), math::num_dofs(n));

    for k in 0..n {
        let mut k_local = math::beam_elastic_stiffness(ei[k], lengths[k]);
        if let Some(p) = axial {
            k_local += math::beam_geometric_stiffness(p[k], lengths[k]);
        }
        math::scatter_element(&mut k_global, k, &k_local);
    }

    debug!(
        "Assembled stiffness: {} elements, {} DOFs, geometric correction: {}",
        n,
        k_global.nrows(),
        axial.is_some()
    );

    Ok(k_global)
}

/// Global geometric stiffness matrix alone
///
/// Equals `stiffness(L, EI, Some(P)) - stiffness(L, EI, None)`.
pub fn geometric_stiffness(lengths: &[f64], axial: &[f64]) -> FEAResult<Mat> {
    let n = check_lengths(lengths)?;
    check_axial(axial, n)?;

    let mut kg_global = Mat::zeros(math::num_dofs(n), math::num_dofs(n));
    for k in 0..n {
        let kg_local = math::beam_geometric_stiffness(axial[k], lengths[k]);
        math::scatter_element(&mut kg_global, k, &kg_local);
    }

    Ok(kg_global)
}

/// Global consistent mass matrix of a discretized column
///
/// # Arguments
/// * `lengths` - Element lengths
/// * `mu` - Mass per unit length per element
///
/// # Returns
/// Dense symmetric matrix of size 2(N+1) x 2(N+1)
pub fn consistent_mass(lengths: &[f64], mu: &[f64]) -> FEAResult<Mat> {
    let n = check_lengths(lengths)?;
    ensure_positive("mu", mu, n)?;

    let mut m_global = Mat::zeros(math::num_dofs(n), math::num_dofs(n));

    for k in 0..n {
        let m_local = math::beam_consistent_mass(mu[k], lengths[k]);
        math::scatter_element(&mut m_global, k, &m_local);
    }

    debug!("Assembled consistent mass: {} elements, {} DOFs", n, m_global.nrows());

    Ok(m_global)
}

fn check_lengths(lengths: &[f64]) -> FEAResult<usize> {
    if lengths.is_empty() {
        return Err(FEAError::EmptyDiscretization);
    }
    ensure_positive("L", lengths, lengths.len())?;
    Ok(lengths.len())
}

fn check_axial(axial: &[f64], n: usize) -> FEAResult<()> {
    ensure_len("axial load", axial, n)?;
    match axial.iter().copied().enumerate().find(|(_, v)| !v.is_finite()) {
        Some((index, value)) => Err(FEAError::InvalidInput(format!(
            "axial load at element {} is not finite ({})",
            index, value
        ))),
        None => Ok(()),
    }
}
