//! Mathematical utilities for beam-column FEA calculations

pub mod eigen;

use nalgebra::{DMatrix, DVector, Matrix4};

pub use eigen::{generalized_symmetric_eigen, GeneralizedEigen};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// 4x4 matrix for a planar beam element [w_i, θ_i, w_j, θ_j]
pub type Mat4 = Matrix4<f64>;

/// Degrees of freedom per node (transverse displacement, rotation)
pub const DOF_PER_NODE: usize = 2;

/// Global DOF indices of element `k`: [w_k, θ_k, w_k+1, θ_k+1]
pub fn element_dofs(k: usize) -> [usize; 4] {
    let i1 = DOF_PER_NODE * k;
    let i3 = DOF_PER_NODE * (k + 1);
    [i1, i1 + 1, i3, i3 + 1]
}

/// Number of global DOFs for a column of `num_elements` elements
pub fn num_dofs(num_elements: usize) -> usize {
    DOF_PER_NODE * (num_elements + 1)
}

/// Linear elastic Euler-Bernoulli stiffness matrix of one element
///
/// # Arguments
/// * `ei` - Flexural rigidity
/// * `length` - Element length
pub fn beam_elastic_stiffness(ei: f64, length: f64) -> Mat4 {
    let l = length;
    let k11 = 12.0 * ei / (l * l * l);
    let k12 = 6.0 * ei / (l * l);
    let k22 = 4.0 * ei / l;
    let k24 = 2.0 * ei / l;

    #[rustfmt::skip]
    let data = [
        k11,   k12,  -k11,   k12,
        k12,   k22,  -k12,   k24,
       -k11,  -k12,   k11,  -k12,
        k12,   k24,  -k12,   k22,
    ];

    Mat4::from_row_slice(&data)
}

/// Geometric stiffness matrix of one element for second-order analysis
///
/// # Arguments
/// * `p` - Axial force (positive = tension, negative = compression)
/// * `length` - Element length
pub fn beam_geometric_stiffness(p: f64, length: f64) -> Mat4 {
    if p == 0.0 {
        return Mat4::zeros();
    }

    let l = length;
    let kg11 = 36.0 * p / (30.0 * l);
    let kg12 = 3.0 * p / 30.0;
    let kg22 = 4.0 * p * l / 30.0;
    let kg24 = p * l / 30.0;

    #[rustfmt::skip]
    let data = [
        kg11,   kg12,  -kg11,   kg12,
        kg12,   kg22,  -kg12,  -kg24,
       -kg11,  -kg12,   kg11,  -kg12,
        kg12,  -kg24,  -kg12,   kg22,
    ];

    Mat4::from_row_slice(&data)
}

/// Consistent mass matrix of one element
///
/// # Arguments
/// * `mu` - Mass per unit length
/// * `length` - Element length
pub fn beam_consistent_mass(mu: f64, length: f64) -> Mat4 {
    let l = length;
    let c = mu * l / 420.0;
    let m11 = 156.0 * c;
    let m12 = 22.0 * c * l;
    let m13 = 54.0 * c;
    let m14 = 13.0 * c * l;
    let m22 = 4.0 * c * l * l;
    let m24 = 3.0 * c * l * l;

    #[rustfmt::skip]
    let data = [
        m11,   m12,   m13,  -m14,
        m12,   m22,   m14,  -m24,
        m13,   m14,   m11,  -m12,
       -m14,  -m24,  -m12,   m22,
    ];

    Mat4::from_row_slice(&data)
}

/// Add an element matrix into the global matrix at the DOFs of element `k`
pub fn scatter_element(global: &mut Mat, k: usize, local: &Mat4) {
    let dofs = element_dofs(k);
    for (a, &ga) in dofs.iter().enumerate() {
        for (b, &gb) in dofs.iter().enumerate() {
            global[(ga, gb)] += local[(a, b)];
        }
    }
}

/// Extract the submatrix of `matrix` on the given DOFs
pub fn reduce_matrix(matrix: &Mat, free_dofs: &[usize]) -> Mat {
    let n = free_dofs.len();
    Mat::from_fn(n, n, |i, j| matrix[(free_dofs[i], free_dofs[j])])
}

/// Expand a reduced vector back to `num_dofs` entries, zero at removed DOFs
pub fn expand_vector(reduced: &Vec, free_dofs: &[usize], num_dofs: usize) -> Vec {
    let mut full = Vec::zeros(num_dofs);
    for (i, &dof) in free_dofs.iter().enumerate() {
        full[dof] = reduced[i];
    }
    full
}

/// Largest absolute asymmetry |A_ij - A_ji|
pub fn max_asymmetry(matrix: &Mat) -> f64 {
    (matrix - matrix.transpose()).amax()
}
