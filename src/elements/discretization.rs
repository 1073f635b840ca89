//! Column discretization - ordered beam elements from base to tip

use serde::Serialize;

use crate::assembly;
use crate::error::{ensure_positive, FEAError, FEAResult};
use crate::math::{self, Mat};

/// A column split into N beam elements, element 0 at the base
///
/// All per-element arrays share the same length N ≥ 1 and hold finite,
/// strictly positive values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discretization {
    /// Element lengths
    lengths: Vec<f64>,
    /// Flexural rigidity per element
    ei: Vec<f64>,
    /// Mass per unit length per element
    mu: Vec<f64>,
}

impl Discretization {
    /// Create a discretization from per-element arrays
    pub fn new(lengths: Vec<f64>, ei: Vec<f64>, mu: Vec<f64>) -> FEAResult<Self> {
        let n = lengths.len();
        if n == 0 {
            return Err(FEAError::EmptyDiscretization);
        }
        ensure_positive("L", &lengths, n)?;
        ensure_positive("EI", &ei, n)?;
        ensure_positive("mu", &mu, n)?;
        Ok(Self { lengths, ei, mu })
    }

    /// Split a column of height `height` into `n` equal elements
    pub fn uniform(height: f64, ei: &[f64], mu: &[f64], n: usize) -> FEAResult<Self> {
        if n == 0 {
            return Err(FEAError::EmptyDiscretization);
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(FEAError::NonPositiveParameter {
                name: "H",
                index: 0,
                value: height,
            });
        }
        Self::new(vec![height / n as f64; n], ei.to_vec(), mu.to_vec())
    }

    /// Split a prismatic column (constant EI and mu) into `n` equal elements
    pub fn prismatic(height: f64, ei: f64, mu: f64, n: usize) -> FEAResult<Self> {
        Self::uniform(height, &vec![ei; n], &vec![mu; n], n)
    }

    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    pub fn ei(&self) -> &[f64] {
        &self.ei
    }

    pub fn mu(&self) -> &[f64] {
        &self.mu
    }

    /// Number of elements N
    pub fn num_elements(&self) -> usize {
        self.lengths.len()
    }

    /// Number of global DOFs 2(N+1)
    pub fn num_dofs(&self) -> usize {
        math::num_dofs(self.num_elements())
    }

    /// Total column height
    pub fn height(&self) -> f64 {
        self.lengths.iter().sum()
    }

    /// Mass of each element (mu·L)
    pub fn element_masses(&self) -> impl Iterator<Item = f64> + '_ {
        self.lengths.iter().zip(&self.mu).map(|(l, mu)| l * mu)
    }

    /// Total distributed mass of the column
    pub fn total_mass(&self) -> f64 {
        self.element_masses().sum()
    }

    /// Axial force per element for a column standing on its base
    ///
    /// Element k carries the tip load plus the weight of itself and every
    /// element above it: `P[k] = tip_load - g·Σ_{j≥k} mu[j]·L[j]`.
    /// Compression is negative.
    pub fn self_weight_axial_loads(&self, tip_load: f64, gravity: f64) -> Vec<f64> {
        let masses: Vec<f64> = self.element_masses().collect();
        let mut loads = vec![0.0; masses.len()];
        let mut weight_above = 0.0;
        for k in (0..masses.len()).rev() {
            weight_above += gravity * masses[k];
            loads[k] = tip_load - weight_above;
        }
        loads
    }

    /// Axial force per element accumulated from element 0 upwards
    ///
    /// `P[k] = p1 + Σ_{j≤k} mu[j]·L[j]`, the accumulation used by the
    /// reference column driver.
    pub fn cumulative_axial_loads(&self, p1: f64) -> Vec<f64> {
        self.element_masses()
            .scan(p1, |acc, m| {
                *acc += m;
                Some(*acc)
            })
            .collect()
    }

    /// Global stiffness matrix, with geometric correction when `axial` is given
    pub fn stiffness(&self, axial: Option<&[f64]>) -> FEAResult<Mat> {
        assembly::stiffness(&self.lengths, &self.ei, axial)
    }

    /// Global consistent mass matrix
    pub fn consistent_mass(&self) -> FEAResult<Mat> {
        assembly::consistent_mass(&self.lengths, &self.mu)
    }
}
