//! Column case driver: discretize, assemble, constrain, solve

use std::f64::consts::PI;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::AnalysisOptions;
use crate::elements::{BoundaryCondition, Discretization};
use crate::error::{FEAError, FEAResult};
use crate::math;
use crate::results::FrequencyResult;

/// A vertical column with uniform element length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnCase {
    /// Total height H
    pub height: f64,
    /// Flexural rigidity per element (length `num_elements`)
    pub ei: Vec<f64>,
    /// Mass per unit length per element (length `num_elements`)
    pub mu: Vec<f64>,
    /// Axial load applied at the free end, negative for compression
    /// (typically the weight of a tip mass)
    pub tip_load: f64,
    /// Number of equal elements n
    pub num_elements: usize,
}

impl ColumnCase {
    /// Create a new case from per-element properties
    pub fn new(height: f64, ei: Vec<f64>, mu: Vec<f64>, tip_load: f64, num_elements: usize) -> Self {
        Self {
            height,
            ei,
            mu,
            tip_load,
            num_elements,
        }
    }

    /// Create a case with constant EI and mu along the height
    pub fn prismatic(height: f64, ei: f64, mu: f64, tip_load: f64, num_elements: usize) -> Self {
        Self::new(
            height,
            vec![ei; num_elements],
            vec![mu; num_elements],
            tip_load,
            num_elements,
        )
    }

    /// Change the tip load
    pub fn with_tip_load(mut self, tip_load: f64) -> Self {
        self.tip_load = tip_load;
        self
    }

    /// Run the frequency analysis
    pub fn analyse(&self, options: &AnalysisOptions) -> FEAResult<FrequencyResult> {
        options.validate()?;
        if !self.tip_load.is_finite() {
            return Err(FEAError::InvalidInput(format!(
                "tip load must be finite, got {}",
                self.tip_load
            )));
        }

        let disc = Discretization::uniform(self.height, &self.ei, &self.mu, self.num_elements)?;
        let n = disc.num_elements();

        let axial = match options.boundary {
            BoundaryCondition::FixedBase => disc.self_weight_axial_loads(self.tip_load, options.gravity),
            BoundaryCondition::Reference => {
                warn!("Using reference column conventions: node {} clamped, node 0 free", n);
                disc.cumulative_axial_loads(self.tip_load)
            }
        };

        if !options.geometric_stiffness() {
            debug!("Geometric stiffness correction disabled");
        }
        let k = disc.stiffness(options.geometric_stiffness().then_some(axial.as_slice()))?;
        let m = disc.consistent_mass()?;

        // Cantilever: clamp one end, lump the tip mass on the free end
        let free_dofs = options.boundary.free_dofs(n);
        let k_red = math::reduce_matrix(&k, &free_dofs);
        let mut m_red = math::reduce_matrix(&m, &free_dofs);
        let tip_mass = options.lumped_tip_mass(self.tip_load);
        let tip_dof = options.boundary.reduced_tip_dof(n).ok_or_else(|| {
            FEAError::IllPosedSystem("free-end displacement was removed by the supports".to_string())
        })?;
        m_red[(tip_dof, tip_dof)] += tip_mass;

        debug!(
            "Column case: H={}, n={}, tip load={}, tip mass={:.4}, reduced DOFs={}",
            self.height,
            n,
            self.tip_load,
            tip_mass,
            free_dofs.len()
        );

        let eigen = math::generalized_symmetric_eigen(&k_red, &m_red)?;
        let (eigenvalue, phi) = eigen
            .lowest()
            .ok_or_else(|| FEAError::IllPosedSystem("no eigenvalues found".to_string()))?;

        if eigenvalue <= 0.0 {
            return Err(FEAError::Unstable { eigenvalue });
        }

        let angular_frequency = eigenvalue.sqrt();
        let frequency = angular_frequency / (2.0 * PI);
        let mode_shape = normalize_mode(math::expand_vector(&phi, &free_dofs, disc.num_dofs()));

        info!(
            "Fundamental frequency: {:.6} Hz (omega = {:.6} rad/s, n = {})",
            frequency, angular_frequency, n
        );

        Ok(FrequencyResult {
            frequency,
            angular_frequency,
            eigenvalue,
            mode_shape,
            axial_loads: axial,
            tip_mass,
        })
    }
}

/// Fundamental frequency of a column under self-weight and a tip load
///
/// Splits a column of height `height` into `n` equal elements and runs a
/// second-order analysis with a clamped base (see [`AnalysisOptions::default`]).
///
/// # Arguments
/// * `height` - Column height H
/// * `ei` - Flexural rigidity per element (length n)
/// * `mu` - Mass per unit length per element (length n)
/// * `p1` - Axial load at the tip, negative for compression
/// * `n` - Number of elements
pub fn analyse_case(height: f64, ei: &[f64], mu: &[f64], p1: f64, n: usize) -> FEAResult<f64> {
    let case = ColumnCase::new(height, ei.to_vec(), mu.to_vec(), p1, n);
    Ok(case.analyse(&AnalysisOptions::default())?.frequency)
}

/// Scale a mode so its largest transverse displacement is +1
fn normalize_mode(mode: math::Vec) -> Vec<f64> {
    let peak = mode
        .iter()
        .step_by(math::DOF_PER_NODE)
        .copied()
        .fold(0.0_f64, |acc, w| if w.abs() > acc.abs() { w } else { acc });

    if peak == 0.0 {
        return mode.iter().copied().collect();
    }
    mode.iter().map(|v| v / peak).collect()
}
