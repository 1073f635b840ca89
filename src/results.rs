//! Result types for column frequency analysis

use serde::{Deserialize, Serialize};

use crate::math::DOF_PER_NODE;

/// Fundamental vibration mode of a column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyResult {
    /// Fundamental frequency f = ω/2π (Hz for SI input)
    pub frequency: f64,
    /// Angular frequency ω (rad/s)
    pub angular_frequency: f64,
    /// Smallest generalized eigenvalue λ = ω²
    pub eigenvalue: f64,
    /// Mode shape over all 2(N+1) DOFs [w_0, θ_0, w_1, θ_1, ...],
    /// zero at the clamped node, largest |w| scaled to +1
    pub mode_shape: Vec<f64>,
    /// Axial force per element used in the analysis (compression negative)
    pub axial_loads: Vec<f64>,
    /// Lumped mass added at the free end
    pub tip_mass: f64,
}

impl FrequencyResult {
    /// Natural period T = 1/f
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }

    /// Number of elements in the discretization
    pub fn num_elements(&self) -> usize {
        self.axial_loads.len()
    }

    /// Transverse displacement of the mode at each node
    pub fn displacements(&self) -> Vec<f64> {
        self.mode_shape.iter().step_by(DOF_PER_NODE).copied().collect()
    }

    /// Rotation of the mode at each node
    pub fn rotations(&self) -> Vec<f64> {
        self.mode_shape
            .iter()
            .skip(1)
            .step_by(DOF_PER_NODE)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FrequencyResult {
        FrequencyResult {
            frequency: 2.0,
            angular_frequency: 4.0 * std::f64::consts::PI,
            eigenvalue: 16.0 * std::f64::consts::PI.powi(2),
            mode_shape: vec![0.0, 0.0, 0.4, 0.1, 1.0, 0.2],
            axial_loads: vec![-20.0, -10.0],
            tip_mass: 0.0,
        }
    }

    #[test]
    fn test_period() {
        assert_eq!(sample().period(), 0.5);
    }

    #[test]
    fn test_displacements_and_rotations() {
        let result = sample();
        assert_eq!(result.num_elements(), 2);
        assert_eq!(result.displacements(), vec![0.0, 0.4, 1.0]);
        assert_eq!(result.rotations(), vec![0.0, 0.1, 0.2]);
    }
}
