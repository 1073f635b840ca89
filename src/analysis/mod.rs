//! Analysis types and options

mod case;

pub use case::{analyse_case, ColumnCase};

use serde::{Deserialize, Serialize};

use crate::elements::BoundaryCondition;
use crate::error::{FEAError, FEAResult};

/// Standard gravitational acceleration in m/s²
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Type of stiffness used in the frequency analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisType {
    /// First-order: linear elastic stiffness only
    Linear,
    /// Second-order: elastic stiffness plus geometric stiffness from axial load
    PDelta,
}

impl Default for AnalysisType {
    fn default() -> Self {
        Self::PDelta
    }
}

/// Options for column frequency analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisOptions {
    /// Type of analysis
    pub analysis_type: AnalysisType,
    /// Which end of the column is clamped
    pub boundary: BoundaryCondition,
    /// Gravitational acceleration used for self-weight and the tip mass
    pub gravity: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            analysis_type: AnalysisType::PDelta,
            boundary: BoundaryCondition::FixedBase,
            gravity: STANDARD_GRAVITY,
        }
    }
}

impl AnalysisOptions {
    /// Create options for first-order analysis
    pub fn linear() -> Self {
        Self {
            analysis_type: AnalysisType::Linear,
            ..Self::default()
        }
    }

    /// Create options for second-order (P-Delta) analysis
    pub fn p_delta() -> Self {
        Self::default()
    }

    /// Options reproducing the reference column driver exactly: trailing DOFs
    /// clamped, lumped mass `P1/g` on DOF 0 and no geometric correction.
    pub fn reference() -> Self {
        Self {
            analysis_type: AnalysisType::Linear,
            boundary: BoundaryCondition::Reference,
            gravity: STANDARD_GRAVITY,
        }
    }

    /// Parse options from JSON; missing fields take their defaults and
    /// unknown fields are rejected
    pub fn from_json(json: &str) -> FEAResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Set boundary condition
    pub fn with_boundary(mut self, boundary: BoundaryCondition) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set gravitational acceleration
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Whether the geometric stiffness correction is applied
    pub fn geometric_stiffness(&self) -> bool {
        self.analysis_type == AnalysisType::PDelta
    }

    /// Lumped mass added at the free end for a tip axial load `p1`
    ///
    /// With a clamped base the tip load is the weight of a tip mass, so only
    /// compression contributes. The reference conventions add `p1/g` as is.
    pub fn lumped_tip_mass(&self, p1: f64) -> f64 {
        match self.boundary {
            BoundaryCondition::FixedBase => (-p1).max(0.0) / self.gravity,
            BoundaryCondition::Reference => p1 / self.gravity,
        }
    }

    pub fn validate(&self) -> FEAResult<()> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(FEAError::InvalidInput(format!(
                "gravity must be finite and positive, got {}",
                self.gravity
            )));
        }
        Ok(())
    }
}
