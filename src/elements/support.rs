//! Support conditions of a cantilever column

use serde::{Deserialize, Serialize};

use crate::math::DOF_PER_NODE;

/// Which end of the column is clamped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoundaryCondition {
    /// Base (node 0) clamped, tip (node N) free. Axial load grows with the
    /// weight above each element and the tip mass sits on node N.
    #[default]
    FixedBase,
    /// Reference driver conventions: the trailing two DOFs (node N) are
    /// removed, node 0 stays free and receives the lumped mass, and axial
    /// load accumulates from element 0.
    Reference,
}

impl BoundaryCondition {
    /// Global node index that is clamped
    pub fn clamped_node(&self, num_elements: usize) -> usize {
        match self {
            Self::FixedBase => 0,
            Self::Reference => num_elements,
        }
    }

    /// Global node index of the free end
    pub fn free_node(&self, num_elements: usize) -> usize {
        match self {
            Self::FixedBase => num_elements,
            Self::Reference => 0,
        }
    }

    /// DOFs that remain after clamping, in ascending order
    pub fn free_dofs(&self, num_elements: usize) -> Vec<usize> {
        let clamped = self.clamped_node(num_elements) * DOF_PER_NODE;
        let num_dofs = (num_elements + 1) * DOF_PER_NODE;
        (0..num_dofs)
            .filter(|&dof| dof < clamped || dof >= clamped + DOF_PER_NODE)
            .collect()
    }

    /// Index, within the reduced system, of the free-end transverse displacement
    ///
    /// `None` only if the free-end displacement is not among the free DOFs.
    pub fn reduced_tip_dof(&self, num_elements: usize) -> Option<usize> {
        let global = self.free_node(num_elements) * DOF_PER_NODE;
        self.free_dofs(num_elements).iter().position(|&dof| dof == global)
    }
}
