//! Column Frequency Solver - natural vibration of self-weight loaded columns
//!
//! Computes the fundamental frequency of a vertical cantilever column
//! (chimney, tower, mast) discretized into Euler-Bernoulli beam elements:
//! - Global stiffness assembly with optional geometric (P-Delta) stiffness
//! - Consistent mass assembly
//! - Axial load from self-weight plus a tip load, lumped tip mass
//! - Dense generalized eigenvalue solution K·φ = ω²·M·φ
//!
//! ## Example
//! ```rust
//! use column_freq::prelude::*;
//!
//! // 30 m chimney, EI = 2e9 N·m², 500 kg/m, 50 kN tip load, 10 elements
//! let case = ColumnCase::prismatic(30.0, 2.0e9, 500.0, -50_000.0, 10);
//! let result = case.analyse(&AnalysisOptions::default()).unwrap();
//!
//! assert!(result.frequency > 0.0);
//! println!("f1 = {:.3} Hz, T1 = {:.3} s", result.frequency, result.period());
//! ```

pub mod analysis;
pub mod assembly;
pub mod elements;
pub mod error;
pub mod math;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{analyse_case, AnalysisOptions, AnalysisType, ColumnCase};
    pub use crate::assembly::{consistent_mass, geometric_stiffness, stiffness};
    pub use crate::elements::{BoundaryCondition, Discretization};
    pub use crate::error::{FEAError, FEAResult};
    pub use crate::results::FrequencyResult;
}
