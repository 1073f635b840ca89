//! Error types for the column solver

use thiserror::Error;

/// Main error type for column analysis
#[derive(Error, Debug)]
pub enum FEAError {
    #[error("Discretization must contain at least one element")]
    EmptyDiscretization,

    #[error("Shape mismatch for '{what}': expected {expected} entries, found {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Parameter '{name}' must be finite and positive (index {index}, value {value})")]
    NonPositiveParameter {
        name: &'static str,
        index: usize,
        value: f64,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Ill-posed eigenvalue problem: {0}")]
    IllPosedSystem(String),

    #[error("Column is unstable under its axial load (smallest eigenvalue {eigenvalue:.6e})")]
    Unstable { eigenvalue: f64 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for column analysis
pub type FEAResult<T> = Result<T, FEAError>;

/// Check that `values` has `expected` entries, all finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, values: &[f64], expected: usize) -> FEAResult<()> {
    ensure_len(name, values, expected)?;
    match values
        .iter()
        .enumerate()
        .find(|(_, v)| !(v.is_finite() && **v > 0.0))
    {
        Some((index, &value)) => Err(FEAError::NonPositiveParameter { name, index, value }),
        None => Ok(()),
    }
}

/// Check that `values` has `expected` entries.
pub(crate) fn ensure_len(name: &'static str, values: &[f64], expected: usize) -> FEAResult<()> {
    if values.len() != expected {
        return Err(FEAError::ShapeMismatch {
            what: name,
            expected,
            found: values.len(),
        });
    }
    Ok(())
}
