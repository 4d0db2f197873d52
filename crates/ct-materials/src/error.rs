//! Material property errors.

use ct_core::CtError;
use thiserror::Error;

/// Result type for material operations.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors raised while building or checking material records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// Non-physical values (negative density, zero conductivity, etc.).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// A property the caller asked for is not defined on this record.
    #[error("Material '{material}' has no {what}")]
    MissingProperty {
        material: String,
        what: &'static str,
    },

    /// Catalog lookup failed.
    #[error("Unknown material or propellant: {id}")]
    Unknown { id: String },
}

impl From<MaterialError> for CtError {
    fn from(err: MaterialError) -> Self {
        match err {
            MaterialError::NonPhysical { what, value } if !value.is_finite() => {
                CtError::NonFinite { what, value }
            }
            MaterialError::NonPhysical { what, value } => CtError::NonPositive { what, value },
            MaterialError::MissingProperty { what, .. } => CtError::MissingReference { what },
            MaterialError::Unknown { .. } => CtError::MissingReference {
                what: "catalog entry",
            },
        }
    }
}
