//! Error types for tank sizing.

use ct_core::error::CtError;
use ct_materials::MaterialError;
use thiserror::Error;

/// Errors raised by the sizing stages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TankError {
    #[error("Invalid input for {what}: {value}")]
    InvalidInput { what: &'static str, value: f64 },

    #[error("Infeasible design: {what} (value={value})")]
    Infeasible { what: &'static str, value: f64 },

    #[error("Missing reference: {what}")]
    MissingReference { what: &'static str },

    #[error("Stage '{stage}' requires {requires} to be computed first")]
    StageOrder {
        stage: &'static str,
        requires: &'static str,
    },
}

pub type TankResult<T> = Result<T, TankError>;

impl From<MaterialError> for TankError {
    fn from(e: MaterialError) -> Self {
        match e {
            MaterialError::NonPhysical { what, value } => TankError::InvalidInput { what, value },
            MaterialError::MissingProperty { what, .. } => TankError::MissingReference { what },
            MaterialError::Unknown { .. } => TankError::MissingReference {
                what: "catalog entry",
            },
        }
    }
}

impl From<CtError> for TankError {
    fn from(e: CtError) -> Self {
        match e {
            CtError::NonFinite { what, value }
            | CtError::NonPositive { what, value }
            | CtError::InvalidInput { what, value } => TankError::InvalidInput { what, value },
            CtError::Invariant { what } => {
                TankError::InvalidInput {
                    what,
                    value: f64::NAN,
                }
            }
            CtError::Infeasible { what } => TankError::Infeasible {
                what,
                value: f64::NAN,
            },
            CtError::MissingReference { what } => TankError::MissingReference { what },
        }
    }
}

impl From<TankError> for CtError {
    fn from(e: TankError) -> Self {
        match e {
            TankError::InvalidInput { what, value } if !value.is_finite() => {
                CtError::NonFinite { what, value }
            }
            TankError::InvalidInput { what, value } => CtError::InvalidInput { what, value },
            TankError::Infeasible { what, .. } => CtError::Infeasible { what },
            TankError::MissingReference { what } => CtError::MissingReference { what },
            TankError::StageOrder { stage, .. } => CtError::Invariant { what: stage },
        }
    }
}
