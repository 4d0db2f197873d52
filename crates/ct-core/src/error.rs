//! Error type shared across the workspace.

use thiserror::Error;

pub type CtResult<T> = Result<T, CtError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Invalid value for {what}: {value}")]
    InvalidInput { what: &'static str, value: f64 },

    #[error("Infeasible design: {what}")]
    Infeasible { what: &'static str },

    #[error("Missing reference: {what}")]
    MissingReference { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
