//! Float guards shared by the property and sizing crates.

use crate::CtError;

/// Finite, else `NonFinite`.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, CtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CtError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: f64, what: &'static str) -> Result<f64, CtError> {
    match ensure_finite(v, what)? {
        v if v > 0.0 => Ok(v),
        v => Err(CtError::NonPositive { what, value: v }),
    }
}
