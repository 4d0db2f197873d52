//! Constants and validity thresholds for the sizing relations.

use crate::error::{TankError, TankResult};

/// Default wall safety factor applied to the minimum wall thickness.
pub const DEFAULT_SAFETY_FACTOR_WALL: f64 = 2.25;

/// Default insulation safety factor applied to the minimum insulation thickness.
pub const DEFAULT_SAFETY_FACTOR_INSULATION: f64 = 1.2;

/// Stress coefficient in the spherical wall relation `1 - 1.5 p/σ_y`.
pub const SPHERE_STRESS_COEFF: f64 = 1.5;

/// Stress coefficient in the cylindrical wall relation `1 - √3 p/σ_y`.
pub const CYLINDER_STRESS_COEFF: f64 = 1.732_050_807_568_877_2;

/// The stress ratio base `1 - c·p/σ_y` must stay strictly above this value.
/// At or below it the wall relation has no real, finite solution.
pub const MIN_STRESS_BASE: f64 = 0.0;

/// The spherical conduction term `γ·k_ins` must stay strictly below this value.
/// At or above it the required insulation is unbounded or negative.
pub const MAX_SPHERE_CONDUCTION_TERM: f64 = 1.0;

/// Relative gap between diameter and length under which a cylindrical tank is
/// reported as near-spherical. Classification itself stays exact.
pub const NEAR_SPHERICAL_REL_GAP: f64 = 1e-9;

/// Finite and strictly positive, else `InvalidInput`.
pub fn require_positive(value: f64, what: &'static str) -> TankResult<f64> {
    Ok(ct_core::ensure_positive(value, what)?)
}

/// Finite result, else `Infeasible` (the relation left its valid range).
pub fn require_finite_result(value: f64, what: &'static str) -> TankResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TankError::Infeasible { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cylinder_coefficient_is_sqrt_three() {
        assert!((CYLINDER_STRESS_COEFF - 3.0_f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn require_positive_maps_to_invalid_input() {
        assert!(matches!(
            require_positive(0.0, "design_pressure"),
            Err(TankError::InvalidInput {
                what: "design_pressure",
                ..
            })
        ));
        assert_eq!(require_positive(2.0, "x").unwrap(), 2.0);
    }

    #[test]
    fn require_finite_result_maps_to_infeasible() {
        assert!(matches!(
            require_finite_result(f64::INFINITY, "t"),
            Err(TankError::Infeasible { .. })
        ));
    }
}
