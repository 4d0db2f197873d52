//! Pressure-vessel wall sizing.

use crate::error::{TankError, TankResult};
use crate::geometry::TankGeometry;
use crate::limits::{
    CYLINDER_STRESS_COEFF, MIN_STRESS_BASE, SPHERE_STRESS_COEFF, require_finite_result,
};
use crate::shape::TankType;

/// Minimum wall thickness [m] for internal pressure `pressure` [Pa] and yield
/// strength `yield_strength` [Pa], before any safety factor.
///
/// Sphere:   `t = 0.5·D·[(1 - 1.5·p/σ_y)^(-1/3) - 1]`
///
/// Cylinder: `t = 0.5·D·[(1 - √3·p/σ_y)^(-1/2) - 1]`
///
/// Returns `Infeasible` when the pressure reaches the critical fraction of the
/// yield strength for the shape.
pub fn min_wall_thickness(
    geometry: &TankGeometry,
    pressure: f64,
    yield_strength: f64,
) -> TankResult<f64> {
    let (coeff, exponent, what) = match geometry.tank_type {
        TankType::Spherical => (
            SPHERE_STRESS_COEFF,
            -1.0 / 3.0,
            "spherical wall stress ratio 1 - 1.5·p/σ_y",
        ),
        TankType::Cylindrical => (
            CYLINDER_STRESS_COEFF,
            -0.5,
            "cylindrical wall stress ratio 1 - √3·p/σ_y",
        ),
    };

    let base = 1.0 - coeff * pressure / yield_strength;
    if base.is_nan() || base <= MIN_STRESS_BASE {
        return Err(TankError::Infeasible { what, value: base });
    }

    let t_min = 0.5 * geometry.diameter * (base.powf(exponent) - 1.0);
    require_finite_result(t_min, "minimum wall thickness")
}

/// Mass of the structural shell [kg].
pub fn structural_mass(geometry: &TankGeometry, wall_thickness: f64, density: f64) -> f64 {
    density * geometry.shell_volume(geometry.radius(), wall_thickness)
}
