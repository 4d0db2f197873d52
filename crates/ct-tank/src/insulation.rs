//! Insulation sizing from a steady radial conduction balance.
//!
//! Heat flows from the outer surface at `temperature_outer` inward through the
//! insulation, then the structural wall, to the propellant at its storage
//! temperature. The insulation is sized so that the conducted heat equals the
//! allowable leak `Q = ṁ_boiloff · h_vap`.

use crate::error::{TankError, TankResult};
use crate::geometry::TankGeometry;
use crate::limits::{MAX_SPHERE_CONDUCTION_TERM, require_finite_result};
use crate::shape::TankType;
use std::f64::consts::PI;

/// Thermal inputs of the conduction balance, all SI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductionBalance {
    /// Structural wall thickness [m]
    pub wall_thickness: f64,
    /// Wall conductivity [W/(m·K)]
    pub k_wall: f64,
    /// Insulation conductivity [W/(m·K)]
    pub k_insulation: f64,
    /// Allowable heat leak [W]
    pub heat_leak: f64,
    /// Outer temperature minus storage temperature [K]
    pub delta_t: f64,
}

/// Allowable heat leak [W] for a boil-off rate [kg/s] and enthalpy of
/// vaporisation [J/kg]. Zero or non-finite leaks are rejected.
pub fn heat_leak(boiloff_rate: f64, enthalpy_vaporisation: f64) -> TankResult<f64> {
    let q = boiloff_rate * enthalpy_vaporisation;
    if q.is_finite() && q > 0.0 {
        Ok(q)
    } else {
        Err(TankError::InvalidInput {
            what: "allowable heat leak (boil-off rate × enthalpy of vaporisation)",
            value: q,
        })
    }
}

/// Remaining thermal resistance, scaled by the shape factor, that the
/// insulation must supply (γ = α - β).
pub fn required_resistance(geometry: &TankGeometry, balance: &ConductionBalance) -> f64 {
    let r = geometry.radius();
    let r_wall = r + balance.wall_thickness;
    match geometry.tank_type {
        TankType::Spherical => {
            let alpha = (4.0 * PI / balance.heat_leak) * balance.delta_t;
            let beta = (1.0 / balance.k_wall) * (1.0 / r - 1.0 / r_wall);
            alpha - beta
        }
        TankType::Cylindrical => {
            let alpha = (2.0 * PI * geometry.length / balance.heat_leak) * balance.delta_t;
            let beta = (1.0 / balance.k_wall) * (r_wall / r).ln();
            alpha - beta
        }
    }
}

/// Minimum insulation thickness [m], before any safety factor.
///
/// Sphere:   `t = (r+t_s)·γ·k_ins / (1 - γ·k_ins)`
///
/// Cylinder: `t = (r+t_s)·(exp(γ·k_ins) - 1)`
///
/// The spherical relation treats `γ·k_ins` as a plain ratio; it matches the
/// exact series-conduction result when `r + t_s` is 1 m.
///
/// `γ ≤ 0` (no positive insulation layer balances the heat leak) and, for
/// the sphere, `γ·k_ins ≥ 1` are reported as `Infeasible`.
pub fn min_insulation_thickness(
    geometry: &TankGeometry,
    balance: &ConductionBalance,
) -> TankResult<f64> {
    let gamma = required_resistance(geometry, balance);
    if gamma.is_nan() || gamma <= 0.0 {
        return Err(TankError::Infeasible {
            what: "insulation resistance γ must be positive",
            value: gamma,
        });
    }

    let r_wall = geometry.radius() + balance.wall_thickness;
    let gk = gamma * balance.k_insulation;
    let t_min = match geometry.tank_type {
        TankType::Spherical => {
            if gk >= MAX_SPHERE_CONDUCTION_TERM {
                return Err(TankError::Infeasible {
                    what: "spherical insulation term γ·k_ins must stay below 1",
                    value: gk,
                });
            }
            r_wall * gk / (1.0 - gk)
        }
        TankType::Cylindrical => r_wall * gk.exp_m1(),
    };

    require_finite_result(t_min, "minimum insulation thickness")
}

/// Mass of the insulation layer wrapped around the structural wall [kg].
pub fn insulation_mass(
    geometry: &TankGeometry,
    wall_thickness: f64,
    insulation_thickness: f64,
    density: f64,
) -> f64 {
    density * geometry.shell_volume(geometry.radius() + wall_thickness, insulation_thickness)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance() -> ConductionBalance {
        ConductionBalance {
            wall_thickness: 0.002,
            k_wall: 121.0,
            k_insulation: 1e-4,
            heat_leak: 1e-4 * 446_000.0,
            delta_t: 300.0 - 20.27,
        }
    }

    #[test]
    fn heat_leak_rejects_zero() {
        assert!(matches!(
            heat_leak(0.0, 446_000.0),
            Err(TankError::InvalidInput { .. })
        ));
        assert!(heat_leak(1e-4, 0.0).is_err());
        assert!((heat_leak(1e-4, 446_000.0).unwrap() - 44.6).abs() < 1e-12);
    }

    #[test]
    fn sphere_thickness_matches_closed_form() {
        let g = TankGeometry::new(TankType::Spherical, 2.0, 2.0);
        let b = balance();
        let t = min_insulation_thickness(&g, &b).unwrap();
        let r_wall = 1.0 + b.wall_thickness;
        let alpha = 4.0 * PI / b.heat_leak * b.delta_t;
        let beta = (1.0 / 1.0 - 1.0 / r_wall) / b.k_wall;
        let gk = (alpha - beta) * b.k_insulation;
        let expected = r_wall * gk / (1.0 - gk);
        assert!(t > 0.0);
        assert!((t - expected).abs() < 1e-12 * expected);
    }

    #[test]
    fn sphere_balance_holds_at_unit_wall_radius() {
        let b = balance();
        // r + t_wall == 1 m
        let d = 2.0 * (1.0 - b.wall_thickness);
        let g = TankGeometry::new(TankType::Spherical, d, d);
        let t = min_insulation_thickness(&g, &b).unwrap();

        let r0 = g.radius();
        let r1 = r0 + b.wall_thickness;
        let r2 = r1 + t;
        let resistance = (1.0 / r0 - 1.0 / r1) / (4.0 * PI * b.k_wall)
            + (1.0 / r1 - 1.0 / r2) / (4.0 * PI * b.k_insulation);
        let q = b.delta_t / resistance;
        assert!((q / b.heat_leak - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cylinder_thickness_matches_closed_form() {
        let g = TankGeometry::new(TankType::Cylindrical, 2.0, 6.0);
        let b = balance();
        let t = min_insulation_thickness(&g, &b).unwrap();
        let r_wall = 1.0 + b.wall_thickness;
        let alpha = 2.0 * PI * 6.0 / b.heat_leak * b.delta_t;
        let beta = (r_wall / 1.0_f64).ln() / b.k_wall;
        let expected = r_wall * (((alpha - beta) * b.k_insulation).exp() - 1.0);
        assert!((t - expected).abs() < 1e-12 * expected.max(1.0));
    }

    #[test]
    fn unbounded_spherical_insulation_is_infeasible() {
        let g = TankGeometry::new(TankType::Spherical, 2.0, 2.0);
        let b = ConductionBalance {
            k_insulation: 0.05,
            ..balance()
        };
        assert!(matches!(
            min_insulation_thickness(&g, &b),
            Err(TankError::Infeasible { value, .. }) if value >= 1.0
        ));
    }

    #[test]
    fn non_positive_resistance_is_infeasible() {
        for tank_type in [TankType::Spherical, TankType::Cylindrical] {
            let g = TankGeometry::new(tank_type, 2.0, 6.0);
            let colder = ConductionBalance {
                delta_t: -1.0,
                ..balance()
            };
            assert!(matches!(
                min_insulation_thickness(&g, &colder),
                Err(TankError::Infeasible { value, .. }) if value < 0.0
            ));

            let isothermal = ConductionBalance {
                delta_t: 0.0,
                ..balance()
            };
            assert!(matches!(
                min_insulation_thickness(&g, &isothermal),
                Err(TankError::Infeasible { .. })
            ));
        }
    }

    #[test]
    fn insulation_mass_uses_wall_outer_radius() {
        let g = TankGeometry::new(TankType::Spherical, 2.0, 2.0);
        let m = insulation_mass(&g, 0.01, 0.02, 50.0);
        let expected = 50.0 * 4.0 / 3.0 * PI * (1.03_f64.powi(3) - 1.01_f64.powi(3));
        assert!((m - expected).abs() < 1e-9);
    }
}
