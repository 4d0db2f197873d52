//! Shell and cavity volumes for spherical and capped-cylinder tanks.
//!
//! All values are SI base units (m, m³) carried as plain `f64`.

use crate::shape::TankType;
use std::f64::consts::PI;

/// Internal geometry of a classified tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankGeometry {
    pub tank_type: TankType,
    /// Internal diameter [m]
    pub diameter: f64,
    /// Internal overall length, caps included [m]
    pub length: f64,
}

impl TankGeometry {
    pub fn new(tank_type: TankType, diameter: f64, length: f64) -> Self {
        Self {
            tank_type,
            diameter,
            length,
        }
    }

    /// Internal radius [m]
    pub fn radius(&self) -> f64 {
        0.5 * self.diameter
    }

    /// Straight section between the caps [m]; zero for a sphere.
    pub fn barrel_length(&self) -> f64 {
        match self.tank_type {
            TankType::Spherical => 0.0,
            TankType::Cylindrical => self.length - self.diameter,
        }
    }

    /// Volume of the internal cavity [m³].
    pub fn cavity_volume(&self) -> f64 {
        let d = self.diameter;
        let caps = PI / 6.0 * d.powi(3);
        match self.tank_type {
            TankType::Spherical => caps,
            TankType::Cylindrical => caps + 0.25 * PI * d.powi(2) * self.barrel_length(),
        }
    }

    /// Material volume of a layer of `thickness` wrapped around a surface of
    /// radius `inner_radius` that follows this tank's shape [m³].
    pub fn shell_volume(&self, inner_radius: f64, thickness: f64) -> f64 {
        let caps = sphere_shell_volume(inner_radius, thickness);
        match self.tank_type {
            TankType::Spherical => caps,
            TankType::Cylindrical => {
                caps + barrel_shell_volume(inner_radius, thickness, self.barrel_length())
            }
        }
    }
}

/// Spherical shell between `r` and `r + t`.
pub fn sphere_shell_volume(r: f64, t: f64) -> f64 {
    let outer = r + t;
    4.0 / 3.0 * PI * (outer.powi(3) - r.powi(3))
}

/// Annular cylinder between `r` and `r + t` over `barrel` length.
pub fn barrel_shell_volume(r: f64, t: f64, barrel: f64) -> f64 {
    let outer = r + t;
    PI * (outer.powi(2) - r.powi(2)) * barrel
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn sphere_cavity_matches_closed_form() {
        let g = TankGeometry::new(TankType::Spherical, 2.0, 2.0);
        assert!(close(g.cavity_volume(), 4.0 / 3.0 * PI));
        assert_eq!(g.barrel_length(), 0.0);
    }

    #[test]
    fn cylinder_cavity_adds_barrel() {
        let g = TankGeometry::new(TankType::Cylindrical, 2.0, 5.0);
        let expected = 4.0 / 3.0 * PI + PI * 1.0 * 3.0;
        assert!(close(g.cavity_volume(), expected));
    }

    #[test]
    fn barrel_term_vanishes_when_length_equals_diameter() {
        let cyl = TankGeometry::new(TankType::Cylindrical, 3.0, 3.0);
        let sph = TankGeometry::new(TankType::Spherical, 3.0, 3.0);
        assert_eq!(cyl.barrel_length(), 0.0);
        assert_eq!(barrel_shell_volume(1.5, 0.01, cyl.barrel_length()), 0.0);
        assert_eq!(cyl.shell_volume(1.5, 0.01), sph.shell_volume(1.5, 0.01));
        assert_eq!(cyl.cavity_volume(), sph.cavity_volume());
    }

    #[test]
    fn zero_thickness_shell_has_no_volume() {
        let g = TankGeometry::new(TankType::Cylindrical, 2.0, 4.0);
        assert_eq!(g.shell_volume(1.0, 0.0), 0.0);
    }

    #[test]
    fn thin_shell_approaches_area_times_thickness() {
        let g = TankGeometry::new(TankType::Cylindrical, 2.0, 4.0);
        let t = 1e-6;
        let area = 4.0 * PI + 2.0 * PI * 2.0;
        let v = g.shell_volume(1.0, t);
        assert!((v / (area * t) - 1.0).abs() < 1e-5);
    }
}
