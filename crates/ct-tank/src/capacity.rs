//! Fuel capacity of the internal cavity.

use crate::geometry::TankGeometry;

/// Volume of propellant held when full [m³].
pub fn fuel_volume_when_full(geometry: &TankGeometry) -> f64 {
    geometry.cavity_volume()
}

/// Mass of propellant held when full [kg].
pub fn fuel_mass_when_full(fuel_volume: f64, fuel_density: f64) -> f64 {
    fuel_volume * fuel_density
}
