//! Solid material records for tank walls and insulation layers.

use crate::error::{MaterialError, MaterialResult};
use ct_core::ensure_positive;
use ct_core::units::{Density, Pressure, ThermalConductivity};

/// Bulk properties of a solid used in a tank shell.
///
/// Insulation materials generally carry no yield strength; the structural
/// wall material must.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidMaterial {
    pub name: String,
    /// Bulk density [kg/m³]
    pub density: Density,
    /// Thermal conductivity [W/(m·K)]
    pub thermal_conductivity: ThermalConductivity,
    /// Yield tensile strength [Pa], if the material is load bearing
    pub yield_tensile_strength: Option<Pressure>,
}

impl SolidMaterial {
    /// Create a non-structural material (no yield strength).
    pub fn new(
        name: impl Into<String>,
        density: Density,
        thermal_conductivity: ThermalConductivity,
    ) -> Self {
        Self {
            name: name.into(),
            density,
            thermal_conductivity,
            yield_tensile_strength: None,
        }
    }

    pub fn with_yield_tensile_strength(mut self, strength: Pressure) -> Self {
        self.yield_tensile_strength = Some(strength);
        self
    }

    /// Yield strength, or `MissingProperty` for non-structural materials.
    pub fn yield_strength(&self) -> MaterialResult<Pressure> {
        self.yield_tensile_strength
            .ok_or_else(|| MaterialError::MissingProperty {
                material: self.name.clone(),
                what: "yield_tensile_strength",
            })
    }

    /// Check that every defined property is finite and strictly positive.
    pub fn validate(&self) -> MaterialResult<()> {
        check_positive(self.density.value, "density")?;
        check_positive(self.thermal_conductivity.value, "thermal_conductivity")?;
        if let Some(sigma) = self.yield_tensile_strength {
            check_positive(sigma.value, "yield_tensile_strength")?;
        }
        Ok(())
    }
}

pub(crate) fn check_positive(value: f64, what: &'static str) -> MaterialResult<()> {
    ensure_positive(value, what).map_err(|_| MaterialError::NonPhysical { what, value })?;
    Ok(())
}
