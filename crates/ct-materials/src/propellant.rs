//! Cryogenic propellant records.

use crate::error::MaterialResult;
use crate::solid::check_positive;
use ct_core::units::{Density, SpecEnergy, Temperature};

/// Characteristic temperatures of a propellant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropellantTemperatures {
    /// Temperature the liquid is held at inside the tank [K]
    pub storage: Temperature,
}

/// A stored propellant as seen by the tank sizing engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Propellant {
    pub name: String,
    /// Liquid density at storage conditions [kg/m³]
    pub density: Density,
    /// Enthalpy of vaporisation [J/kg]
    pub enthalpy_vaporisation: SpecEnergy,
    pub temperatures: PropellantTemperatures,
}

impl Propellant {
    pub fn new(
        name: impl Into<String>,
        density: Density,
        enthalpy_vaporisation: SpecEnergy,
        storage: Temperature,
    ) -> Self {
        Self {
            name: name.into(),
            density,
            enthalpy_vaporisation,
            temperatures: PropellantTemperatures { storage },
        }
    }

    pub fn validate(&self) -> MaterialResult<()> {
        check_positive(self.density.value, "propellant density")?;
        check_positive(self.enthalpy_vaporisation.value, "enthalpy_vaporisation")?;
        check_positive(self.temperatures.storage.value, "storage temperature")?;
        Ok(())
    }
}
