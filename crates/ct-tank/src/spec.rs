//! Tank design point: inputs, borrowed property records and derived results.

use crate::error::{TankError, TankResult};
use crate::geometry::TankGeometry;
use crate::limits::{
    DEFAULT_SAFETY_FACTOR_INSULATION, DEFAULT_SAFETY_FACTOR_WALL, require_positive,
};
use crate::shape::TankType;
use ct_core::units::{Length, Mass, MassRate, Pressure, Temperature, Volume, kg, kgps, k, pa};
use ct_materials::{Propellant, SolidMaterial};

/// Mass bookkeeping of one tank. Each field stays `None` until the stage that
/// produces it has run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MassProperties {
    pub structural: Option<Mass>,
    pub insulation: Option<Mass>,
    /// Structural plus insulation mass
    pub empty_mass: Option<Mass>,
    pub fuel_volume_when_full: Option<Volume>,
    pub fuel_mass_when_full: Option<Mass>,
}

impl MassProperties {
    /// Empty tank plus a full load of propellant.
    pub fn gross_mass(&self) -> Option<Mass> {
        Some(self.empty_mass? + self.fuel_mass_when_full?)
    }
}

/// One cryogenic tank design point.
///
/// The caller fills in geometry, design loads and property references; the
/// sizing stages then write the derived fields in place.
#[derive(Debug, Clone)]
pub struct TankSpec<'m> {
    pub name: String,

    /// Internal diameter [m]
    pub diameter_internal: Length,
    /// Internal overall length, caps included [m]
    pub length_internal: Length,
    /// Internal design pressure [Pa]
    pub design_pressure: Pressure,
    /// Allowable boil-off [kg/s]
    pub design_boiloff_rate: MassRate,
    /// Temperature at the outer insulation surface [K]
    pub temperature_outer: Temperature,
    pub safety_factor_wall: f64,
    pub safety_factor_insulation: f64,

    pub fuel_type: Option<&'m Propellant>,
    pub structural_material: Option<&'m SolidMaterial>,
    pub insulation_material: Option<&'m SolidMaterial>,

    // Derived
    pub tank_type: Option<TankType>,
    pub thickness_structural: Option<Length>,
    pub thickness_insulation: Option<Length>,
    pub mass_properties: MassProperties,
}

/// Property references checked present, handed explicitly to each stage.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedMaterials<'m> {
    pub fuel: &'m Propellant,
    pub structural: &'m SolidMaterial,
    pub insulation: &'m SolidMaterial,
    /// Yield tensile strength of the structural material
    pub yield_strength: Pressure,
}

impl<'m> ResolvedMaterials<'m> {
    pub fn new(
        fuel: Option<&'m Propellant>,
        structural: Option<&'m SolidMaterial>,
        insulation: Option<&'m SolidMaterial>,
    ) -> TankResult<Self> {
        let fuel = fuel.ok_or(TankError::MissingReference { what: "fuel_type" })?;
        let structural = structural.ok_or(TankError::MissingReference {
            what: "structural_material",
        })?;
        let insulation = insulation.ok_or(TankError::MissingReference {
            what: "insulation_material",
        })?;
        let yield_strength = structural.yield_strength()?;

        fuel.validate()?;
        structural.validate()?;
        insulation.validate()?;

        Ok(Self {
            fuel,
            structural,
            insulation,
            yield_strength,
        })
    }
}

impl<'m> TankSpec<'m> {
    /// New design point with default safety factors and zeroed design loads.
    pub fn new(name: impl Into<String>, diameter_internal: Length, length_internal: Length) -> Self {
        Self {
            name: name.into(),
            diameter_internal,
            length_internal,
            design_pressure: pa(0.0),
            design_boiloff_rate: kgps(0.0),
            temperature_outer: k(0.0),
            safety_factor_wall: DEFAULT_SAFETY_FACTOR_WALL,
            safety_factor_insulation: DEFAULT_SAFETY_FACTOR_INSULATION,
            fuel_type: None,
            structural_material: None,
            insulation_material: None,
            tank_type: None,
            thickness_structural: None,
            thickness_insulation: None,
            mass_properties: MassProperties::default(),
        }
    }

    pub fn with_design_pressure(mut self, pressure: Pressure) -> Self {
        self.design_pressure = pressure;
        self
    }

    pub fn with_design_boiloff_rate(mut self, rate: MassRate) -> Self {
        self.design_boiloff_rate = rate;
        self
    }

    pub fn with_temperature_outer(mut self, temperature: Temperature) -> Self {
        self.temperature_outer = temperature;
        self
    }

    pub fn with_safety_factors(mut self, wall: f64, insulation: f64) -> Self {
        self.safety_factor_wall = wall;
        self.safety_factor_insulation = insulation;
        self
    }

    pub fn with_fuel(mut self, fuel: &'m Propellant) -> Self {
        self.fuel_type = Some(fuel);
        self
    }

    pub fn with_structural_material(mut self, material: &'m SolidMaterial) -> Self {
        self.structural_material = Some(material);
        self
    }

    pub fn with_insulation_material(mut self, material: &'m SolidMaterial) -> Self {
        self.insulation_material = Some(material);
        self
    }

    /// Resolve the fuel and material references, failing on the first absent one.
    pub fn resolve_materials(&self) -> TankResult<ResolvedMaterials<'m>> {
        ResolvedMaterials::new(
            self.fuel_type,
            self.structural_material,
            self.insulation_material,
        )
    }

    /// Check geometry and design loads before any stage runs.
    pub fn validate_inputs(&self) -> TankResult<()> {
        let d = require_positive(self.diameter_internal.value, "diameter_internal")?;
        let l = require_positive(self.length_internal.value, "length_internal")?;
        if l < d {
            return Err(TankError::InvalidInput {
                what: "length_internal shorter than diameter_internal",
                value: l - d,
            });
        }
        require_positive(self.design_pressure.value, "design_pressure")?;
        require_positive(self.design_boiloff_rate.value, "design_boiloff_rate")?;
        require_positive(self.temperature_outer.value, "temperature_outer")?;
        require_positive(self.safety_factor_wall, "safety_factor_wall")?;
        require_positive(self.safety_factor_insulation, "safety_factor_insulation")?;
        Ok(())
    }

    /// The outer surface must be warmer than the stored propellant, else no
    /// insulation layer can carry the allowable heat leak inward.
    pub fn validate_thermal(&self, materials: &ResolvedMaterials<'_>) -> TankResult<()> {
        let storage = materials.fuel.temperatures.storage.value;
        let outer = self.temperature_outer.value;
        if outer <= storage {
            return Err(TankError::InvalidInput {
                what: "temperature_outer not above propellant storage temperature",
                value: outer - storage,
            });
        }
        Ok(())
    }

    /// Internal geometry; requires the shape to have been classified.
    pub fn geometry(&self) -> Option<TankGeometry> {
        self.tank_type.map(|tank_type| {
            TankGeometry::new(
                tank_type,
                self.diameter_internal.value,
                self.length_internal.value,
            )
        })
    }

    /// Drop every derived field.
    pub fn clear_derived(&mut self) {
        self.tank_type = None;
        self.thickness_structural = None;
        self.thickness_insulation = None;
        self.mass_properties = MassProperties::default();
    }

    /// True once every stage has written its result.
    pub fn is_sized(&self) -> bool {
        let mp = &self.mass_properties;
        self.tank_type.is_some()
            && self.thickness_structural.is_some()
            && self.thickness_insulation.is_some()
            && mp.structural.is_some()
            && mp.insulation.is_some()
            && mp.empty_mass.is_some()
            && mp.fuel_volume_when_full.is_some()
            && mp.fuel_mass_when_full.is_some()
    }

    /// Total build-up over the wall and insulation on one side [m].
    fn total_layer_thickness(&self) -> Option<f64> {
        Some(self.thickness_structural?.value + self.thickness_insulation?.value)
    }

    /// Outside diameter over the insulation, once both thicknesses are known.
    pub fn outer_diameter(&self) -> Option<Length> {
        let layers = self.total_layer_thickness()?;
        Some(ct_core::units::m(self.diameter_internal.value + 2.0 * layers))
    }

    /// Outside length over the insulation, once both thicknesses are known.
    pub fn outer_length(&self) -> Option<Length> {
        let layers = self.total_layer_thickness()?;
        Some(ct_core::units::m(self.length_internal.value + 2.0 * layers))
    }

    pub(crate) fn set_empty_mass(&mut self) -> TankResult<Mass> {
        let structural = self.mass_properties.structural.ok_or(TankError::StageOrder {
            stage: "empty mass",
            requires: "mass_properties.structural",
        })?;
        let insulation = self.mass_properties.insulation.ok_or(TankError::StageOrder {
            stage: "empty mass",
            requires: "mass_properties.insulation",
        })?;
        let empty = kg(structural.value + insulation.value);
        self.mass_properties.empty_mass = Some(empty);
        Ok(empty)
    }
}
