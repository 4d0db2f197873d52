//! Sizing stages and the orchestration entry point.
//!
//! Stage order is fixed:
//! shape → wall thickness → structural mass → insulation thickness →
//! insulation mass → fuel capacity → empty mass.
//!
//! Each stage reads the derived fields of the stages before it and fails with
//! `TankError::StageOrder` if they have not been written yet.

use crate::capacity;
use crate::error::{TankError, TankResult};
use crate::geometry::TankGeometry;
use crate::insulation::{self, ConductionBalance};
use crate::limits::require_finite_result;
use crate::shape::{TankType, is_near_spherical};
use crate::spec::{MassProperties, ResolvedMaterials, TankSpec};
use crate::structure;
use ct_core::units::{Length, Mass, Power, Volume, kg, m, m3, w};
use tracing::{debug, debug_span, warn};

impl<'m> TankSpec<'m> {
    /// Run every stage in order and return the completed mass properties.
    ///
    /// Derived fields from any previous run are cleared first. On error, fields
    /// written before the failing stage remain but the tank is not sized.
    pub fn calculate_all(&mut self) -> TankResult<MassProperties> {
        let span = debug_span!("size_tank", tank = %self.name);
        let _enter = span.enter();

        self.clear_derived();
        let materials = self.resolve_materials()?;
        self.validate_inputs()?;
        self.validate_thermal(&materials)?;

        self.classify_shape();
        self.calculate_structural_thickness(&materials)?;
        self.calculate_structural_mass(&materials)?;
        self.calculate_insulation_thickness(&materials)?;
        self.calculate_insulation_mass(&materials)?;
        self.calculate_fuel(&materials)?;
        let empty = self.set_empty_mass()?;

        debug!(empty_mass_kg = empty.value, "tank sized");
        Ok(self.mass_properties)
    }

    /// Stage 1: decide the shape from the internal dimensions.
    pub fn classify_shape(&mut self) -> TankType {
        let tank_type = TankType::classify(self.diameter_internal, self.length_internal);
        if is_near_spherical(self.diameter_internal, self.length_internal) {
            warn!(
                diameter_m = self.diameter_internal.value,
                length_m = self.length_internal.value,
                "tank is cylindrical with a negligible barrel"
            );
        }
        debug!(%tank_type, "classified tank shape");
        self.tank_type = Some(tank_type);
        tank_type
    }

    /// Stage 2: minimum wall thickness scaled by the wall safety factor.
    pub fn calculate_structural_thickness(
        &mut self,
        materials: &ResolvedMaterials<'_>,
    ) -> TankResult<Length> {
        let geometry = self.require_geometry("structural thickness")?;
        if self.safety_factor_wall < 1.0 {
            warn!(
                safety_factor = self.safety_factor_wall,
                "wall safety factor below 1"
            );
        }

        let t_min = structure::min_wall_thickness(
            &geometry,
            self.design_pressure.value,
            materials.yield_strength.value,
        )?;
        let thickness = m(self.safety_factor_wall * t_min);

        debug!(t_min_m = t_min, thickness_m = thickness.value, "wall thickness");
        self.thickness_structural = Some(thickness);
        Ok(thickness)
    }

    /// Stage 3: mass of the structural shell.
    pub fn calculate_structural_mass(
        &mut self,
        materials: &ResolvedMaterials<'_>,
    ) -> TankResult<Mass> {
        let geometry = self.require_geometry("structural mass")?;
        let wall = self.require_wall_thickness("structural mass")?;

        let mass = structure::structural_mass(
            &geometry,
            wall.value,
            materials.structural.density.value,
        );
        let mass = kg(require_finite_result(mass, "structural mass")?);

        debug!(mass_kg = mass.value, "structural mass");
        self.mass_properties.structural = Some(mass);
        Ok(mass)
    }

    /// Stage 4: insulation thickness meeting the boil-off target, scaled by the
    /// insulation safety factor.
    pub fn calculate_insulation_thickness(
        &mut self,
        materials: &ResolvedMaterials<'_>,
    ) -> TankResult<Length> {
        let geometry = self.require_geometry("insulation thickness")?;
        let wall = self.require_wall_thickness("insulation thickness")?;
        self.validate_thermal(materials)?;
        if self.safety_factor_insulation < 1.0 {
            warn!(
                safety_factor = self.safety_factor_insulation,
                "insulation safety factor below 1"
            );
        }

        let balance = ConductionBalance {
            wall_thickness: wall.value,
            k_wall: materials.structural.thermal_conductivity.value,
            k_insulation: materials.insulation.thermal_conductivity.value,
            heat_leak: insulation::heat_leak(
                self.design_boiloff_rate.value,
                materials.fuel.enthalpy_vaporisation.value,
            )?,
            delta_t: self.temperature_outer.value - materials.fuel.temperatures.storage.value,
        };

        let t_min = insulation::min_insulation_thickness(&geometry, &balance)?;
        let thickness = m(self.safety_factor_insulation * t_min);

        debug!(
            heat_leak_w = balance.heat_leak,
            t_min_m = t_min,
            thickness_m = thickness.value,
            "insulation thickness"
        );
        self.thickness_insulation = Some(thickness);
        Ok(thickness)
    }

    /// Stage 5: mass of the insulation layer.
    pub fn calculate_insulation_mass(
        &mut self,
        materials: &ResolvedMaterials<'_>,
    ) -> TankResult<Mass> {
        let geometry = self.require_geometry("insulation mass")?;
        let wall = self.require_wall_thickness("insulation mass")?;
        let layer = self.thickness_insulation.ok_or(TankError::StageOrder {
            stage: "insulation mass",
            requires: "thickness_insulation",
        })?;

        let mass = insulation::insulation_mass(
            &geometry,
            wall.value,
            layer.value,
            materials.insulation.density.value,
        );
        let mass = kg(require_finite_result(mass, "insulation mass")?);

        debug!(mass_kg = mass.value, "insulation mass");
        self.mass_properties.insulation = Some(mass);
        Ok(mass)
    }

    /// Stage 6: fuel volume and mass when full.
    pub fn calculate_fuel(
        &mut self,
        materials: &ResolvedMaterials<'_>,
    ) -> TankResult<(Volume, Mass)> {
        let geometry = self.require_geometry("fuel capacity")?;

        let volume = capacity::fuel_volume_when_full(&geometry);
        let volume = require_finite_result(volume, "fuel volume")?;
        let mass = capacity::fuel_mass_when_full(volume, materials.fuel.density.value);

        let (volume, mass) = (m3(volume), kg(mass));
        debug!(
            volume_m3 = volume.value,
            mass_kg = mass.value,
            "fuel capacity"
        );
        self.mass_properties.fuel_volume_when_full = Some(volume);
        self.mass_properties.fuel_mass_when_full = Some(mass);
        Ok((volume, mass))
    }

    /// Allowable heat leak `Q = ṁ_boiloff · h_vap` for this design point.
    pub fn heat_leak(&self) -> TankResult<Power> {
        let fuel = self
            .fuel_type
            .ok_or(TankError::MissingReference { what: "fuel_type" })?;
        let q = insulation::heat_leak(
            self.design_boiloff_rate.value,
            fuel.enthalpy_vaporisation.value,
        )?;
        Ok(w(q))
    }

    fn require_geometry(&self, stage: &'static str) -> TankResult<TankGeometry> {
        self.geometry().ok_or(TankError::StageOrder {
            stage,
            requires: "tank_type",
        })
    }

    fn require_wall_thickness(&self, stage: &'static str) -> TankResult<Length> {
        self.thickness_structural.ok_or(TankError::StageOrder {
            stage,
            requires: "thickness_structural",
        })
    }
}
