//! Project schema definitions.
//!
//! All quantities are SI `f64` values; the field suffix names the unit.

use ct_core::units::{j_per_kg, k, kg_per_m3, pa, w_per_m_k};
use ct_materials::{Propellant, SolidMaterial};
use ct_tank::limits::{DEFAULT_SAFETY_FACTOR_INSULATION, DEFAULT_SAFETY_FACTOR_WALL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub materials: Vec<SolidMaterialDef>,
    #[serde(default)]
    pub propellants: Vec<PropellantDef>,
    #[serde(default)]
    pub tanks: Vec<TankDef>,
}

/// Project-local solid material. Shadows a catalog entry with the same id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolidMaterialDef {
    pub id: String,
    pub name: String,
    pub density_kg_m3: f64,
    pub thermal_conductivity_w_m_k: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_tensile_strength_pa: Option<f64>,
}

impl SolidMaterialDef {
    pub fn to_material(&self) -> SolidMaterial {
        let material = SolidMaterial::new(
            self.name.clone(),
            kg_per_m3(self.density_kg_m3),
            w_per_m_k(self.thermal_conductivity_w_m_k),
        );
        match self.yield_tensile_strength_pa {
            Some(sigma) => material.with_yield_tensile_strength(pa(sigma)),
            None => material,
        }
    }
}

/// Project-local propellant. Shadows a catalog entry with the same id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropellantDef {
    pub id: String,
    pub name: String,
    pub density_kg_m3: f64,
    pub enthalpy_vaporisation_j_kg: f64,
    pub storage_temperature_k: f64,
}

impl PropellantDef {
    pub fn to_propellant(&self) -> Propellant {
        Propellant::new(
            self.name.clone(),
            kg_per_m3(self.density_kg_m3),
            j_per_kg(self.enthalpy_vaporisation_j_kg),
            k(self.storage_temperature_k),
        )
    }
}

/// One tank design point. `fuel`, `structural_material` and
/// `insulation_material` name a project-local definition or a catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TankDef {
    pub id: String,
    pub name: String,
    pub diameter_internal_m: f64,
    pub length_internal_m: f64,
    pub design_pressure_pa: f64,
    pub design_boiloff_rate_kgps: f64,
    pub temperature_outer_k: f64,
    #[serde(default = "default_safety_factor_wall")]
    pub safety_factor_wall: f64,
    #[serde(default = "default_safety_factor_insulation")]
    pub safety_factor_insulation: f64,
    pub fuel: String,
    pub structural_material: String,
    pub insulation_material: String,
}

fn default_safety_factor_wall() -> f64 {
    DEFAULT_SAFETY_FACTOR_WALL
}

fn default_safety_factor_insulation() -> f64 {
    DEFAULT_SAFETY_FACTOR_INSULATION
}
