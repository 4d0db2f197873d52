//! Project validation logic.

use crate::schema::{Project, PropellantDef, SolidMaterialDef, TankDef};
use ct_materials::{propellant_by_id, solid_by_id};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut material_ids = HashSet::new();
    for material in &project.materials {
        if !material_ids.insert(&material.id) {
            return Err(ValidationError::DuplicateId {
                id: material.id.clone(),
                context: "materials".to_string(),
            });
        }
        validate_material(material)?;
    }

    let mut propellant_ids = HashSet::new();
    for propellant in &project.propellants {
        if !propellant_ids.insert(&propellant.id) {
            return Err(ValidationError::DuplicateId {
                id: propellant.id.clone(),
                context: "propellants".to_string(),
            });
        }
        validate_propellant(propellant)?;
    }

    let mut tank_ids = HashSet::new();
    for tank in &project.tanks {
        if !tank_ids.insert(&tank.id) {
            return Err(ValidationError::DuplicateId {
                id: tank.id.clone(),
                context: "tanks".to_string(),
            });
        }
        validate_tank(project, tank)?;
    }

    Ok(())
}

fn validate_material(material: &SolidMaterialDef) -> Result<(), ValidationError> {
    let context = format!("material '{}'", material.id);
    require_positive(&context, "density_kg_m3", material.density_kg_m3)?;
    require_positive(
        &context,
        "thermal_conductivity_w_m_k",
        material.thermal_conductivity_w_m_k,
    )?;
    if let Some(sigma) = material.yield_tensile_strength_pa {
        require_positive(&context, "yield_tensile_strength_pa", sigma)?;
    }
    Ok(())
}

fn validate_propellant(propellant: &PropellantDef) -> Result<(), ValidationError> {
    let context = format!("propellant '{}'", propellant.id);
    require_positive(&context, "density_kg_m3", propellant.density_kg_m3)?;
    require_positive(
        &context,
        "enthalpy_vaporisation_j_kg",
        propellant.enthalpy_vaporisation_j_kg,
    )?;
    require_positive(
        &context,
        "storage_temperature_k",
        propellant.storage_temperature_k,
    )?;
    Ok(())
}

fn validate_tank(project: &Project, tank: &TankDef) -> Result<(), ValidationError> {
    let context = format!("tank '{}'", tank.id);
    require_positive(&context, "diameter_internal_m", tank.diameter_internal_m)?;
    require_positive(&context, "length_internal_m", tank.length_internal_m)?;
    if tank.length_internal_m < tank.diameter_internal_m {
        return Err(ValidationError::InvalidValue {
            field: format!("{context} length_internal_m"),
            value: tank.length_internal_m.to_string(),
            reason: "must not be shorter than diameter_internal_m".to_string(),
        });
    }
    require_positive(&context, "design_pressure_pa", tank.design_pressure_pa)?;
    require_positive(
        &context,
        "design_boiloff_rate_kgps",
        tank.design_boiloff_rate_kgps,
    )?;
    require_positive(&context, "temperature_outer_k", tank.temperature_outer_k)?;
    require_positive(&context, "safety_factor_wall", tank.safety_factor_wall)?;
    require_positive(
        &context,
        "safety_factor_insulation",
        tank.safety_factor_insulation,
    )?;

    let storage_k = propellant_storage_temperature(project, &tank.fuel).ok_or_else(|| {
        ValidationError::MissingReference {
            id: tank.fuel.clone(),
            context: format!("{context} fuel"),
        }
    })?;
    if tank.temperature_outer_k <= storage_k {
        return Err(ValidationError::InvalidValue {
            field: format!("{context} temperature_outer_k"),
            value: tank.temperature_outer_k.to_string(),
            reason: format!("must be above the fuel storage temperature of {storage_k} K"),
        });
    }

    match solid_yield_strength(project, &tank.structural_material) {
        None => {
            return Err(ValidationError::MissingReference {
                id: tank.structural_material.clone(),
                context: format!("{context} structural_material"),
            });
        }
        Some(None) => {
            return Err(ValidationError::InvalidValue {
                field: format!("{context} structural_material"),
                value: tank.structural_material.clone(),
                reason: "material has no yield_tensile_strength_pa".to_string(),
            });
        }
        Some(Some(_)) => {}
    }

    if solid_yield_strength(project, &tank.insulation_material).is_none() {
        return Err(ValidationError::MissingReference {
            id: tank.insulation_material.clone(),
            context: format!("{context} insulation_material"),
        });
    }

    Ok(())
}

/// Storage temperature [K] of a local or catalog propellant.
fn propellant_storage_temperature(project: &Project, id: &str) -> Option<f64> {
    if let Some(local) = project.propellants.iter().find(|p| p.id == id) {
        return Some(local.storage_temperature_k);
    }
    propellant_by_id(id)
        .ok()
        .map(|propellant| propellant.temperatures.storage.value)
}

/// Outer `None` if the id resolves nowhere; inner value is the yield strength.
fn solid_yield_strength(project: &Project, id: &str) -> Option<Option<f64>> {
    if let Some(local) = project.materials.iter().find(|m| m.id == id) {
        return Some(local.yield_tensile_strength_pa);
    }
    solid_by_id(id)
        .ok()
        .map(|material| material.yield_tensile_strength.map(|sigma| sigma.value))
}

fn require_positive(context: &str, field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("{context} {field}"),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}
