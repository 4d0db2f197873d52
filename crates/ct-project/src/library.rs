//! Reference resolution and project-level sizing.

use crate::report::{SizedTank, TankReport};
use crate::schema::{Project, TankDef};
use crate::validate::{ValidationError, validate_project};
use crate::{ProjectError, ProjectResult};
use ct_core::units::{k, kgps, m, pa};
use ct_materials::{Propellant, SolidMaterial, propellant_by_id, solid_by_id};
use ct_tank::{TankSpec, size_all};
use std::collections::HashMap;
use tracing::{info, warn};

/// Owned property records for every id a project refers to.
///
/// Project-local definitions win over catalog entries of the same id.
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    solids: HashMap<String, SolidMaterial>,
    propellants: HashMap<String, Propellant>,
}

impl MaterialLibrary {
    pub fn from_project(project: &Project) -> ProjectResult<Self> {
        let mut library = Self::default();
        for def in &project.materials {
            library.solids.insert(def.id.clone(), def.to_material());
        }
        for def in &project.propellants {
            library.propellants.insert(def.id.clone(), def.to_propellant());
        }

        for tank in &project.tanks {
            library.load_solid(&tank.structural_material)?;
            library.load_solid(&tank.insulation_material)?;
            library.load_propellant(&tank.fuel)?;
        }
        Ok(library)
    }

    fn load_solid(&mut self, id: &str) -> ProjectResult<()> {
        if !self.solids.contains_key(id) {
            let material = solid_by_id(id)?;
            self.solids.insert(id.to_string(), material);
        }
        Ok(())
    }

    fn load_propellant(&mut self, id: &str) -> ProjectResult<()> {
        if !self.propellants.contains_key(id) {
            let propellant = propellant_by_id(id)?;
            self.propellants.insert(id.to_string(), propellant);
        }
        Ok(())
    }

    pub fn solid(&self, id: &str) -> Option<&SolidMaterial> {
        self.solids.get(id)
    }

    pub fn propellant(&self, id: &str) -> Option<&Propellant> {
        self.propellants.get(id)
    }

    /// Build an unsized design point borrowing this library's records.
    pub fn tank_spec(&self, def: &TankDef) -> ProjectResult<TankSpec<'_>> {
        let missing = |id: &str, field: &str| {
            ProjectError::Validation(ValidationError::MissingReference {
                id: id.to_string(),
                context: format!("tank '{}' {field}", def.id),
            })
        };
        let fuel = self
            .propellant(&def.fuel)
            .ok_or_else(|| missing(&def.fuel, "fuel"))?;
        let structural = self
            .solid(&def.structural_material)
            .ok_or_else(|| missing(&def.structural_material, "structural_material"))?;
        let insulation = self
            .solid(&def.insulation_material)
            .ok_or_else(|| missing(&def.insulation_material, "insulation_material"))?;

        Ok(
            TankSpec::new(def.name.clone(), m(def.diameter_internal_m), m(def.length_internal_m))
                .with_design_pressure(pa(def.design_pressure_pa))
                .with_design_boiloff_rate(kgps(def.design_boiloff_rate_kgps))
                .with_temperature_outer(k(def.temperature_outer_k))
                .with_safety_factors(def.safety_factor_wall, def.safety_factor_insulation)
                .with_fuel(fuel)
                .with_structural_material(structural)
                .with_insulation_material(insulation),
        )
    }
}

/// Size every tank of a project in parallel, one report per tank in file
/// order. A tank that fails to size is reported, not returned as an error.
pub fn size_project(project: &Project) -> ProjectResult<Vec<TankReport>> {
    validate_project(project)?;
    let library = MaterialLibrary::from_project(project)?;
    let mut specs = project
        .tanks
        .iter()
        .map(|def| library.tank_spec(def))
        .collect::<ProjectResult<Vec<_>>>()?;

    info!(project = %project.name, tanks = specs.len(), "sizing project");
    let results = size_all(&mut specs);

    let reports: Vec<TankReport> = project
        .tanks
        .iter()
        .zip(&specs)
        .zip(&results)
        .map(|((def, spec), result)| TankReport::new(def.id.clone(), spec, result))
        .collect();

    for report in reports.iter().filter(|r| r.sized().is_none()) {
        warn!(tank = %report.id, outcome = ?report.outcome, "tank could not be sized");
    }
    Ok(reports)
}

/// Size a single tank by id, surfacing its sizing error.
pub fn size_tank(project: &Project, id: &str) -> ProjectResult<SizedTank> {
    validate_project(project)?;
    let def = project
        .tanks
        .iter()
        .find(|tank| tank.id == id)
        .ok_or_else(|| ValidationError::MissingReference {
            id: id.to_string(),
            context: "tanks".to_string(),
        })?;

    let library = MaterialLibrary::from_project(project)?;
    let mut spec = library.tank_spec(def)?;
    spec.calculate_all().map_err(|source| ProjectError::Tank {
        id: def.id.clone(),
        source,
    })?;

    SizedTank::from_spec(&spec).map_err(|source| ProjectError::Tank {
        id: def.id.clone(),
        source,
    })
}
