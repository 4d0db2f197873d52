//! Serializable sizing results.

use ct_tank::{MassProperties, TankError, TankResult, TankSpec};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TankReport {
    pub id: String,
    pub name: String,
    pub outcome: SizingOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SizingOutcome {
    Sized(SizedTank),
    Failed { error: String },
}

/// Derived values of a fully sized tank, in SI units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizedTank {
    pub tank_type: String,
    pub thickness_structural_m: f64,
    pub thickness_insulation_m: f64,
    pub outer_diameter_m: f64,
    pub outer_length_m: f64,
    pub structural_mass_kg: f64,
    pub insulation_mass_kg: f64,
    pub empty_mass_kg: f64,
    pub fuel_volume_m3: f64,
    pub fuel_mass_kg: f64,
    pub heat_leak_w: f64,
}

impl SizedTank {
    /// Collect the derived fields of a sized tank. A field that was never
    /// written is a `StageOrder` error; a failed heat-leak evaluation is
    /// returned as is.
    pub fn from_spec(spec: &TankSpec<'_>) -> TankResult<Self> {
        let missing = |requires: &'static str| TankError::StageOrder {
            stage: "report",
            requires,
        };
        let mp = &spec.mass_properties;
        Ok(Self {
            tank_type: spec.tank_type.ok_or_else(|| missing("tank_type"))?.key().to_string(),
            thickness_structural_m: spec
                .thickness_structural
                .ok_or_else(|| missing("thickness_structural"))?
                .value,
            thickness_insulation_m: spec
                .thickness_insulation
                .ok_or_else(|| missing("thickness_insulation"))?
                .value,
            outer_diameter_m: spec.outer_diameter().ok_or_else(|| missing("outer_diameter"))?.value,
            outer_length_m: spec.outer_length().ok_or_else(|| missing("outer_length"))?.value,
            structural_mass_kg: mp.structural.ok_or_else(|| missing("structural mass"))?.value,
            insulation_mass_kg: mp.insulation.ok_or_else(|| missing("insulation mass"))?.value,
            empty_mass_kg: mp.empty_mass.ok_or_else(|| missing("empty mass"))?.value,
            fuel_volume_m3: mp
                .fuel_volume_when_full
                .ok_or_else(|| missing("fuel_volume_when_full"))?
                .value,
            fuel_mass_kg: mp
                .fuel_mass_when_full
                .ok_or_else(|| missing("fuel_mass_when_full"))?
                .value,
            heat_leak_w: spec.heat_leak()?.value,
        })
    }

    pub fn gross_mass_kg(&self) -> f64 {
        self.empty_mass_kg + self.fuel_mass_kg
    }
}

impl TankReport {
    pub fn new(
        id: impl Into<String>,
        spec: &TankSpec<'_>,
        result: &TankResult<MassProperties>,
    ) -> Self {
        let sized = match result {
            Ok(_) => SizedTank::from_spec(spec),
            Err(err) => Err(err.clone()),
        };
        let outcome = match sized {
            Ok(sized) => SizingOutcome::Sized(sized),
            Err(err) => SizingOutcome::Failed {
                error: err.to_string(),
            },
        };
        Self {
            id: id.into(),
            name: spec.name.clone(),
            outcome,
        }
    }

    pub fn sized(&self) -> Option<&SizedTank> {
        match &self.outcome {
            SizingOutcome::Sized(sized) => Some(sized),
            SizingOutcome::Failed { .. } => None,
        }
    }
}
