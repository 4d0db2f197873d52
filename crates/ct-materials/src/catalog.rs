use crate::error::{MaterialError, MaterialResult};
use crate::propellant::Propellant;
use crate::solid::SolidMaterial;
use ct_core::units::{j_per_kg, k, kg_per_m3, pa, w_per_m_k};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidCatalogEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub density_kg_m3: f64,
    pub thermal_conductivity_w_m_k: f64,
    pub yield_tensile_strength_pa: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropellantCatalogEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub density_kg_m3: f64,
    pub enthalpy_vaporisation_j_kg: f64,
    pub storage_temperature_k: f64,
}

fn matches_query(id: &str, display: &str, aliases: &[&str], query: &str) -> bool {
    let query = query.trim().to_ascii_lowercase();
    if query.is_empty() {
        return true;
    }

    id.to_ascii_lowercase().contains(&query)
        || display.to_ascii_lowercase().contains(&query)
        || aliases
            .iter()
            .any(|alias| alias.to_ascii_lowercase().contains(&query))
}

fn matches_id(id: &str, display: &str, aliases: &[&str], key: &str) -> bool {
    let key = key.trim();
    id.eq_ignore_ascii_case(key)
        || display.eq_ignore_ascii_case(key)
        || aliases.iter().any(|alias| alias.eq_ignore_ascii_case(key))
}

impl SolidCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        matches_query(self.canonical_id, self.display_name, self.aliases, query)
    }

    pub fn material(&self) -> SolidMaterial {
        let material = SolidMaterial::new(
            self.display_name,
            kg_per_m3(self.density_kg_m3),
            w_per_m_k(self.thermal_conductivity_w_m_k),
        );
        match self.yield_tensile_strength_pa {
            Some(sigma) => material.with_yield_tensile_strength(pa(sigma)),
            None => material,
        }
    }
}

impl PropellantCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        matches_query(self.canonical_id, self.display_name, self.aliases, query)
    }

    pub fn propellant(&self) -> Propellant {
        Propellant::new(
            self.display_name,
            kg_per_m3(self.density_kg_m3),
            j_per_kg(self.enthalpy_vaporisation_j_kg),
            k(self.storage_temperature_k),
        )
    }
}

// Room-temperature handbook values; conductivities of the metals drop
// substantially at cryogenic temperatures, which keeps these conservative.
const SOLID_CATALOG: [SolidCatalogEntry; 7] = [
    SolidCatalogEntry {
        canonical_id: "MLI",
        display_name: "Multi-Layer Insulation",
        aliases: &["multi-layer insulation", "multilayer insulation"],
        density_kg_m3: 50.0,
        thermal_conductivity_w_m_k: 1.0e-4,
        yield_tensile_strength_pa: None,
    },
    SolidCatalogEntry {
        canonical_id: "SOFI",
        display_name: "Spray-On Foam Insulation",
        aliases: &["polyurethane foam", "pu foam", "foam"],
        density_kg_m3: 35.0,
        thermal_conductivity_w_m_k: 0.02,
        yield_tensile_strength_pa: None,
    },
    SolidCatalogEntry {
        canonical_id: "Al2219",
        display_name: "Aluminium 2219-T87",
        aliases: &["aluminium 2219", "aluminum 2219", "2219-t87"],
        density_kg_m3: 2840.0,
        thermal_conductivity_w_m_k: 121.0,
        yield_tensile_strength_pa: Some(393.0e6),
    },
    SolidCatalogEntry {
        canonical_id: "Al2195",
        display_name: "Aluminium-Lithium 2195-T8",
        aliases: &["al-li 2195", "aluminium-lithium", "aluminum-lithium"],
        density_kg_m3: 2710.0,
        thermal_conductivity_w_m_k: 88.0,
        yield_tensile_strength_pa: Some(560.0e6),
    },
    SolidCatalogEntry {
        canonical_id: "SS304",
        display_name: "Stainless Steel 304",
        aliases: &["304 stainless", "stainless steel"],
        density_kg_m3: 8000.0,
        thermal_conductivity_w_m_k: 16.2,
        yield_tensile_strength_pa: Some(215.0e6),
    },
    SolidCatalogEntry {
        canonical_id: "Ti6Al4V",
        display_name: "Titanium Ti-6Al-4V",
        aliases: &["titanium", "ti-6al-4v", "grade 5 titanium"],
        density_kg_m3: 4430.0,
        thermal_conductivity_w_m_k: 6.7,
        yield_tensile_strength_pa: Some(880.0e6),
    },
    SolidCatalogEntry {
        canonical_id: "CFRP",
        display_name: "Carbon Fibre Reinforced Polymer",
        aliases: &["carbon fibre", "carbon fiber", "composite"],
        density_kg_m3: 1600.0,
        thermal_conductivity_w_m_k: 5.0,
        yield_tensile_strength_pa: Some(600.0e6),
    },
];

const PROPELLANT_CATALOG: [PropellantCatalogEntry; 4] = [
    PropellantCatalogEntry {
        canonical_id: "LH2",
        display_name: "Liquid Hydrogen",
        aliases: &["hydrogen", "h2"],
        density_kg_m3: 70.85,
        enthalpy_vaporisation_j_kg: 446_000.0,
        storage_temperature_k: 20.27,
    },
    PropellantCatalogEntry {
        canonical_id: "LOX",
        display_name: "Liquid Oxygen",
        aliases: &["oxygen", "o2"],
        density_kg_m3: 1141.0,
        enthalpy_vaporisation_j_kg: 213_100.0,
        storage_temperature_k: 90.19,
    },
    PropellantCatalogEntry {
        canonical_id: "LCH4",
        display_name: "Liquid Methane",
        aliases: &["methane", "ch4", "lng"],
        density_kg_m3: 422.6,
        enthalpy_vaporisation_j_kg: 510_800.0,
        storage_temperature_k: 111.67,
    },
    PropellantCatalogEntry {
        canonical_id: "LN2",
        display_name: "Liquid Nitrogen",
        aliases: &["nitrogen", "n2"],
        density_kg_m3: 808.0,
        enthalpy_vaporisation_j_kg: 199_200.0,
        storage_temperature_k: 77.36,
    },
];

pub fn solid_catalog() -> &'static [SolidCatalogEntry] {
    &SOLID_CATALOG
}

pub fn propellant_catalog() -> &'static [PropellantCatalogEntry] {
    &PROPELLANT_CATALOG
}

pub fn filter_solid_catalog(query: &str) -> Vec<SolidCatalogEntry> {
    solid_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

pub fn filter_propellant_catalog(query: &str) -> Vec<PropellantCatalogEntry> {
    propellant_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// Exact (case-insensitive) lookup by id, display name or alias.
pub fn solid_by_id(id: &str) -> MaterialResult<SolidMaterial> {
    solid_catalog()
        .iter()
        .find(|entry| matches_id(entry.canonical_id, entry.display_name, entry.aliases, id))
        .map(SolidCatalogEntry::material)
        .ok_or_else(|| MaterialError::Unknown { id: id.to_string() })
}

/// Exact (case-insensitive) lookup by id, display name or alias.
pub fn propellant_by_id(id: &str) -> MaterialResult<Propellant> {
    propellant_catalog()
        .iter()
        .find(|entry| matches_id(entry.canonical_id, entry.display_name, entry.aliases, id))
        .map(PropellantCatalogEntry::propellant)
        .ok_or_else(|| MaterialError::Unknown { id: id.to_string() })
}
