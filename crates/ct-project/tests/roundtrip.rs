use ct_project::schema::*;
use ct_project::{load_json, load_yaml, save_json, save_yaml, validate_project};

fn lh2_tank(id: &str) -> TankDef {
    TankDef {
        id: id.to_string(),
        name: "LH2 tank".to_string(),
        diameter_internal_m: 2.0,
        length_internal_m: 6.0,
        design_pressure_pa: 200_000.0,
        design_boiloff_rate_kgps: 1.0e-4,
        temperature_outer_k: 300.0,
        safety_factor_wall: 2.25,
        safety_factor_insulation: 1.2,
        fuel: "LH2".to_string(),
        structural_material: "Al2219".to_string(),
        insulation_material: "MLI".to_string(),
    }
}

#[test]
fn roundtrip_yaml_empty_project() {
    let project = Project {
        version: 1,
        name: "Empty Project".to_string(),
        materials: vec![],
        propellants: vec![],
        tanks: vec![],
    };

    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("ct_project_roundtrip_empty.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_with_local_definitions() {
    let project = Project {
        version: 1,
        name: "Local Definitions".to_string(),
        materials: vec![SolidMaterialDef {
            id: "ti-cryo".to_string(),
            name: "Titanium (cryogenic)".to_string(),
            density_kg_m3: 4430.0,
            thermal_conductivity_w_m_k: 4.0,
            yield_tensile_strength_pa: Some(1.2e9),
        }],
        propellants: vec![PropellantDef {
            id: "slush-h2".to_string(),
            name: "Slush hydrogen".to_string(),
            density_kg_m3: 81.5,
            enthalpy_vaporisation_j_kg: 450_000.0,
            storage_temperature_k: 13.8,
        }],
        tanks: vec![TankDef {
            fuel: "slush-h2".to_string(),
            structural_material: "ti-cryo".to_string(),
            ..lh2_tank("t1")
        }],
    };

    let path = std::env::temp_dir().join("ct_project_roundtrip_local.json");
    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn safety_factors_default_when_omitted() {
    let yaml = r#"
version: 1
name: Defaults
tanks:
  - id: t1
    name: Sphere
    diameter_internal_m: 2.0
    length_internal_m: 2.0
    design_pressure_pa: 200000.0
    design_boiloff_rate_kgps: 0.0001
    temperature_outer_k: 300.0
    fuel: LH2
    structural_material: Al2219
    insulation_material: MLI
"#;
    let project: Project = serde_yaml::from_str(yaml).unwrap();
    validate_project(&project).unwrap();

    let tank = &project.tanks[0];
    assert_eq!(tank.safety_factor_wall, 2.25);
    assert_eq!(tank.safety_factor_insulation, 1.2);
    assert!(project.materials.is_empty());
}

#[test]
fn save_refuses_invalid_project() {
    let project = Project {
        version: 1,
        name: "Broken".to_string(),
        materials: vec![],
        propellants: vec![],
        tanks: vec![TankDef {
            fuel: "unobtanium".to_string(),
            ..lh2_tank("t1")
        }],
    };

    let path = std::env::temp_dir().join("ct_project_roundtrip_invalid.yaml");
    assert!(save_yaml(&path, &project).is_err());
}
