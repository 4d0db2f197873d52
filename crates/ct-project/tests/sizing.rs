use ct_project::schema::*;
use ct_project::{
    MaterialLibrary, ProjectError, SizingOutcome, load_yaml, save_reports_json,
    save_reports_yaml, size_project, size_tank,
};
use std::f64::consts::PI;
use std::path::Path;

fn tank(id: &str, d: f64, l: f64, p: f64) -> TankDef {
    TankDef {
        id: id.to_string(),
        name: format!("tank {id}"),
        diameter_internal_m: d,
        length_internal_m: l,
        design_pressure_pa: p,
        design_boiloff_rate_kgps: 1.0e-4,
        temperature_outer_k: 300.0,
        safety_factor_wall: 2.25,
        safety_factor_insulation: 1.2,
        fuel: "LH2".to_string(),
        structural_material: "ref-alloy".to_string(),
        insulation_material: "MLI".to_string(),
    }
}

fn project(tanks: Vec<TankDef>) -> Project {
    Project {
        version: 1,
        name: "Sizing".to_string(),
        materials: vec![SolidMaterialDef {
            id: "ref-alloy".to_string(),
            name: "Reference alloy".to_string(),
            density_kg_m3: 2800.0,
            thermal_conductivity_w_m_k: 121.0,
            yield_tensile_strength_pa: Some(3.0e8),
        }],
        propellants: vec![],
        tanks,
    }
}

#[test]
fn library_prefers_local_definitions() {
    let mut p = project(vec![tank("a", 2.0, 2.0, 2e5)]);
    p.propellants.push(PropellantDef {
        id: "LH2".to_string(),
        name: "Densified hydrogen".to_string(),
        density_kg_m3: 76.0,
        enthalpy_vaporisation_j_kg: 450_000.0,
        storage_temperature_k: 16.0,
    });
    let library = MaterialLibrary::from_project(&p).unwrap();
    assert_eq!(library.propellant("LH2").unwrap().density.value, 76.0);
    assert_eq!(library.solid("MLI").unwrap().density.value, 50.0);
    assert!(library.solid("Al2219").is_none());
}

#[test]
fn reference_sphere_is_sized() {
    let p = project(vec![tank("sphere", 2.0, 2.0, 2e5)]);
    let sized = size_tank(&p, "sphere").unwrap();

    assert_eq!(sized.tank_type, "spherical");
    let t_min = (1.0_f64 - 1.5 * 2e5 / 3e8).powf(-1.0 / 3.0) - 1.0;
    assert!((sized.thickness_structural_m - 2.25 * t_min).abs() < 1e-15);

    let t = sized.thickness_structural_m;
    let shell = 4.0 / 3.0 * PI * ((1.0 + t).powi(3) - 1.0);
    assert!((sized.structural_mass_kg - 2800.0 * shell).abs() < 1e-9 * sized.structural_mass_kg);
    assert_eq!(sized.fuel_mass_kg, sized.fuel_volume_m3 * 70.85);
    assert!((sized.heat_leak_w - 44.6).abs() < 1e-12);
    assert!(sized.gross_mass_kg() > sized.empty_mass_kg);
}

#[test]
fn size_tank_surfaces_infeasibility() {
    let p = project(vec![tank("burst", 2.0, 2.0, 2e8)]);
    match size_tank(&p, "burst") {
        Err(ProjectError::Tank { id, source }) => {
            assert_eq!(id, "burst");
            assert!(matches!(source, ct_tank::TankError::Infeasible { .. }));
        }
        other => panic!("expected tank error, got {other:?}"),
    }
    assert!(matches!(
        size_tank(&p, "missing"),
        Err(ProjectError::Validation(_))
    ));
}

#[test]
fn project_reports_keep_order_and_failures() {
    let p = project(vec![
        tank("a", 2.0, 2.0, 2e5),
        tank("b", 2.0, 2.0, 2e8),
        tank("c", 2.0, 7.0, 2e5),
    ]);
    let reports = size_project(&p).unwrap();

    let ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert!(reports[0].sized().is_some());
    assert!(matches!(reports[1].outcome, SizingOutcome::Failed { .. }));
    assert_eq!(reports[2].sized().unwrap().tank_type, "cylindrical");
}

#[test]
fn reports_serialize_with_status_tag() {
    let p = project(vec![tank("a", 2.0, 5.0, 2e5), tank("b", 2.0, 2.0, 2e8)]);
    let reports = size_project(&p).unwrap();

    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["outcome"]["status"], "sized");
    assert_eq!(json[1]["outcome"]["status"], "failed");

    let dir = std::env::temp_dir();
    let json_path = dir.join("ct_project_reports.json");
    let yaml_path = dir.join("ct_project_reports.yaml");
    save_reports_json(&json_path, &reports).unwrap();
    save_reports_yaml(&yaml_path, &reports).unwrap();

    let content = std::fs::read_to_string(&yaml_path).unwrap();
    let back: Vec<ct_project::TankReport> = serde_yaml::from_str(&content).unwrap();
    assert_eq!(back, reports);
}

#[test]
fn bundled_project_sizes_every_tank() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("projects")
        .join("upper_stage.yaml");
    let project = load_yaml(&path).unwrap_or_else(|e| panic!("failed to load {path:?}: {e}"));

    let reports = size_project(&project).unwrap();
    assert_eq!(reports.len(), project.tanks.len());
    for report in &reports {
        let sized = report
            .sized()
            .unwrap_or_else(|| panic!("tank {} not sized: {:?}", report.id, report.outcome));
        assert!(sized.empty_mass_kg > 0.0);
        assert!(sized.thickness_insulation_m > 0.0);
    }
    assert_eq!(reports[1].sized().unwrap().tank_type, "spherical");
}
