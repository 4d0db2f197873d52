//! ct-project: tank design-point files, validation and batch sizing.

pub mod library;
pub mod report;
pub mod schema;
pub mod validate;

pub use library::{MaterialLibrary, size_project, size_tank};
pub use report::{SizedTank, SizingOutcome, TankReport};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_project};

use ct_materials::MaterialError;
use ct_tank::TankError;
use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Material error: {0}")]
    Material(#[from] MaterialError),

    #[error("Tank '{id}': {source}")]
    Tank {
        id: String,
        #[source]
        source: TankError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn read_project(
    path: &Path,
    parse: impl FnOnce(&str) -> ProjectResult<Project>,
) -> ProjectResult<Project> {
    let project = parse(&std::fs::read_to_string(path)?)?;
    validate_project(&project)?;
    Ok(project)
}

fn write_project(
    path: &Path,
    project: &Project,
    render: impl FnOnce(&Project) -> ProjectResult<String>,
) -> ProjectResult<()> {
    validate_project(project)?;
    std::fs::write(path, render(project)?)?;
    Ok(())
}

pub fn load_yaml(path: &Path) -> ProjectResult<Project> {
    read_project(path, |text| Ok(serde_yaml::from_str(text)?))
}

pub fn save_yaml(path: &Path, project: &Project) -> ProjectResult<()> {
    write_project(path, project, |p| Ok(serde_yaml::to_string(p)?))
}

pub fn load_json(path: &Path) -> ProjectResult<Project> {
    read_project(path, |text| Ok(serde_json::from_str(text)?))
}

pub fn save_json(path: &Path, project: &Project) -> ProjectResult<()> {
    write_project(path, project, |p| Ok(serde_json::to_string_pretty(p)?))
}

/// Write sizing results as pretty JSON.
pub fn save_reports_json(path: &Path, reports: &[TankReport]) -> ProjectResult<()> {
    std::fs::write(path, serde_json::to_string_pretty(reports)?)?;
    Ok(())
}

/// Write sizing results as YAML.
pub fn save_reports_yaml(path: &Path, reports: &[TankReport]) -> ProjectResult<()> {
    std::fs::write(path, serde_yaml::to_string(reports)?)?;
    Ok(())
}
