//! ct-materials: property records consumed by the tank sizing engine.
//!
//! Provides:
//! - `SolidMaterial` for structural walls and insulation layers
//! - `Propellant` for the stored cryogenic fuel
//! - A built-in catalog of common tank alloys, insulations and propellants
//!
//! Records are plain read-only data. The sizing engine borrows them, so one
//! record can back any number of tank design points.
//!
//! # Example
//!
//! ```
//! use ct_materials::{propellant_by_id, solid_by_id};
//!
//! let lh2 = propellant_by_id("LH2").unwrap();
//! let mli = solid_by_id("mli").unwrap();
//! assert!(lh2.density.value > 70.0);
//! assert!(mli.yield_tensile_strength.is_none());
//! ```

pub mod catalog;
pub mod error;
pub mod propellant;
pub mod solid;

// Re-exports for ergonomics
pub use catalog::{
    PropellantCatalogEntry, SolidCatalogEntry, filter_propellant_catalog, filter_solid_catalog,
    propellant_by_id, propellant_catalog, solid_by_id, solid_catalog,
};
pub use error::{MaterialError, MaterialResult};
pub use propellant::{Propellant, PropellantTemperatures};
pub use solid::SolidMaterial;
