//! ct-tank: structural and thermal sizing of cryogenic propellant tanks.
//!
//! Given a propellant, a structural wall material, an insulation material and
//! the tank's internal dimensions and design loads, the engine derives:
//! - wall thickness (thin-shell pressure vessel, scaled by a safety factor)
//! - structural mass
//! - insulation thickness (steady conduction against an allowable boil-off)
//! - insulation mass
//! - fuel volume and fuel mass when full
//!
//! Two shapes are supported: a sphere, and a cylinder closed by hemispherical
//! caps. Every relation is closed-form and the stages run strictly forward.
//!
//! # Example
//!
//! ```
//! use ct_core::units::{k, kgps, m, pa};
//! use ct_materials::{propellant_by_id, solid_by_id};
//! use ct_tank::{TankSpec, TankType};
//!
//! let lh2 = propellant_by_id("LH2").unwrap();
//! let wall = solid_by_id("Al2219").unwrap();
//! let mli = solid_by_id("MLI").unwrap();
//!
//! let mut tank = TankSpec::new("LH2 main", m(2.0), m(6.0))
//!     .with_design_pressure(pa(300_000.0))
//!     .with_design_boiloff_rate(kgps(1.0e-4))
//!     .with_temperature_outer(k(300.0))
//!     .with_fuel(&lh2)
//!     .with_structural_material(&wall)
//!     .with_insulation_material(&mli);
//!
//! let mass = tank.calculate_all().unwrap();
//! assert_eq!(tank.tank_type, Some(TankType::Cylindrical));
//! assert!(mass.empty_mass.unwrap().value > 0.0);
//! ```

pub mod batch;
pub mod capacity;
pub mod error;
pub mod geometry;
pub mod insulation;
pub mod limits;
pub mod shape;
pub mod sizing;
pub mod spec;
pub mod structure;

// Re-exports
pub use batch::size_all;
pub use error::{TankError, TankResult};
pub use geometry::TankGeometry;
pub use shape::TankType;
pub use spec::{MassProperties, ResolvedMaterials, TankSpec};
