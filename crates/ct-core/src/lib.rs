//! ct-core: units, float guards and the shared error type for cryotank.

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CtError, CtResult};
pub use numeric::{ensure_finite, ensure_positive};
pub use units::*;
