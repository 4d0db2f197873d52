//! Tank shape classification.

use crate::limits::NEAR_SPHERICAL_REL_GAP;
use ct_core::units::Length;
use std::fmt;

/// Geometry class of a tank, decided once from its internal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TankType {
    /// Single sphere of diameter `D`.
    Spherical,
    /// Cylindrical barrel of length `L - D` closed by two hemispherical caps.
    Cylindrical,
}

impl TankType {
    /// Spherical iff the internal diameter and length are exactly equal.
    ///
    /// The comparison is exact on purpose: a tank whose length differs in the
    /// last bit is cylindrical, and its barrel term is then vanishingly small
    /// rather than silently snapped to zero.
    pub fn classify(diameter_internal: Length, length_internal: Length) -> Self {
        if diameter_internal.value == length_internal.value {
            TankType::Spherical
        } else {
            TankType::Cylindrical
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TankType::Spherical => "spherical",
            TankType::Cylindrical => "cylindrical",
        }
    }
}

impl fmt::Display for TankType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// True for a cylinder whose barrel is negligible next to its diameter.
pub fn is_near_spherical(diameter_internal: Length, length_internal: Length) -> bool {
    let d = diameter_internal.value;
    let l = length_internal.value;
    d != l && (l - d).abs() <= NEAR_SPHERICAL_REL_GAP * d.abs().max(l.abs())
}
