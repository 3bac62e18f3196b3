//! Reinforcing Steel Grades (IS 1786 designations)
//!
//! Yield strength fy and elastic modulus. All grades share E = 200 GPa.

use serde::{Deserialize, Serialize};

/// Elastic modulus of reinforcing steel (Pa)
pub const STEEL_E_PA: f64 = 2e11;

/// Steel grades in the material table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// Fe415 - fy 415 MPa
    Fe415,
    /// Fe500 - fy 500 MPa
    Fe500,
}

impl SteelGrade {
    /// All steel grades
    pub const ALL: [SteelGrade; 2] = [SteelGrade::Fe415, SteelGrade::Fe500];

    /// Grade designation as used in requests (e.g., "Fe415")
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::Fe415 => "Fe415",
            SteelGrade::Fe500 => "Fe500",
        }
    }

    /// Yield strength fy (MPa)
    pub fn fy_mpa(&self) -> f64 {
        match self {
            SteelGrade::Fe415 => 415.0,
            SteelGrade::Fe500 => 500.0,
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
