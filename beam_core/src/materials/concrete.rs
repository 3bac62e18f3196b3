//! Concrete Grades (IS 456:2000 designations)
//!
//! Characteristic compressive strength fck and the short-term elastic modulus
//! used for deflection.

use serde::{Deserialize, Serialize};

/// Concrete grades in the material table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteGrade {
    /// M20 - fck 20 MPa
    M20,
    /// M25 - fck 25 MPa
    M25,
}

impl ConcreteGrade {
    /// All concrete grades
    pub const ALL: [ConcreteGrade; 2] = [ConcreteGrade::M20, ConcreteGrade::M25];

    /// Grade designation as used in requests (e.g., "M20")
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteGrade::M20 => "M20",
            ConcreteGrade::M25 => "M25",
        }
    }

    /// Characteristic compressive strength fck (MPa)
    pub fn fck_mpa(&self) -> f64 {
        match self {
            ConcreteGrade::M20 => 20.0,
            ConcreteGrade::M25 => 25.0,
        }
    }

    /// Elastic modulus E (Pa)
    pub fn e_pa(&self) -> f64 {
        match self {
            ConcreteGrade::M20 => 25e9,
            ConcreteGrade::M25 => 30e9,
        }
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_values() {
        assert_eq!(ConcreteGrade::M20.fck_mpa(), 20.0);
        assert_eq!(ConcreteGrade::M25.e_pa(), 30e9);
    }
}
