//! # Materials Database
//!
//! Fixed table of material grades: characteristic strength (fck for concrete,
//! fy for steel) and elastic modulus. The table is built once on first use and
//! never changes afterwards, so lookups are lock-free reads from any thread.
//!
//! ## Grades
//!
//! | Grade | Kind     | Strength (MPa) | E (Pa) |
//! |-------|----------|----------------|--------|
//! | M20   | Concrete | fck = 20       | 25e9   |
//! | M25   | Concrete | fck = 25       | 30e9   |
//! | Fe415 | Steel    | fy = 415       | 2e11   |
//! | Fe500 | Steel    | fy = 500       | 2e11   |
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::{material_lookup, MaterialKind};
//!
//! let m20 = material_lookup("M20").unwrap();
//! assert_eq!(m20.kind, MaterialKind::Concrete);
//! assert_eq!(m20.allowable_stress_mpa(), 20.0);
//!
//! // Unknown grades are a recoverable condition for the caller
//! let err = material_lookup("M99").unwrap_err();
//! assert!(err.is_recoverable());
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::ConcreteGrade;
pub use steel::{SteelGrade, STEEL_E_PA};

use std::collections::HashMap;

use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Broad material family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Strength is the characteristic compressive strength fck
    Concrete,
    /// Strength is the yield strength fy
    Steel,
}

/// Properties of one material grade.
///
/// ## JSON Example
///
/// ```json
/// { "grade": "M20", "kind": "Concrete", "strength_mpa": 20.0, "e_pa": 25000000000.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Grade designation (e.g., "M20", "Fe415")
    pub grade: String,
    /// Material family
    pub kind: MaterialKind,
    /// Characteristic strength fck or yield strength fy (MPa)
    pub strength_mpa: f64,
    /// Elastic modulus E (Pa)
    pub e_pa: f64,
}

impl MaterialProperties {
    /// Characteristic compressive strength, for concrete grades
    pub fn fck_mpa(&self) -> Option<f64> {
        match self.kind {
            MaterialKind::Concrete => Some(self.strength_mpa),
            MaterialKind::Steel => None,
        }
    }

    /// Yield strength, for steel grades
    pub fn fy_mpa(&self) -> Option<f64> {
        match self.kind {
            MaterialKind::Steel => Some(self.strength_mpa),
            MaterialKind::Concrete => None,
        }
    }

    /// Allowable bending stress used by the stress check (MPa)
    ///
    /// The check compares the extreme-fiber stress directly against the
    /// grade strength; no partial safety factor is applied.
    pub fn allowable_stress_mpa(&self) -> f64 {
        self.strength_mpa
    }
}

impl From<ConcreteGrade> for MaterialProperties {
    fn from(grade: ConcreteGrade) -> Self {
        MaterialProperties {
            grade: grade.code().to_string(),
            kind: MaterialKind::Concrete,
            strength_mpa: grade.fck_mpa(),
            e_pa: grade.e_pa(),
        }
    }
}

impl From<SteelGrade> for MaterialProperties {
    fn from(grade: SteelGrade) -> Self {
        MaterialProperties {
            grade: grade.code().to_string(),
            kind: MaterialKind::Steel,
            strength_mpa: grade.fy_mpa(),
            e_pa: STEEL_E_PA,
        }
    }
}

/// Grade table keyed by upper-cased designation.
static MATERIAL_TABLE: Lazy<HashMap<String, MaterialProperties>> = Lazy::new(|| {
    let concrete = ConcreteGrade::ALL.iter().map(|&g| MaterialProperties::from(g));
    let steel = SteelGrade::ALL.iter().map(|&g| MaterialProperties::from(g));
    concrete
        .chain(steel)
        .map(|props| (props.grade.to_uppercase(), props))
        .collect()
});

/// Look up a material grade by designation (case-insensitive).
///
/// # Errors
///
/// `MaterialNotFound` for grades not in the table. This is recoverable: the
/// caller decides whether to fall back (see [`lookup_or_default`]) or reject.
pub fn material_lookup(name: &str) -> CalcResult<MaterialProperties> {
    MATERIAL_TABLE
        .get(&name.trim().to_uppercase())
        .cloned()
        .ok_or_else(|| CalcError::material_not_found(name))
}

/// Look up `name`, substituting `fallback` when the grade is unknown.
///
/// Only `MaterialNotFound` triggers the fallback; an unknown fallback grade is
/// still an error.
pub fn lookup_or_default(name: &str, fallback: &str) -> CalcResult<MaterialProperties> {
    match material_lookup(name) {
        Ok(props) => Ok(props),
        Err(err) if err.is_recoverable() => {
            warn!("material grade '{}' not found, falling back to '{}'", name, fallback);
            material_lookup(fallback)
        }
        Err(err) => Err(err),
    }
}

/// All grade designations in the table, sorted
pub fn available_grades() -> Vec<&'static str> {
    let mut grades: Vec<&'static str> = ConcreteGrade::ALL
        .iter()
        .map(|g| g.code())
        .chain(SteelGrade::ALL.iter().map(|g| g.code()))
        .collect();
    grades.sort_unstable();
    grades
}
