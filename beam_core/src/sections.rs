//! # Section Properties
//!
//! Derived geometric properties of the beam cross-section. Properties are a
//! pure function of width and depth and are recomputed per request.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::sections::rectangular_section;
//!
//! let section = rectangular_section(0.3, 0.5).unwrap();
//! assert!((section.i_m4 - 3.125e-3).abs() < 1e-12);
//! assert!((section.z_m3 - 0.0125).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    rectangular_area, rectangular_moment_of_inertia, rectangular_section_modulus,
};
use crate::errors::{CalcError, CalcResult};
use crate::units::{CubicMeters, CubicMillimeters};

/// Properties of a solid rectangular section (SI units).
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_m": 0.3,
///   "depth_m": 0.5,
///   "area_m2": 0.15,
///   "i_m4": 0.003125,
///   "z_m3": 0.0125
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Width b (m)
    pub width_m: f64,
    /// Depth d (m)
    pub depth_m: f64,
    /// Area A = b·d (m²)
    pub area_m2: f64,
    /// Second moment of area I = b·d³/12 (m⁴)
    pub i_m4: f64,
    /// Section modulus Z = I/(d/2) (m³)
    pub z_m3: f64,
}

impl SectionProperties {
    /// Section modulus in mm³, the unit paired with N·mm moments to give MPa
    pub fn z_mm3(&self) -> f64 {
        CubicMillimeters::from(CubicMeters(self.z_m3)).value()
    }
}

/// Compute properties of a rectangular section.
///
/// # Errors
///
/// `InvalidInput` if either dimension is not a positive, finite number.
pub fn rectangular_section(b: f64, d: f64) -> CalcResult<SectionProperties> {
    if !b.is_finite() || b <= 0.0 {
        return Err(CalcError::invalid_input(
            "width_m",
            b.to_string(),
            "Section width must be positive",
        ));
    }
    if !d.is_finite() || d <= 0.0 {
        return Err(CalcError::invalid_input(
            "depth_m",
            d.to_string(),
            "Section depth must be positive",
        ));
    }

    Ok(SectionProperties {
        width_m: b,
        depth_m: d,
        area_m2: rectangular_area(b, d),
        i_m4: rectangular_moment_of_inertia(b, d),
        z_m3: rectangular_section_modulus(b, d),
    })
}
